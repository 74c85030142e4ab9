use serde::Serialize;
use std::fmt;

/// Outcome class of a driver's document check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// A required attribute is missing.
    Incomplete,
    /// A document deadline has passed.
    Expired,
    /// A deadline falls within the urgent window.
    Urgent,
    /// A deadline falls within the upcoming window.
    Upcoming,
    Ok,
}

impl StatusKind {
    pub const ALL: [StatusKind; 5] = [
        StatusKind::Incomplete,
        StatusKind::Expired,
        StatusKind::Urgent,
        StatusKind::Upcoming,
        StatusKind::Ok,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Incomplete => "incomplete",
            StatusKind::Expired => "expired",
            StatusKind::Urgent => "urgent",
            StatusKind::Upcoming => "upcoming",
            StatusKind::Ok => "ok",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        StatusKind::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn message(&self) -> &'static str {
        match self {
            StatusKind::Incomplete => "Incomplete information",
            StatusKind::Expired => "Attention! Expired document",
            StatusKind::Urgent => "Attention! Expiration identified",
            StatusKind::Upcoming => "Expiration approaching",
            StatusKind::Ok => "All good!",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single classification shown next to a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl ComplianceStatus {
    pub fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

impl From<StatusKind> for ComplianceStatus {
    fn from(kind: StatusKind) -> Self {
        Self::new(kind)
    }
}
