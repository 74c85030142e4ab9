use serde::Serialize;

/// One occurrence of a workday event. Either end may be missing: an open
/// interval is valid data, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Interval {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    Shift,
    Meal,
    Rest,
    LoadUnload,
}

impl IntervalKind {
    pub fn label(&self) -> &'static str {
        match self {
            IntervalKind::Shift => "shift",
            IntervalKind::Meal => "meal",
            IntervalKind::Rest => "rest",
            IntervalKind::LoadUnload => "load/unload",
        }
    }
}
