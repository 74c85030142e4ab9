use super::entity::FromPositional;
use super::layout::{EntityKind, Slots};
use super::value::Value;
use serde::Serialize;

/// Encoding of "no authorized routes".
pub const NO_ROUTES: &str = "[]";

/// A login account of the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: bool,
    /// JSON list of route names, kept encoded as stored.
    pub authorized_routes: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            password: None,
            is_admin: false,
            authorized_routes: NO_ROUTES.to_string(),
        }
    }
}

impl User {
    /// Decoded route list; a malformed list reads as empty.
    pub fn routes(&self) -> Vec<String> {
        serde_json::from_str(&self.authorized_routes).unwrap_or_default()
    }

    pub fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("is_admin", Some(self.is_admin.to_string())),
            ("authorized_routes", Some(self.authorized_routes.clone())),
        ]
    }
}

impl FromPositional for User {
    const KIND: EntityKind = EntityKind::User;

    fn from_slots(slots: Slots<'_>) -> Self {
        let no_routes = Value::from(NO_ROUTES);
        Self {
            name: slots.text("name"),
            email: slots.text("email"),
            password: slots.text("password"),
            is_admin: slots.value("is_admin").is_truthy(),
            authorized_routes: slots
                .value_or("authorized_routes", &no_routes)
                .as_text()
                .unwrap_or_else(|| NO_ROUTES.to_string()),
        }
    }
}

