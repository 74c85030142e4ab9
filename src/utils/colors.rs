/// ANSI color helper utilities for terminal output.
use crate::models::StatusKind;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";
pub const ORANGE: &str = "\x1b[38;5;208m";

/// Status color:
/// incomplete → magenta
/// expired → red
/// urgent → orange
/// upcoming → yellow
/// ok → green
pub fn color_for_status(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Incomplete => MAGENTA,
        StatusKind::Expired => RED,
        StatusKind::Urgent => ORANGE,
        StatusKind::Upcoming => YELLOW,
        StatusKind::Ok => GREEN,
    }
}

pub fn colorize_status(kind: StatusKind, text: &str) -> String {
    format!("{}{text}{RESET}", color_for_status(kind))
}

/// Colored rendering of an optional value; missing values print as a grey
/// `--:--`.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}--:--{RESET}"),
    }
}
