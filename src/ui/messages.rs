//! User-facing console messages. Diagnostics go through `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}

/// Errors go to stderr so piped listings stay clean.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg));
}

/// Section title above a driver card or a workday timeline.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}── {msg} ──{RESET}");
}
