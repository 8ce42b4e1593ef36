//! Terminal message helpers and status coloring.

use crate::models::Status;
use std::fmt;

/// ANSI colors
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const FG_BLUE: &str = "\x1b[34m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_GREY: &str = "\x1b[90m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Status label colored the way the dashboard does: green for completed,
/// yellow for in progress, grey for not started.
pub fn colored_status(status: Status) -> String {
    let color = match status {
        Status::Completed => FG_GREEN,
        Status::InProgress => FG_YELLOW,
        Status::NotStarted => FG_GREY,
    };
    format!("{color}{}{RESET}", status.label())
}

/// Section header for stats output.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", FG_CYAN, BOLD, msg, RESET);
}
