//! Result → JSON line formatting.
//!
//! Every command yields one line: `{"ok": <output>}` on success,
//! `{"error": <error>}` otherwise. Lines that are not a valid command are
//! reported as `{"error": {"InvalidCommand": {"reason": ...}}}`.

use consolemock_executor::{Error, Output};
use serde_json::{json, Value};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Compact,
    Pretty,
}

/// Format a command result.
pub fn format_result(result: &Result<Output, Error>, mode: OutputMode) -> String {
    let value = match result {
        Ok(output) => json!({ "ok": output }),
        Err(err) => json!({ "error": err }),
    };
    render(&value, mode)
}

/// Format a line that could not be decoded as a command.
pub fn format_invalid(reason: &str, mode: OutputMode) -> String {
    render(
        &json!({ "error": { "InvalidCommand": { "reason": reason } } }),
        mode,
    )
}

fn render(value: &Value, mode: OutputMode) -> String {
    let rendered = match mode {
        OutputMode::Compact => serde_json::to_string(value),
        OutputMode::Pretty => serde_json::to_string_pretty(value),
    };
    // Value always serializes
    rendered.unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
