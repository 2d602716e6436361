//! Error types for the snapgrid boundary.
//!
//! The geometry itself never fails. Errors only come from decoding layout
//! requests, naming breakpoints, and CLI file handling.

use thiserror::Error;

/// The unified error type returned by the JSON and CLI entry points.
#[derive(Debug, Error)]
pub enum SnapgridError {
    /// JSON input failed to parse as a layout request.
    #[error("Failed to parse layout request: {source}{}", hint_suffix(.hint))]
    Parse {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// A breakpoint name other than desktop, tablet or mobile.
    #[error("Unknown breakpoint `{0}` (expected desktop, tablet or mobile)")]
    UnknownBreakpoint(String),
    /// Reading input or writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for SnapgridError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the layout request schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        SnapgridError::Parse { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_hint() {
        let err: SnapgridError = serde_json::from_str::<serde_json::Value>("{ \"a\": 1, }")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse layout request"));
        assert!(msg.contains("Hint: Check for trailing commas"));
    }

    #[test]
    fn test_unknown_breakpoint_message() {
        let err = SnapgridError::UnknownBreakpoint("watch".into());
        assert!(err.to_string().contains("`watch`"));
    }
}
