//! Error types for flight fee summaries

use thiserror::Error;

/// Result type alias for flight fee operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for flight fee operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required field is absent
    #[error("Key error: missing '{key}'{}", at_plan(.plan))]
    MissingKey {
        key: &'static str,
        /// 1-based plan position, `None` for top-level keys
        plan: Option<usize>,
    },

    /// `highlights` is present but has no entries
    #[error("Index error: 'highlights' is empty in plan {plan}")]
    EmptyHighlights { plan: usize },

    /// A field is present but has the wrong shape
    #[error("Type error: '{field}' must be {expected}{}", at_plan(.plan))]
    WrongType {
        field: &'static str,
        expected: &'static str,
        plan: Option<usize>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn at_plan(plan: &Option<usize>) -> String {
    plan.map(|i| format!(" in plan {}", i)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_top_level() {
        let err = Error::MissingKey {
            key: "plans",
            plan: None,
        };
        assert_eq!(err.to_string(), "Key error: missing 'plans'");
    }

    #[test]
    fn test_missing_key_in_plan() {
        let err = Error::MissingKey {
            key: "flightFee",
            plan: Some(2),
        };
        assert_eq!(err.to_string(), "Key error: missing 'flightFee' in plan 2");
    }

    #[test]
    fn test_wrong_type_message() {
        let err = Error::WrongType {
            field: "plans",
            expected: "an array",
            plan: None,
        };
        assert_eq!(err.to_string(), "Type error: 'plans' must be an array");
    }
}
