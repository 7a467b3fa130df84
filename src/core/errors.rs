/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::data_structures::InlineString;
use super::types::ReceiverKind;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for every fallible store, signal and manager operation
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors reported by the parameter store, signals and the manager
///
/// None of these abort the process: each is a plain return value and a
/// failed operation leaves all state as it was before the call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SignalError {
    #[error("Parameter '{0}' already exists")]
    #[diagnostic(
        code(params::duplicate_key),
        help("Parameter keys are write-once. Use a different key for the new value.")
    )]
    DuplicateKey(InlineString),

    #[error("Parameter '{0}' not found")]
    #[diagnostic(code(params::key_not_found))]
    KeyNotFound(InlineString),

    #[error("Parameter '{key}' holds {found}, not {expected}")]
    #[diagnostic(
        code(params::type_mismatch),
        help("Retrieve the parameter with the type it was stored as.")
    )]
    TypeMismatch {
        key: InlineString,
        expected: InlineString,
        found: InlineString,
    },

    #[error("Signal '{0}' is not registered")]
    #[diagnostic(
        code(signal::unknown),
        help("Register the signal with the manager before sending it.")
    )]
    UnknownSignal(InlineString),

    #[error("{kind} receiver already registered for signal '{signal}'")]
    #[diagnostic(
        code(signal::duplicate_receiver),
        help("A receiver is invoked once per send; registering it again has no effect.")
    )]
    DuplicateReceiver {
        signal: InlineString,
        kind: ReceiverKind,
    },

    #[error("Signal '{0}' already exists")]
    #[diagnostic(code(signal::exists))]
    SignalExists(InlineString),

    #[error("Invalid argument: {0}")]
    #[diagnostic(code(signal::invalid_argument))]
    InvalidArgument(InlineString),
}

impl SignalError {
    /// Whether the error is one of the two outcomes `get` collapses into a miss
    pub fn is_miss(&self) -> bool {
        matches!(
            self,
            SignalError::KeyNotFound(_) | SignalError::TypeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SignalError::UnknownSignal("frame".into());
        assert_eq!(err.to_string(), "Signal 'frame' is not registered");

        let err = SignalError::DuplicateReceiver {
            signal: "frame".into(),
            kind: ReceiverKind::Object,
        };
        assert_eq!(
            err.to_string(),
            "object receiver already registered for signal 'frame'"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = SignalError::DuplicateKey("int".into());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("duplicate_key"));
        assert!(json.contains("int"));

        let back: SignalError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_miss_classification() {
        assert!(SignalError::KeyNotFound("a".into()).is_miss());
        assert!(SignalError::TypeMismatch {
            key: "a".into(),
            expected: "u32".into(),
            found: "i32".into(),
        }
        .is_miss());
        assert!(!SignalError::DuplicateKey("a".into()).is_miss());
    }
}
