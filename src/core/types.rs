/*!
 * Core Types
 * Common types shared by the store, signals and the manager
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two receiver flavours an operation concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiverKind {
    /// Stateless function pointer, compared by address
    Function,
    /// Shared receiver object, compared by allocation
    Object,
}

impl fmt::Display for ReceiverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiverKind::Function => f.write_str("function"),
            ReceiverKind::Object => f.write_str("object"),
        }
    }
}
