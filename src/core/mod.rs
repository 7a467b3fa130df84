/*!
 * Core Module
 * Shared error types, key strings and common types
 */

pub mod data_structures;
pub mod errors;
pub mod types;

pub use data_structures::InlineString;
pub use errors::{SignalError, SignalResult};
pub use types::ReceiverKind;
