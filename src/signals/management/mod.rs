/*!
 * Signal Management - Manager, Builder and Shared Handle
 * Name-to-signal registry and its construction
 */

mod builder;
mod manager;
mod shared;

// Re-export public API
pub use builder::SignalManagerBuilder;
pub use manager::SignalManager;
pub use shared::SharedSignalManager;
