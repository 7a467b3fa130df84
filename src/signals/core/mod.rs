/*!
 * Signal Core - Types and Receivers
 * Receiver abstraction, the signal list and dispatch statistics
 */

pub mod atomic_stats;
pub mod receiver;
pub mod signal;
pub mod types;

// Re-export commonly used types
pub use atomic_stats::AtomicDispatchStats;
pub use receiver::{Receiver, SignalFn, SignalReceiver};
pub use signal::Signal;
pub use types::DispatchStats;
