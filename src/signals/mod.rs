/*!
 * Signals Module
 * Named multicast dispatch of parameter stores to receivers
 */

pub mod core;
pub mod management;

// Re-export public API
pub use self::core::{
    AtomicDispatchStats, DispatchStats, Receiver, Signal, SignalFn, SignalReceiver,
};
pub use management::{SharedSignalManager, SignalManager, SignalManagerBuilder};
