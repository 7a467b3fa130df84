/*!
 * Signal Dispatch Library
 * In-process named signals with type-erased parameter stores
 *
 * A [`SignalManager`] maps names to [`Signal`]s. Sending a name invokes
 * every registered receiver (plain functions first, then shared receiver
 * objects, each in registration order) with one input [`Params`] and an
 * optional output [`Params`] that all receivers of the send write into.
 *
 * ```
 * use signal_dispatch::{Params, SignalManager};
 *
 * fn double(input: &Params, output: Option<&mut Params>) {
 *     if let (Some(out), Some(n)) = (output, input.get::<i32>("n")) {
 *         let _ = out.add("doubled", n * 2);
 *     }
 * }
 *
 * let mut manager = SignalManager::new();
 * manager.register_fn("double", double).unwrap();
 *
 * let mut input = Params::new();
 * input.add("n", 21i32).unwrap();
 * let mut output = Params::new();
 * manager.send("double", Some(&input), Some(&mut output)).unwrap();
 *
 * assert_eq!(output.get::<i32>("doubled"), Some(&42));
 * ```
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod params;
pub mod signals;

// Re-exports
pub use crate::core::{InlineString, ReceiverKind, SignalError, SignalResult};
pub use config::{DispatchLogging, ManagerConfig};
pub use monitoring::init_tracing;
pub use params::{ParamInfo, ParamKind, Params};
pub use signals::{
    DispatchStats, Receiver, SharedSignalManager, Signal, SignalFn, SignalManager,
    SignalManagerBuilder, SignalReceiver,
};
