/*!
 * Monitoring Module
 * Tracing bootstrap for hosts of the signal manager
 */

pub mod tracer;

pub use tracer::{init_tracing, ENV_TRACE_JSON};
