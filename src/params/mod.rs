/*!
 * Params Module
 * Type-erased parameter store shared between senders and receivers
 */

mod slot;
mod store;

pub use slot::{ParamInfo, ParamKind};
pub use store::Params;
