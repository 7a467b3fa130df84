/*!
 * Signal Types
 * Snapshot types reported by the signal manager
 */

use serde::{Deserialize, Serialize};

/// Dispatch statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchStats {
    pub signals_registered: u64,
    pub receivers_registered: u64,
    pub sends_dispatched: u64,
    pub sends_unknown: u64,
    pub receivers_invoked: u64,
    pub duplicate_rejections: u64,
}
