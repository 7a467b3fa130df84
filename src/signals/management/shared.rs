/*!
 * Shared Signal Manager
 * Mutex-guarded manager handle for callers that cross threads
 */

use super::manager::SignalManager;
use crate::core::SignalResult;
use crate::params::Params;
use crate::signals::core::{DispatchStats, Receiver, SignalFn, SignalReceiver};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one manager behind a lock
///
/// Registration and sends are serialised: a send holds the lock until its
/// last receiver returns. Receivers must therefore not call back into the
/// same handle, or they deadlock.
#[derive(Clone)]
pub struct SharedSignalManager {
    inner: Arc<Mutex<SignalManager>>,
}

impl SharedSignalManager {
    pub fn new(manager: SignalManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    pub fn register(&self, name: &str, receiver: Option<Receiver>) -> SignalResult<()> {
        self.inner.lock().register(name, receiver)
    }

    pub fn register_fn(&self, name: &str, f: SignalFn) -> SignalResult<()> {
        self.inner.lock().register_fn(name, f)
    }

    pub fn register_object(
        &self,
        name: &str,
        receiver: Arc<dyn SignalReceiver>,
    ) -> SignalResult<()> {
        self.inner.lock().register_object(name, receiver)
    }

    pub fn send(
        &self,
        name: &str,
        input: Option<&Params>,
        output: Option<&mut Params>,
    ) -> SignalResult<usize> {
        self.inner.lock().send(name, input, output)
    }

    pub fn emit(&self, name: &str) -> SignalResult<usize> {
        self.inner.lock().emit(name)
    }

    /// Run `f` with exclusive access to the manager
    pub fn with<R>(&self, f: impl FnOnce(&mut SignalManager) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn stats(&self) -> DispatchStats {
        self.inner.lock().stats()
    }
}

impl Default for SharedSignalManager {
    fn default() -> Self {
        Self::new(SignalManager::new())
    }
}

impl From<SignalManager> for SharedSignalManager {
    fn from(manager: SignalManager) -> Self {
        Self::new(manager)
    }
}
