/*!
 * Signal Manager
 * Registry of named signals and the single entry point for sends
 */

use super::builder::SignalManagerBuilder;
use crate::config::{DispatchLogging, ManagerConfig};
use crate::core::{InlineString, SignalError, SignalResult};
use crate::params::Params;
use crate::signals::core::{
    AtomicDispatchStats, DispatchStats, Receiver, Signal, SignalFn, SignalReceiver,
};
use ahash::RandomState;
use log::{debug, info, trace, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Signal manager
///
/// Owns every [`Signal`]. A signal comes into existence the first time its
/// name is registered; later registrations under the same name append to
/// it. Nothing is ever unregistered: signals and the receiver objects they
/// share live until the manager is dropped.
///
/// The manager is not synchronised. Confine it to one thread, or wrap it in
/// [`SharedSignalManager`](super::SharedSignalManager).
pub struct SignalManager {
    signals: HashMap<InlineString, Signal, RandomState>,
    config: ManagerConfig,
    stats: Option<AtomicDispatchStats>,
}

impl SignalManager {
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        info!(
            "Signal manager initialized (capacity: {}, dispatch logging: {})",
            config.initial_capacity, config.dispatch_logging
        );
        Self {
            signals: HashMap::with_capacity_and_hasher(config.initial_capacity, RandomState::new()),
            stats: config.collect_stats.then(AtomicDispatchStats::new),
            config,
        }
    }

    pub fn builder() -> SignalManagerBuilder {
        SignalManagerBuilder::new()
    }

    /// Register `name`, optionally with a receiver
    ///
    /// A new name creates its signal (empty if `receiver` is `None`). An
    /// existing name gets `receiver` appended, failing with
    /// [`SignalError::DuplicateReceiver`] if it is already there, or with
    /// [`SignalError::SignalExists`] if no receiver was given. A failed call
    /// changes nothing.
    pub fn register(&mut self, name: &str, receiver: Option<Receiver>) -> SignalResult<()> {
        if let Some(signal) = self.signals.get_mut(name) {
            let Some(receiver) = receiver else {
                debug!("Signal '{}' already registered", name);
                return Err(SignalError::SignalExists(name.into()));
            };
            return match signal.add(receiver) {
                Ok(()) => {
                    if let Some(stats) = &self.stats {
                        stats.inc_receivers();
                    }
                    debug!("Added receiver to signal '{}' ({} total)", name, signal.len());
                    Ok(())
                }
                Err(e) => {
                    if let Some(stats) = &self.stats {
                        stats.inc_duplicates();
                    }
                    Err(e)
                }
            };
        }

        let mut signal = Signal::new(name);
        if let Some(receiver) = receiver {
            signal.add(receiver)?;
            if let Some(stats) = &self.stats {
                stats.inc_receivers();
            }
        }
        self.signals.insert(InlineString::from(name), signal);
        if let Some(stats) = &self.stats {
            stats.inc_signals();
        }
        debug!("Registered signal '{}'", name);
        Ok(())
    }

    pub fn register_fn(&mut self, name: &str, f: SignalFn) -> SignalResult<()> {
        self.register(name, Some(Receiver::Function(f)))
    }

    pub fn register_object(
        &mut self,
        name: &str,
        receiver: Arc<dyn SignalReceiver>,
    ) -> SignalResult<()> {
        self.register(name, Some(Receiver::Object(receiver)))
    }

    /// Invoke every receiver of `name`
    ///
    /// `input` defaults to an empty store. `output`, when given, is shared
    /// by all receivers of this send. Returns the number of receivers
    /// invoked, or [`SignalError::UnknownSignal`] without invoking anything.
    pub fn send(
        &self,
        name: &str,
        input: Option<&Params>,
        output: Option<&mut Params>,
    ) -> SignalResult<usize> {
        let Some(signal) = self.signals.get(name) else {
            warn!("Send to unknown signal '{}'", name);
            if let Some(stats) = &self.stats {
                stats.inc_unknown();
            }
            return Err(SignalError::UnknownSignal(name.into()));
        };

        let empty;
        let input = match input {
            Some(params) => params,
            None => {
                empty = Params::new();
                &empty
            }
        };

        let span = tracing::debug_span!("signal.send", signal = name, receivers = signal.len());
        let _entered = span.enter();

        let invoked = match self.config.dispatch_logging {
            DispatchLogging::PerReceiver => Self::invoke_traced(signal, input, output),
            DispatchLogging::Summary | DispatchLogging::Off => signal.invoke(input, output),
        };

        if self.config.dispatch_logging != DispatchLogging::Off {
            debug!("Signal '{}' dispatched to {} receivers", name, invoked);
        }
        if let Some(stats) = &self.stats {
            stats.record_send(invoked);
        }
        Ok(invoked)
    }

    /// Send `name` with no input and no output
    pub fn emit(&self, name: &str) -> SignalResult<usize> {
        self.send(name, None, None)
    }

    fn invoke_traced(signal: &Signal, input: &Params, mut output: Option<&mut Params>) -> usize {
        let mut invoked = 0;
        for (position, receiver) in signal.dispatch_order().enumerate() {
            trace!(
                "Signal '{}' invoking receiver #{} {:?}",
                signal.name(),
                position,
                receiver
            );
            receiver.invoke(input, output.as_deref_mut());
            invoked += 1;
        }
        invoked
    }

    pub fn contains(&self, name: &str) -> bool {
        self.signals.contains_key(name)
    }

    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.signals.get(name)
    }

    /// Registered signal names in no particular order
    pub fn signal_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.signals.keys().map(InlineString::as_str)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Dispatch counters; all zero when stats collection is disabled
    pub fn stats(&self) -> DispatchStats {
        self.stats
            .as_ref()
            .map(AtomicDispatchStats::snapshot)
            .unwrap_or_default()
    }
}

impl Default for SignalManager {
    fn default() -> Self {
        Self::new()
    }
}
