/*!
 * Signal
 * Ordered multicast list of receivers registered under one name
 */

use super::receiver::{Receiver, SignalFn, SignalReceiver};
use crate::core::{InlineString, ReceiverKind, SignalError, SignalResult};
use crate::params::Params;
use log::warn;
use std::sync::Arc;

/// A named dispatch point
///
/// Receivers are kept in one registration-ordered list. Dispatch runs in
/// two phases: every function receiver first, then every object receiver,
/// each phase in registration order. Callers may rely on that order.
///
/// Receivers can be added but never removed, and a given function or
/// object appears at most once.
#[derive(Debug, Clone)]
pub struct Signal {
    name: InlineString,
    receivers: Vec<Receiver>,
}

impl Signal {
    pub fn new(name: impl Into<InlineString>) -> Self {
        Self {
            name: name.into(),
            receivers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Append `receiver` unless the same function or object is already registered
    pub fn add(&mut self, receiver: Receiver) -> SignalResult<()> {
        if self.receivers.iter().any(|r| r.same_as(&receiver)) {
            warn!(
                "Duplicate {} receiver rejected for signal '{}'",
                receiver.kind(),
                self.name
            );
            return Err(SignalError::DuplicateReceiver {
                signal: self.name.clone(),
                kind: receiver.kind(),
            });
        }
        self.receivers.push(receiver);
        Ok(())
    }

    pub fn add_receiver(&mut self, f: SignalFn) -> SignalResult<()> {
        self.add(Receiver::Function(f))
    }

    pub fn add_receiver_object(&mut self, receiver: Arc<dyn SignalReceiver>) -> SignalResult<()> {
        self.add(Receiver::Object(receiver))
    }

    /// Receivers in the order `invoke` calls them
    pub fn dispatch_order(&self) -> impl Iterator<Item = &Receiver> + '_ {
        let functions = self.phase(ReceiverKind::Function);
        let objects = self.phase(ReceiverKind::Object);
        functions.chain(objects)
    }

    fn phase(&self, kind: ReceiverKind) -> impl Iterator<Item = &Receiver> + '_ {
        self.receivers.iter().filter(move |r| r.kind() == kind)
    }

    /// Call every receiver once with the same input and output
    ///
    /// Writes one receiver makes to `output` are visible to the receivers
    /// after it. A receiver's own failures (a rejected `add`, say) never
    /// stop the dispatch. Returns the number of receivers called.
    pub fn invoke(&self, input: &Params, mut output: Option<&mut Params>) -> usize {
        let mut invoked = 0;
        for receiver in self.dispatch_order() {
            receiver.invoke(input, output.as_deref_mut());
            invoked += 1;
        }
        invoked
    }

    pub fn function_count(&self) -> usize {
        self.phase(ReceiverKind::Function).count()
    }

    pub fn object_count(&self) -> usize {
        self.phase(ReceiverKind::Object).count()
    }

    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }
}
