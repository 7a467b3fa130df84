/*!
 * Signal Receivers
 * The two receiver flavours behind one dispatch capability
 */

use crate::core::ReceiverKind;
use crate::params::Params;
use std::fmt;
use std::sync::Arc;

/// Stateless function receiver
///
/// `output` is the store shared by every receiver of one dispatch, or
/// `None` when the sender did not ask for output.
pub type SignalFn = fn(input: &Params, output: Option<&mut Params>);

/// Object receiver interface
///
/// Implementors are held behind `Arc`, so one object can be registered
/// under several signals and stays alive until its last holder drops it.
pub trait SignalReceiver: Send + Sync {
    fn receive(&self, input: &Params, output: Option<&mut Params>);
}

impl<F> SignalReceiver for F
where
    F: Fn(&Params, Option<&mut Params>) + Send + Sync,
{
    fn receive(&self, input: &Params, output: Option<&mut Params>) {
        self(input, output)
    }
}

/// A registered unit of dispatch
///
/// Identity, not equality of captured state, decides whether two receivers
/// are the same: function receivers compare by address, object receivers
/// by the allocation the `Arc` points at.
#[derive(Clone)]
pub enum Receiver {
    Function(SignalFn),
    Object(Arc<dyn SignalReceiver>),
}

impl Receiver {
    #[inline]
    pub fn function(f: SignalFn) -> Self {
        Receiver::Function(f)
    }

    #[inline]
    pub fn object(receiver: Arc<dyn SignalReceiver>) -> Self {
        Receiver::Object(receiver)
    }

    #[inline]
    pub fn kind(&self) -> ReceiverKind {
        match self {
            Receiver::Function(_) => ReceiverKind::Function,
            Receiver::Object(_) => ReceiverKind::Object,
        }
    }

    /// Address used for identity comparison
    #[inline]
    fn addr(&self) -> usize {
        match self {
            Receiver::Function(f) => *f as usize,
            Receiver::Object(obj) => Arc::as_ptr(obj) as *const () as usize,
        }
    }

    /// Whether `other` is the same function or the same object
    #[inline]
    pub fn same_as(&self, other: &Receiver) -> bool {
        self.kind() == other.kind() && self.addr() == other.addr()
    }

    #[inline]
    pub fn invoke(&self, input: &Params, output: Option<&mut Params>) {
        match self {
            Receiver::Function(f) => f(input, output),
            Receiver::Object(obj) => obj.receive(input, output),
        }
    }
}

impl From<SignalFn> for Receiver {
    fn from(f: SignalFn) -> Self {
        Receiver::Function(f)
    }
}

impl From<Arc<dyn SignalReceiver>> for Receiver {
    fn from(receiver: Arc<dyn SignalReceiver>) -> Self {
        Receiver::Object(receiver)
    }
}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Receiver::{:?}({:#x})", self.kind(), self.addr())
    }
}
