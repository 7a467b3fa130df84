/*!
 * Parameter Store
 * Write-once, string-keyed bag of heterogeneously typed values
 */

use super::slot::{ParamInfo, Slot};
use crate::core::{InlineString, SignalError, SignalResult};
use ahash::RandomState;
use log::debug;
use std::any::{type_name, Any};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// Type-erased parameter container passed to receivers
///
/// Every key is write-once: [`add`](Self::add) and
/// [`add_blob`](Self::add_blob) reject a key that is already present and
/// leave the stored value untouched. Within one dispatch this makes the
/// first receiver to write an output key the winner.
///
/// Typed reads succeed only when the requested type is exactly the stored
/// type. A miss and a type mismatch look the same to [`get`](Self::get);
/// [`lookup`](Self::lookup) tells them apart.
///
/// ```
/// use signal_dispatch::Params;
///
/// let mut params = Params::new();
/// params.add("uint", 255u32).unwrap();
/// assert!(params.add("uint", 7u32).is_err());
///
/// assert_eq!(params.get::<u32>("uint"), Some(&255));
/// assert_eq!(params.get::<i32>("uint"), None);
/// assert_eq!(params.get_or("missing", &-1i32), (&-1, false));
/// ```
#[derive(Default)]
pub struct Params {
    slots: HashMap<InlineString, Slot, RandomState>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Store an owned `value` under `key`
    ///
    /// Fails with [`SignalError::DuplicateKey`] if `key` is already present,
    /// whatever type the existing entry has.
    pub fn add<T: Any + Send + Sync>(&mut self, key: &str, value: T) -> SignalResult<()> {
        self.insert(key, || Slot::typed(value))
    }

    /// Store a copy of `data` under `key` as a raw byte buffer
    pub fn add_blob(&mut self, key: &str, data: &[u8]) -> SignalResult<()> {
        self.insert(key, || Slot::blob(data))
    }

    fn insert(&mut self, key: &str, make: impl FnOnce() -> Slot) -> SignalResult<()> {
        match self.slots.entry(InlineString::from(key)) {
            Entry::Occupied(_) => {
                debug!("Rejected write to existing parameter '{}'", key);
                Err(SignalError::DuplicateKey(key.into()))
            }
            Entry::Vacant(slot) => {
                slot.insert(make());
                Ok(())
            }
        }
    }

    /// Borrow the value under `key` if it was stored as exactly `T`
    #[inline]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.slots.get(key).and_then(Slot::downcast::<T>)
    }

    /// Borrow the value under `key`, or `default` on a miss
    ///
    /// The flag is `true` only when the stored value was returned. The result
    /// borrows from `default` as well as the store, so bind a non-literal
    /// default to a local first, or use [`get_or_else`](Self::get_or_else).
    pub fn get_or<'a, T: Any>(&'a self, key: &str, default: &'a T) -> (&'a T, bool) {
        match self.get::<T>(key) {
            Some(value) => (value, true),
            None => (default, false),
        }
    }

    /// Owned variant of [`get_or`](Self::get_or) for cloneable values
    pub fn get_or_else<T: Any + Clone>(&self, key: &str, default: T) -> (T, bool) {
        match self.get::<T>(key) {
            Some(value) => (value.clone(), true),
            None => (default, false),
        }
    }

    /// Like [`get`](Self::get), but reports why a read missed
    pub fn lookup<T: Any>(&self, key: &str) -> SignalResult<&T> {
        let slot = self
            .slots
            .get(key)
            .ok_or_else(|| SignalError::KeyNotFound(key.into()))?;

        slot.downcast::<T>()
            .ok_or_else(|| SignalError::TypeMismatch {
                key: key.into(),
                expected: type_name::<T>().into(),
                found: slot.info().type_name.into(),
            })
    }

    /// Borrow the bytes of a blob stored under `key`
    ///
    /// The slice lives as long as the store; copy it to keep it longer.
    #[inline]
    pub fn get_blob(&self, key: &str) -> Option<&[u8]> {
        self.slots.get(key).and_then(Slot::bytes)
    }

    pub fn info(&self, key: &str) -> Option<ParamInfo> {
        self.slots.get(key).map(Slot::info)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Iterate over stored keys in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.keys().map(InlineString::as_str)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .iter()
                    .map(|(key, slot)| (key.as_str(), slot.info().type_name)),
            )
            .finish()
    }
}
