/*!
 * Parameter Slots
 * Type-tagged owned storage behind one erased slot
 */

use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};

/// What a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// A typed value added with `Params::add`
    Typed,
    /// A raw byte buffer added with `Params::add_blob`
    Blob,
}

/// Metadata describing a stored parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamInfo {
    pub kind: ParamKind,
    /// `std::any::type_name` of the stored type, `"[u8]"` for blobs
    pub type_name: &'static str,
    /// `size_of` the stored type, or the blob length
    pub size: usize,
}

/// One owned entry of a parameter store
///
/// The `TypeId` is captured at insertion and is the only thing a typed
/// read is checked against; the byte size is kept for inspection only.
pub(crate) enum Slot {
    Typed {
        value: Box<dyn Any + Send + Sync>,
        type_id: TypeId,
        type_name: &'static str,
        size: usize,
    },
    Blob(Box<[u8]>),
}

impl Slot {
    pub(crate) fn typed<T: Any + Send + Sync>(value: T) -> Self {
        Slot::Typed {
            value: Box::new(value),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            size: std::mem::size_of::<T>(),
        }
    }

    pub(crate) fn blob(data: &[u8]) -> Self {
        Slot::Blob(data.into())
    }

    /// Typed view, only when the stored type is exactly `T`
    #[inline]
    pub(crate) fn downcast<T: Any>(&self) -> Option<&T> {
        match self {
            Slot::Typed { value, type_id, .. } if *type_id == TypeId::of::<T>() => {
                (**value).downcast_ref::<T>()
            }
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn bytes(&self) -> Option<&[u8]> {
        match self {
            Slot::Blob(data) => Some(&data[..]),
            Slot::Typed { .. } => None,
        }
    }

    pub(crate) fn info(&self) -> ParamInfo {
        match self {
            Slot::Typed {
                type_name, size, ..
            } => ParamInfo {
                kind: ParamKind::Typed,
                type_name: *type_name,
                size: *size,
            },
            Slot::Blob(data) => ParamInfo {
                kind: ParamKind::Blob,
                type_name: "[u8]",
                size: data.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_size_types_do_not_alias() {
        #[derive(Debug, PartialEq)]
        struct Rgba(u8, u8, u8, u8);

        let slot = Slot::typed(Rgba(1, 2, 3, 4));
        assert_eq!(slot.info().size, std::mem::size_of::<u32>());
        assert!(slot.downcast::<u32>().is_none());
        assert!(slot.downcast::<i32>().is_none());
        assert_eq!(slot.downcast::<Rgba>(), Some(&Rgba(1, 2, 3, 4)));
    }

    #[test]
    fn test_blob_is_not_typed() {
        let slot = Slot::blob(&[1, 2, 3]);
        assert_eq!(slot.bytes(), Some(&[1u8, 2, 3][..]));
        assert!(slot.downcast::<[u8; 3]>().is_none());
        assert_eq!(slot.info().kind, ParamKind::Blob);
        assert_eq!(slot.info().size, 3);
    }

    #[test]
    fn test_typed_info() {
        let slot = Slot::typed(3.141f64);
        let info = slot.info();
        assert_eq!(info.kind, ParamKind::Typed);
        assert_eq!(info.type_name, "f64");
        assert_eq!(info.size, 8);
        assert!(slot.bytes().is_none());
    }
}
