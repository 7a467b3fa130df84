/*!
 * Parameter Store Tests
 * Write-once semantics, type-checked reads and blob handling
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use signal_dispatch::{ParamKind, Params, SignalError};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn test_primitive_values() {
    let mut params = Params::new();
    params.add("int", -255i32).unwrap();
    params.add("uint", 255u32).unwrap();
    params.add("float", 3.14f32).unwrap();
    params.add("double", 3.141f64).unwrap();
    params.add("bool", true).unwrap();
    params.add("string", String::from("test123")).unwrap();

    assert_eq!(params.get_or("int", &0i32), (&-255, true));
    assert_eq!(params.get_or("int2", &-1i32), (&-1, false));
    assert_eq!(params.get_or("uint", &0u32), (&255, true));
    assert_eq!(params.get_or("uint2", &1u32), (&1, false));
    assert!((params.get::<f32>("float").copied().unwrap() - 3.14).abs() < 1e-5);
    assert!((params.get::<f64>("double").copied().unwrap() - 3.141).abs() < 1e-5);
    assert_eq!(params.get_or("bool", &false), (&true, true));
    assert_eq!(params.get_or("bool2", &false), (&false, false));

    let fallback = String::from("doesn't exist");
    assert_eq!(params.get_or("string2", &fallback), (&fallback, false));
    assert_eq!(params.get::<String>("string").unwrap(), "test123");
}

#[test]
fn test_same_size_types_are_distinct() {
    let mut params = Params::new();
    params.add("point", Point { x: 2, y: 3 }).unwrap();
    params.add("wide", 7u64).unwrap();

    // Point and u64 are both 8 bytes
    assert_eq!(params.get::<u64>("point"), None);
    assert_eq!(params.get::<Point>("wide"), None);
    assert_eq!(params.get::<Point>("point"), Some(&Point { x: 2, y: 3 }));
    assert!(matches!(
        params.lookup::<u64>("point"),
        Err(SignalError::TypeMismatch { .. })
    ));
}

#[test]
fn test_blob_entries() {
    let mut raw = Vec::new();
    raw.extend_from_slice(&2i32.to_ne_bytes());
    raw.extend_from_slice(&3i32.to_ne_bytes());

    let mut params = Params::new();
    params.add_blob("data", &raw).unwrap();
    assert!(params.add_blob("data", &[1, 2, 3]).is_err());

    let copied = params.get_blob("data").unwrap().to_vec();
    drop(params);
    assert_eq!(copied, raw);
}

#[test]
fn test_blob_and_typed_do_not_cross() {
    let mut params = Params::new();
    params.add("typed", 1u8).unwrap();
    params.add_blob("blob", &[1]).unwrap();

    assert_eq!(params.get_blob("typed"), None);
    assert_eq!(params.get::<u8>("blob"), None);
    assert_eq!(params.info("typed").unwrap().kind, ParamKind::Typed);
    assert_eq!(params.info("blob").unwrap().kind, ParamKind::Blob);
    assert_eq!(params.info("nothing"), None);
}

#[test]
fn test_owned_values_dropped_with_store() {
    use std::sync::Arc;

    let tracked = Arc::new(());
    let mut params = Params::new();
    params.add("handle", tracked.clone()).unwrap();
    assert_eq!(Arc::strong_count(&tracked), 2);

    // a rejected add drops its value instead of leaking it
    assert!(params.add("handle", tracked.clone()).is_err());
    assert_eq!(Arc::strong_count(&tracked), 2);

    drop(params);
    assert_eq!(Arc::strong_count(&tracked), 1);
}

proptest! {
    #[test]
    fn prop_add_then_get_round_trips(key in "[a-z_]{1,12}", value in any::<i64>()) {
        let mut params = Params::new();
        params.add(&key, value).unwrap();
        prop_assert_eq!(params.get::<i64>(&key), Some(&value));
        prop_assert_eq!(params.get_or(&key, &0i64), (&value, true));
    }

    #[test]
    fn prop_second_add_never_overwrites(
        key in "[a-z]{1,8}",
        first in any::<u32>(),
        second in any::<u32>(),
        other in ".*",
    ) {
        let mut params = Params::new();
        params.add(&key, first).unwrap();

        prop_assert_eq!(params.add(&key, second), Err(SignalError::DuplicateKey(key.as_str().into())));
        prop_assert!(params.add(&key, other).is_err());
        prop_assert!(params.add_blob(&key, &[0u8; 4]).is_err());
        prop_assert_eq!(params.get::<u32>(&key), Some(&first));
        prop_assert_eq!(params.len(), 1);
    }

    #[test]
    fn prop_mismatched_or_absent_reads_return_default(
        key in "[a-z]{1,8}",
        value in any::<i32>(),
        default in any::<u32>(),
    ) {
        let mut params = Params::new();
        prop_assert_eq!(params.get_or(&key, &default), (&default, false));

        params.add(&key, value).unwrap();
        prop_assert_eq!(params.get_or(&key, &default), (&default, false));
        prop_assert_eq!(params.get::<f32>(&key), None);
    }
}
