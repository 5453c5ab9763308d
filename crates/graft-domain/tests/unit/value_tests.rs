//! Unit tests for values, instances and override keys

use std::sync::Arc;

use graft_domain::{Instance, OverrideKey, Primitive, PrimitiveKind, Value};

#[derive(Debug)]
struct Clock {
    offset: i64,
}

#[test]
fn test_primitive_kinds_and_keywords() {
    assert_eq!(Value::from("text").type_name(), "string");
    assert_eq!(Value::from(3.5).type_name(), "number");
    assert_eq!(Value::from(7).type_name(), "number");
    assert_eq!(Value::from(true).type_name(), "boolean");
    assert_eq!(Value::from(10_i128).type_name(), "bigint");
    assert_eq!(PrimitiveKind::from_keyword("boolean"), Some(PrimitiveKind::Boolean));
    assert_eq!(PrimitiveKind::from_keyword("Clock"), None);
}

#[test]
fn test_instance_downcast_and_identity() {
    let instance = Instance::new("Clock", Clock { offset: 2 });
    let clock = instance.downcast::<Clock>().expect("is a Clock");
    assert_eq!(clock.offset, 2);
    assert!(instance.downcast::<String>().is_none());

    let copy = instance.clone();
    assert!(copy.ptr_eq(&instance));
    assert_ne!(instance, Instance::new("Clock", Clock { offset: 2 }));
}

#[test]
fn test_instance_from_arc_shares_object() {
    let shared = Arc::new(Clock { offset: 5 });
    let instance = Instance::from_arc("Clock", Arc::clone(&shared));

    let back = instance.downcast::<Clock>().expect("is a Clock");
    assert!(Arc::ptr_eq(&shared, &back));
}

#[test]
fn test_object_value_type_name_is_class_name() {
    let value = Value::object("SystemClock", Clock { offset: 0 });
    assert_eq!(value.type_name(), "SystemClock");
    assert!(value.as_instance().is_some());
    assert!(value.as_str().is_none());
}

#[test]
fn test_primitive_accessors() {
    assert_eq!(Value::from("a").as_str(), Some("a"));
    assert_eq!(Value::from(1.5).as_number(), Some(1.5));
    assert_eq!(Value::from(false).as_bool(), Some(false));
    assert_eq!(
        Value::Primitive(Primitive::BigInt(-4)).as_bigint(),
        Some(-4)
    );
    assert_eq!(Value::from("a").as_number(), None);
}

#[test]
fn test_override_key_rendering() {
    assert_eq!(OverrideKey::global("timeout").to_string(), "timeout");
    assert_eq!(
        OverrideKey::scoped("HttpClient", "timeout").to_string(),
        "HttpClient/timeout"
    );
    assert_ne!(
        OverrideKey::global("HttpClient/timeout"),
        OverrideKey::scoped("HttpClient", "timeout")
    );
}
