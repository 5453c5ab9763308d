//! Unit tests for the override registry and instance cache

use graft_application::{InstanceCache, OverrideRegistry};
use graft_domain::{ClassDescriptor, Instance, OverrideKey};

struct Marker;

#[test]
fn test_last_write_wins() {
    let registry = OverrideRegistry::new();
    registry.register_global("timeout", 10);
    registry.register_global("timeout", 30);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.global("timeout").and_then(|v| v.as_number()), Some(30.0));
}

#[test]
fn test_scoped_and_global_are_distinct() {
    let registry = OverrideRegistry::new();
    registry.register_global("timeout", 10);
    registry.register_scoped("HttpClient", "timeout", 5);

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.scoped("HttpClient", "timeout").and_then(|v| v.as_number()),
        Some(5.0)
    );
    assert!(registry.scoped("Other", "timeout").is_none());
    assert_eq!(
        registry.keys(),
        vec![
            OverrideKey::global("timeout"),
            OverrideKey::scoped("HttpClient", "timeout")
        ]
    );
}

#[test]
fn test_register_scoped_by_type_uses_name() {
    let registry = OverrideRegistry::new();
    let descriptor = ClassDescriptor::new("net/client/HttpClient", "HttpClient");
    registry.register_scoped_by_type(&descriptor, "baseUrl", "http://localhost");

    assert_eq!(
        registry.get(&OverrideKey::scoped("HttpClient", "baseUrl")).and_then(|v| v.as_str().map(String::from)),
        Some("http://localhost".to_string())
    );
}

#[test]
fn test_contains_for_either_scope() {
    let registry = OverrideRegistry::new();
    assert!(registry.is_empty());
    registry.register_global("name", "x");
    registry.register_scoped("Db", "url", "y");

    assert!(registry.contains_for("Anything", "name"));
    assert!(registry.contains_for("Db", "url"));
    assert!(!registry.contains_for("Cache", "url"));
}

#[test]
fn test_cache_first_insert_wins() {
    let cache = InstanceCache::new();
    let first = Instance::new("Clock", Marker);
    let second = Instance::new("Clock", Marker);

    let stored = cache.get_or_insert("Clock", first.clone());
    let again = cache.get_or_insert("Clock", second);

    assert!(stored.ptr_eq(&first));
    assert!(again.ptr_eq(&first));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_insert_and_lookup() {
    let cache = InstanceCache::new();
    assert!(cache.is_empty());
    cache.insert("Logger", Instance::new("ConsoleLogger", Marker));

    assert!(cache.contains("Logger"));
    assert_eq!(cache.get("Logger").map(|i| i.class_name().to_string()), Some("ConsoleLogger".into()));
    assert!(cache.get("ConsoleLogger").is_none());
}
