//! Unit tests for the in-memory catalog indices

use graft_domain::{ClassDescriptor, Error, MetadataCatalog};
use graft_infrastructure::catalog::InMemoryCatalog;

fn names(descriptors: Vec<&ClassDescriptor>) -> Vec<&str> {
    descriptors.iter().map(|d| d.name.as_str()).collect()
}

fn streams() -> InMemoryCatalog {
    InMemoryCatalog::builder()
        .add(ClassDescriptor::new("io/Stream", "Stream").as_abstract())
        .add(
            ClassDescriptor::new("io/FileStream", "FileStream")
                .extends("Stream")
                .implements("Readable"),
        )
        .add(ClassDescriptor::new("io/GzipStream", "GzipStream").extends("FileStream"))
        .add(ClassDescriptor::new("net/Socket", "Socket").implements("Readable"))
        .build()
        .expect("valid catalog")
}

#[test]
fn test_lookup_by_name_and_fqcn() {
    let catalog = streams();

    assert_eq!(catalog.len(), 4);
    assert_eq!(
        catalog.get_by_class_name("Socket").map(|d| d.fqcn.as_str()),
        Some("net/Socket")
    );
    assert_eq!(
        catalog.get_by_fqcn("io/GzipStream").map(|d| d.name.as_str()),
        Some("GzipStream")
    );
    assert!(catalog.get_by_class_name("Missing").is_none());
}

#[test]
fn test_interface_index_lists_direct_implementors() {
    let catalog = streams();

    assert_eq!(
        names(catalog.get_by_interface("Readable")),
        vec!["FileStream", "Socket"]
    );
    // interfaces are not inherited by descendants
    assert!(
        !names(catalog.get_by_interface("Readable")).contains(&"GzipStream")
    );
    assert!(catalog.get_by_interface("Writable").is_empty());
}

#[test]
fn test_ancestor_index_walks_whole_chain() {
    let catalog = streams();

    assert_eq!(
        names(catalog.get_by_parent_class_name_without_root("Stream")),
        vec!["FileStream", "GzipStream"]
    );
    assert_eq!(
        names(catalog.get_by_parent_class_name_without_root("FileStream")),
        vec!["GzipStream"]
    );
    assert!(catalog
        .get_by_parent_class_name_without_root("GzipStream")
        .is_empty());
    assert_eq!(catalog.ancestors_of("GzipStream"), vec!["FileStream", "Stream"]);
}

#[test]
fn test_root_sentinel_is_never_an_ancestor() {
    let catalog = streams();

    assert!(catalog.ancestors_of("Stream").is_empty());
    assert!(catalog.get_by_parent_class_name_without_root("").is_empty());
}

#[test]
fn test_unknown_parent_is_recorded_then_walk_stops() {
    let catalog = InMemoryCatalog::from_descriptors(vec![
        ClassDescriptor::new("app/Child", "Child").extends("ExternalBase"),
    ])
    .expect("valid catalog");

    assert_eq!(catalog.ancestors_of("Child"), vec!["ExternalBase"]);
    assert_eq!(
        names(catalog.get_by_parent_class_name_without_root("ExternalBase")),
        vec!["Child"]
    );
}

#[test]
fn test_parent_loop_terminates() {
    let catalog = InMemoryCatalog::from_descriptors(vec![
        ClassDescriptor::new("app/A", "A").extends("B"),
        ClassDescriptor::new("app/B", "B").extends("A"),
    ])
    .expect("valid catalog");

    assert_eq!(catalog.ancestors_of("A"), vec!["B"]);
    assert_eq!(catalog.ancestors_of("B"), vec!["A"]);
}

#[test]
fn test_duplicate_fqcn_rejected() {
    let result = InMemoryCatalog::from_descriptors(vec![
        ClassDescriptor::new("app/Clock", "Clock"),
        ClassDescriptor::new("app/Clock", "Clock"),
    ]);

    match result {
        Err(Error::DuplicateClass { fqcn }) => assert_eq!(fqcn, "app/Clock"),
        other => panic!("expected DuplicateClass, got {other:?}"),
    }
}

#[test]
fn test_first_descriptor_wins_shared_name() {
    let catalog = InMemoryCatalog::from_descriptors(vec![
        ClassDescriptor::new("a/Config", "Config"),
        ClassDescriptor::new("b/Config", "Config"),
    ])
    .expect("valid catalog");

    assert_eq!(
        catalog.get_by_class_name("Config").map(|d| d.fqcn.as_str()),
        Some("a/Config")
    );
    assert!(catalog.get_by_fqcn("b/Config").is_some());
    assert_eq!(catalog.descriptors().len(), 2);
}

#[test]
fn test_from_json_extraction_output() {
    let json = r#"[
        { "fqcn": "db/Pool", "name": "Pool", "implementsInterfaces": ["Connector"] },
        {
            "fqcn": "db/Repository",
            "name": "Repository",
            "constructorParameters": [{ "name": "connector", "type": "Connector" }]
        }
    ]"#;

    let catalog = InMemoryCatalog::from_json(json).expect("valid json");

    assert_eq!(names(catalog.get_by_interface("Connector")), vec!["Pool"]);
    let repository = catalog.get_by_class_name("Repository").expect("indexed");
    assert_eq!(repository.constructor_parameters[0].declared_type, "Connector");
}

#[test]
fn test_from_json_rejects_malformed_input() {
    let result = InMemoryCatalog::from_json("{ not json");

    assert!(matches!(result, Err(Error::Json { .. })));
}

#[test]
fn test_empty_catalog() {
    let catalog = InMemoryCatalog::builder().build().expect("valid catalog");

    assert!(catalog.is_empty());
    assert!(catalog.get_by_interface("Anything").is_empty());
}
