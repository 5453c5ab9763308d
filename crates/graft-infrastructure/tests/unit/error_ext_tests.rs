//! Unit tests for error context helpers

use std::error::Error as _;
use std::io;

use graft_domain::Error;
use graft_infrastructure::error_ext::ErrorContext;

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "catalog.json"))
}

#[test]
fn test_io_context_keeps_source() {
    let err = failing_io()
        .io_context("Failed to read catalog")
        .expect_err("fails");

    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("Failed to read catalog: catalog.json"));
    assert!(err.source().is_some());
}

#[test]
fn test_config_context_maps_to_configuration() {
    let err = failing_io()
        .config_context("Failed to load overrides")
        .expect_err("fails");

    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
}
