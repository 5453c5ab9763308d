//! Unit tests for logging helpers

use graft_domain::Error;
use graft_infrastructure::logging::parse_log_level;
use tracing::Level;

#[test]
fn test_parse_log_levels() {
    assert_eq!(parse_log_level("trace").expect("valid"), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").expect("valid"), Level::DEBUG);
    assert_eq!(parse_log_level("info").expect("valid"), Level::INFO);
    assert_eq!(parse_log_level("warning").expect("valid"), Level::WARN);
    assert_eq!(parse_log_level("error").expect("valid"), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    let err = parse_log_level("verbose").expect_err("invalid");

    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_init_logging_with_file_output_installs_once() {
    use graft_infrastructure::logging::{LoggingConfig, init_logging};

    let dir = tempfile::TempDir::new().expect("temp dir");
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(dir.path().join("graft.log")),
    };

    init_logging(&config).expect("first install");
    let second = init_logging(&config).expect_err("already installed");

    assert!(matches!(second, Error::Configuration { source: Some(_), .. }));
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = graft_infrastructure::logging::LoggingConfig {
        level: "chatty".to_string(),
        ..Default::default()
    };

    assert!(graft_infrastructure::logging::init_logging(&config).is_err());
}
