//! Unit tests for constructor arguments

use graft_domain::{Arguments, Error, Value};

struct Pool;

fn sample() -> Arguments {
    Arguments::new(
        "Mailer",
        vec![
            Value::from("smtp.local"),
            Value::from(25),
            Value::from(true),
            Value::object("Pool", Pool),
            Value::from(9_i128),
        ],
    )
}

#[test]
fn test_typed_accessors() {
    let args = sample();
    assert_eq!(args.len(), 5);
    assert_eq!(args.class_name(), "Mailer");
    assert_eq!(args.string(0).unwrap(), "smtp.local");
    assert!((args.number(1).unwrap() - 25.0).abs() < f64::EPSILON);
    assert!(args.boolean(2).unwrap());
    assert!(args.object::<Pool>(3).is_ok());
    assert_eq!(args.bigint(4).unwrap(), 9);
}

#[test]
fn test_wrong_shape_is_construction_error() {
    let args = sample();
    match args.number(0) {
        Err(Error::Construction { class_name, message }) => {
            assert_eq!(class_name, "Mailer");
            assert!(message.contains("argument 0"));
        }
        other => panic!("Expected Construction error, got {other:?}"),
    }
    assert!(args.object::<String>(3).is_err());
    assert!(args.instance(0).is_err());
}

#[test]
fn test_missing_argument() {
    let args = Arguments::new("Empty", Vec::new());
    assert!(args.is_empty());
    let err = args.string(0).unwrap_err();
    assert!(err.to_string().contains("missing"));
}
