//! Tests for level ordering and parsing.

use stackkit::Level;

#[test]
fn severity_order_is_error_highest() {
    assert!(Level::Error < Level::Warn);
    assert!(Level::Warn < Level::Info);
    assert!(Level::Info < Level::Debug);
}

#[test]
fn parse_accepts_aliases() {
    assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
}

#[test]
fn parse_rejects_unknown() {
    assert!("verbose".parse::<Level>().is_err());
    assert!("".parse::<Level>().is_err());
}

#[test]
fn u8_round_trip() {
    for level in Level::all() {
        assert_eq!(Level::from_u8(level.as_u8()), level);
    }
    // Out-of-range clamps to the least severe instead of panicking
    assert_eq!(Level::from_u8(200), Level::Debug);
}

#[test]
fn display_is_lowercase() {
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Debug.as_str(), "debug");
}
