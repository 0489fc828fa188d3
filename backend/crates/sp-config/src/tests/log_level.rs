use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_known_names() {
    assert_eq!(LogLevel::parse_lenient("off").0, LevelFilter::Off);
    assert_eq!(LogLevel::parse_lenient("error").0, LevelFilter::Error);
    assert_eq!(LogLevel::parse_lenient("warn").0, LevelFilter::Warn);
    assert_eq!(LogLevel::parse_lenient("debug").0, LevelFilter::Debug);
    assert_eq!(LogLevel::parse_lenient("trace").0, LevelFilter::Trace);
}

#[test]
fn test_log_level_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
}

#[test]
fn test_log_level_unknown_defaults_to_info() {
    assert_eq!(LogLevel::from_str("chatty").unwrap().0, LevelFilter::Info);
}
