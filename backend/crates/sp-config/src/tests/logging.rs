use crate::tests::{EnvGuard, set_required_scim_env, setup_config_dir};
use crate::{Config, LoggingConfig};

use std::path::PathBuf;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
fn test_default_log_file_path() {
    let logging = LoggingConfig::default();

    assert_eq!(
        logging.log_file_path(),
        Some(PathBuf::from(".").join("scim_provision.log"))
    );
}

#[test]
fn test_empty_log_file_disables_file_logging() {
    let logging = LoggingConfig {
        file: Some(String::new()),
        ..LoggingConfig::default()
    };

    assert!(logging.log_file_path().is_none());
}

#[test]
#[serial]
fn given_log_dir_and_file_env_when_load_then_path_joins_them() {
    // Given
    let _temp = setup_config_dir();
    let _dir = EnvGuard::set("SP_LOG_DIR", "logs");
    let _file = EnvGuard::set("SP_LOG_FILE", "run.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.logging.log_file_path(),
        Some(PathBuf::from("logs").join("run.log"))
    );
}

#[test]
#[serial]
fn given_log_colored_env_zero_when_load_then_colors_disabled() {
    // Given
    let _temp = setup_config_dir();
    let _colored = EnvGuard::set("SP_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn given_log_file_with_directory_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _scim = set_required_scim_env();
    let _file = EnvGuard::set("SP_LOG_FILE", "../escape.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_plain_log_file_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _scim = set_required_scim_env();
    let _file = EnvGuard::set("SP_LOG_FILE", "provision.log");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
