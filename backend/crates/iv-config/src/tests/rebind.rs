use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Rebind
// =========================================================================

#[test]
#[serial]
fn given_window_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _window = EnvGuard::set("IV_REBIND_WINDOW_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_window_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _window = EnvGuard::set("IV_REBIND_WINDOW_SECS", "86401");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_namespace_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _namespace = EnvGuard::set("IV_REBIND_NAMESPACE", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_one_second_window_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _window = EnvGuard::set("IV_REBIND_WINDOW_SECS", "1");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}
