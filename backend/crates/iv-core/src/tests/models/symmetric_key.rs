use crate::{DEFAULT_SYMMETRIC_KEY_LEN, SymmetricKey};

use googletest::prelude::*;

#[test]
fn given_configured_length_when_generate_then_key_has_that_length() {
    let key = SymmetricKey::generate(DEFAULT_SYMMETRIC_KEY_LEN).unwrap();

    assert_that!(key.len(), eq(DEFAULT_SYMMETRIC_KEY_LEN));
    assert_that!(key.is_empty(), eq(false));
}

#[test]
fn given_zero_length_when_generate_then_error() {
    assert_that!(SymmetricKey::generate(0), err(anything()));
}

#[test]
fn given_two_generated_keys_then_they_differ() {
    let a = SymmetricKey::generate(32).unwrap();
    let b = SymmetricKey::generate(32).unwrap();

    assert_that!(a == b, eq(false));
}

#[test]
fn given_key_when_debug_formatted_then_bytes_redacted() {
    let key = SymmetricKey::from_bytes(vec![0xAB; 4]).unwrap();

    let debug = format!("{key:?}");

    assert_that!(debug, contains_substring("REDACTED"));
    assert_that!(debug, not(contains_substring("ab")));
}

#[test]
fn given_empty_hex_when_deserialized_then_error() {
    let result = serde_json::from_str::<SymmetricKey>("\"\"");

    assert_that!(result, err(anything()));
}
