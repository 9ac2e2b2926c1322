use crate::AccountKey;

use googletest::prelude::*;

#[test]
fn given_wallet_address_when_new_then_ok() {
    let key = AccountKey::new("0xabc123").unwrap();

    assert_that!(key.as_str(), eq("0xabc123"));
    assert_that!(key.to_string(), eq("0xabc123"));
}

#[test]
fn given_blank_key_when_new_then_validation_error() {
    assert_that!(AccountKey::new(""), err(anything()));
    assert_that!(AccountKey::new("   "), err(anything()));
}

#[test]
fn given_key_when_serialized_then_plain_string() {
    let key: AccountKey = "W1".parse().unwrap();

    let json = serde_json::to_string(&key).unwrap();

    assert_that!(json, eq("\"W1\""));
}
