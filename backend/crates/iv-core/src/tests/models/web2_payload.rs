use crate::{SymmetricKey, UnsealedJsonCodec, Web2Codec, Web2Payload};

use googletest::prelude::*;

#[test]
fn given_peer_sends_malformed_symmetric_key_when_decoded_then_key_ignored_and_rest_kept() {
    let codec = UnsealedJsonCodec;

    for bad_key in [r#""""#, r#""not-hex""#, "42", "null"] {
        let sealed = format!(
            r#"{{"symmetric_key": {bad_key}, "private_ciphertext": "cipher-1", "hint": "x"}}"#
        );

        let decoded = codec.decode("peer-pem", &sealed);

        assert_that!(decoded, ok(anything()));
        let payload = decoded.unwrap();
        assert_that!(payload.symmetric_key, none());
        assert_that!(payload.private_ciphertext, eq("cipher-1"));
        assert_that!(payload.extra.contains_key("hint"), eq(true));
        assert_that!(payload.extra.contains_key("symmetric_key"), eq(false));
    }
}

#[test]
fn given_valid_symmetric_key_when_decoded_then_key_kept() {
    let key = SymmetricKey::generate(32).unwrap();
    let payload = Web2Payload {
        symmetric_key: Some(key.clone()),
        ..Web2Payload::default()
    };
    let encoded = UnsealedJsonCodec.encode("peer-pem", &payload).unwrap();

    let decoded = UnsealedJsonCodec.decode("peer-pem", &encoded).unwrap();

    assert_that!(decoded.symmetric_key, some(eq(&key)));
}
