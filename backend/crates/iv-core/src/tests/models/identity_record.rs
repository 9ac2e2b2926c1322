use crate::{ChaChaRecoveryCipher, IdentityRecord, SelfId, SymmetricKey, Web2Payload};

use googletest::prelude::*;

fn new_record() -> IdentityRecord {
    IdentityRecord::new(
        SelfId::derive("token"),
        SymmetricKey::generate(32).unwrap(),
    )
}

#[test]
fn given_new_record_then_payload_carries_symmetric_key() {
    let record = new_record();

    assert_that!(record.web2.symmetric_key.as_ref(), some(eq(record.symmetric_key())));
    assert_that!(record.has_recovery_id(), eq(false));
}

#[test]
fn given_recovery_id_when_set_then_decrypts_to_original() {
    let cipher = ChaChaRecoveryCipher;
    let mut record = new_record();

    record.set_recovery_id("owner@example.com", &cipher).unwrap();

    assert_that!(
        record.recovery_id(&cipher).unwrap(),
        some(eq("owner@example.com"))
    );
}

#[test]
fn given_recovery_id_when_serialized_then_plaintext_not_persisted() {
    let cipher = ChaChaRecoveryCipher;
    let mut record = new_record();
    record.set_recovery_id("owner@example.com", &cipher).unwrap();

    let json = serde_json::to_string(&record).unwrap();

    assert_that!(json, not(contains_substring("owner@example.com")));
}

#[test]
fn given_decoded_payload_without_key_when_replaced_then_key_reattached() {
    let mut record = new_record();
    let original_key = record.symmetric_key().clone();
    let decoded = Web2Payload {
        symmetric_key: None,
        private_ciphertext: "sealed-private".to_string(),
        ..Web2Payload::default()
    };

    record.replace_web2(decoded);

    assert_that!(record.web2.private_ciphertext, eq("sealed-private"));
    assert_that!(record.web2.symmetric_key.as_ref(), some(eq(&original_key)));
    assert_that!(record.symmetric_key(), eq(&original_key));
}

#[test]
fn given_decoded_payload_with_foreign_key_when_replaced_then_record_key_wins() {
    let mut record = new_record();
    let original_key = record.symmetric_key().clone();
    let decoded = Web2Payload {
        symmetric_key: Some(SymmetricKey::generate(32).unwrap()),
        ..Web2Payload::default()
    };

    record.replace_web2(decoded);

    assert_that!(record.web2.symmetric_key.as_ref(), some(eq(&original_key)));
}

#[test]
fn given_record_when_json_roundtrip_then_key_and_recovery_survive() {
    let cipher = ChaChaRecoveryCipher;
    let mut record = new_record();
    record.set_recovery_id("owner@example.com", &cipher).unwrap();

    let json = serde_json::to_vec(&record).unwrap();
    let restored: IdentityRecord = serde_json::from_slice(&json).unwrap();

    assert_that!(restored.symmetric_key(), eq(record.symmetric_key()));
    assert_that!(
        restored.recovery_id(&cipher).unwrap(),
        some(eq("owner@example.com"))
    );
}
