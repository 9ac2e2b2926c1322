use crate::{ChaChaRecoveryCipher, RecoveryCipher, SymmetricKey};

use googletest::prelude::*;

#[test]
fn given_plaintext_when_encrypt_then_decrypt_returns_original() {
    let cipher = ChaChaRecoveryCipher;
    let key = SymmetricKey::generate(32).unwrap();

    let sealed = cipher.encrypt(b"owner@example.com", &key).unwrap();
    let opened = cipher.decrypt(&sealed, &key).unwrap();

    assert_that!(opened, eq(&b"owner@example.com".to_vec()));
}

#[test]
fn given_short_key_when_encrypt_then_still_roundtrips() {
    let cipher = ChaChaRecoveryCipher;
    let key = SymmetricKey::generate(16).unwrap();

    let sealed = cipher.encrypt(b"contact", &key).unwrap();

    assert_that!(cipher.decrypt(&sealed, &key), ok(eq(&b"contact".to_vec())));
}

#[test]
fn given_wrong_key_when_decrypt_then_error() {
    let cipher = ChaChaRecoveryCipher;
    let key = SymmetricKey::generate(32).unwrap();
    let other = SymmetricKey::generate(32).unwrap();
    let sealed = cipher.encrypt(b"secret", &key).unwrap();

    assert_that!(cipher.decrypt(&sealed, &other), err(anything()));
}

#[test]
fn given_truncated_ciphertext_when_decrypt_then_error() {
    let cipher = ChaChaRecoveryCipher;
    let key = SymmetricKey::generate(32).unwrap();

    assert_that!(cipher.decrypt(&[1, 2, 3], &key), err(anything()));
}
