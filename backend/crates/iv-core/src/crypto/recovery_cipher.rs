use crate::{CoreError, CoreResult, SymmetricKey};

use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use sha2::{Digest, Sha256};

const NONCE_LEN: usize = 12;

/// Symmetric cipher used for the recovery identifier.
pub trait RecoveryCipher: Send + Sync {
    fn encrypt(&self, plaintext: &[u8], key: &SymmetricKey) -> CoreResult<Vec<u8>>;
    fn decrypt(&self, ciphertext: &[u8], key: &SymmetricKey) -> CoreResult<Vec<u8>>;
}

/// ChaCha20-Poly1305 with a random nonce prepended to the ciphertext.
///
/// The 256-bit cipher key is SHA-256 of the account's symmetric key, so keys of
/// any configured length are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaChaRecoveryCipher;

impl ChaChaRecoveryCipher {
    fn aead(key: &SymmetricKey) -> ChaCha20Poly1305 {
        let digest = Sha256::digest(key.as_bytes());
        ChaCha20Poly1305::new(Key::from_slice(&digest))
    }
}

impl RecoveryCipher for ChaChaRecoveryCipher {
    fn encrypt(&self, plaintext: &[u8], key: &SymmetricKey) -> CoreResult<Vec<u8>> {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let sealed = Self::aead(key)
            .encrypt(&nonce, plaintext)
            .map_err(|e| CoreError::cipher(format!("encrypt failed: {e}")))?;

        let mut out = Vec::with_capacity(NONCE_LEN + sealed.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&sealed);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], key: &SymmetricKey) -> CoreResult<Vec<u8>> {
        if ciphertext.len() < NONCE_LEN {
            return Err(CoreError::cipher(format!(
                "ciphertext too short: {} bytes",
                ciphertext.len()
            )));
        }
        let (nonce, sealed) = ciphertext.split_at(NONCE_LEN);
        Self::aead(key)
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|e| CoreError::cipher(format!("decrypt failed: {e}")))
    }
}
