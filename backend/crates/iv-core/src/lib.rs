pub mod crypto;
pub mod error;
pub mod models;
pub mod token_source;
pub mod web2_codec;

#[cfg(test)]
mod tests;

pub use crypto::recovery_cipher::{ChaChaRecoveryCipher, RecoveryCipher};
pub use error::{CoreError, Result as CoreResult};
pub use models::account_key::AccountKey;
pub use models::identity_record::IdentityRecord;
pub use models::self_id::SelfId;
pub use models::symmetric_key::SymmetricKey;
pub use models::web2_payload::Web2Payload;
pub use token_source::{TokenSource, UuidTokenSource};
pub use web2_codec::{UnsealedJsonCodec, Web2Codec};

/// Store namespace that identity records live under.
pub const IDENTITY_NAMESPACE: &str = "user";

/// Default length in bytes of a freshly generated symmetric key.
pub const DEFAULT_SYMMETRIC_KEY_LEN: usize = 32;
