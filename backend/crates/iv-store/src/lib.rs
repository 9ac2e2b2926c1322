pub mod backends;
pub mod error;
pub mod identity_store;
pub mod record_backend;

pub use backends::memory_backend::MemoryBackend;
pub use backends::sqlite_backend::SqliteBackend;
pub use error::{Result as StoreResult, StoreError};
pub use identity_store::IdentityStore;
pub use record_backend::RecordBackend;
