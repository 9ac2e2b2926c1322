pub mod memory_backend;
pub mod sqlite_backend;
