pub mod fixtures;
pub mod test_db;

pub use fixtures::{account, failing_backend, test_record};
pub use test_db::create_test_pool;
