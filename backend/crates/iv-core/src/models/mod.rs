pub mod account_key;
pub mod identity_record;
pub mod self_id;
pub mod symmetric_key;
pub mod web2_payload;
