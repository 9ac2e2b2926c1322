mod account_key;
mod identity_record;
mod self_id;
mod symmetric_key;
mod web2_payload;
