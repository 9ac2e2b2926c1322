pub mod load_mode;
pub mod web2_export;
pub mod web2_service;
