mod crypto;
mod models;
