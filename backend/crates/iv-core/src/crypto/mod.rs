pub mod recovery_cipher;
