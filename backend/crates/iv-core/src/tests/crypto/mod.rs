mod recovery_cipher;
