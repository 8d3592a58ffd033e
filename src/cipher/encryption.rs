// src/cipher/encryption.rs
use super::*;

use crate::filesystem::TEXT_FILE_MODE;
use std::path::Path;

impl CipherManager {
    /// Encrypt input (@file, - for stdin, or literal) to a text file
    pub fn encrypt_to_file(
        &self,
        cipher: &Cipher,
        input: &str,
        output: &Path,
        force: bool,
    ) -> Result<(), CipherError> {
        let content = self.fs.parse_content(input)?;
        self.write_encrypted(cipher, &content, output, force)?;

        println!("Encrypted text saved to {}", output.display());
        Ok(())
    }

    /// Encrypt plain text and persist the raw ciphertext
    pub fn write_encrypted(
        &self,
        cipher: &Cipher,
        plain_text: &str,
        output: &Path,
        force: bool,
    ) -> Result<String, CipherError> {
        self.fs.overwrite_check(output, force)?;

        let encrypted = cipher.encrypt(plain_text)?;
        self.fs
            .write_atomic(output, encrypted.as_bytes(), TEXT_FILE_MODE)?;

        tracing::info!(%cipher, path = %output.display(), "encrypted text written");
        Ok(encrypted)
    }
}
