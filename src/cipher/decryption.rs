// src/cipher/decryption.rs
use super::*;

use crate::filesystem::{TEXT_FILE_MODE, strip_line_endings};
use std::io::Write;
use std::path::Path;

/// Ciphertext as stored on disk next to its decryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decrypted {
    pub encrypted: String,
    pub decrypted: String,
}

impl CipherManager {
    /// Read a ciphertext file and decrypt it
    pub fn decrypt_file(&self, cipher: &Cipher, source: &Path) -> Result<Decrypted, CipherError> {
        let raw = self.fs.read_file_content(source)?;
        let encrypted = strip_line_endings(&raw).to_string();
        let decrypted = cipher.decrypt(&encrypted)?;

        tracing::debug!(%cipher, path = %source.display(), "decrypted file");
        Ok(Decrypted {
            encrypted,
            decrypted,
        })
    }

    /// Write ciphertext and plaintext of a file to `out`
    pub fn show_file<W: Write>(
        &self,
        cipher: &Cipher,
        source: &Path,
        out: &mut W,
    ) -> Result<(), CipherError> {
        let result = self.decrypt_file(cipher, source)?;

        writeln!(out, "\nEncrypted text from file:")?;
        writeln!(out, "{}", result.encrypted)?;
        writeln!(out, "\nDecrypted text:")?;
        writeln!(out, "{}", result.decrypted)?;
        out.flush()?;
        Ok(())
    }

    /// Decrypt a file to another file
    pub fn decrypt_to_file(
        &self,
        cipher: &Cipher,
        source: &Path,
        output: &Path,
        force: bool,
    ) -> Result<(), CipherError> {
        self.fs.overwrite_check(output, force)?;

        let result = self.decrypt_file(cipher, source)?;
        self.fs
            .write_atomic(output, result.decrypted.as_bytes(), TEXT_FILE_MODE)?;

        println!("Decrypted text saved to {}", output.display());
        Ok(())
    }
}
