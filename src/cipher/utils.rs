// src/cipher/utils.rs
use super::*;

use std::fs;
use std::io::Write;
use std::path::Path;
use time::OffsetDateTime;
use time::macros::format_description;

impl CipherManager {
    /// Write one line per text file with its last modified time
    pub fn list_files<W: Write>(&self, directory: &Path, out: &mut W) -> Result<(), CipherError> {
        let files = self.fs.list_text_files(directory)?;
        if files.is_empty() {
            eprintln!("[WARNING] No .txt files found in {}", directory.display());
            return Ok(());
        }

        for file in files {
            let stamp = modified_stamp(&file)?;
            match file.file_name() {
                Some(name) => writeln!(out, "{} (Last modified {})", name.to_string_lossy(), stamp)?,
                None => writeln!(out, "Invalid file name: {}", file.display())?,
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Print the substitution table a digraph key produces
    pub fn print_table(&self, key: &str) {
        let cipher = DigraphCipher::new(key);
        println!("Substitution table for key {:?}:", key);
        println!("{}", cipher.table());
    }
}

/// Last modified time of `path`, formatted in UTC
pub fn modified_stamp(path: &Path) -> Result<String, CipherError> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    OffsetDateTime::from(fs::metadata(path)?.modified()?)
        .format(&format)
        .map_err(|e| CipherError::Parse(format!("Failed to format modified date: {}", e)))
}
