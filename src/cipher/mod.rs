mod decryption;
mod digraph;
mod encryption;
mod shift;
mod table;
mod utils;

use crate::errors::CipherError;
use crate::filesystem::FileManager;

use std::fmt;

pub use decryption::Decrypted;
pub use digraph::{DigraphCipher, digraph_decode, digraph_encode};
pub use shift::{shift_decode, shift_encode};
pub use utils::modified_stamp;

pub const DEFAULT_SHIFT: i64 = 3;
pub const DEFAULT_KEYWORD: &str = "KEYWORD";

/// Cipher selection together with its parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Shift { offset: i64 },
    Digraph { key: String },
}

impl Cipher {
    pub fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        match self {
            Self::Shift { offset } => Ok(shift_encode(text, *offset)),
            Self::Digraph { key } => digraph_encode(text, key),
        }
    }

    pub fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        match self {
            Self::Shift { offset } => Ok(shift_decode(text, *offset)),
            Self::Digraph { key } => digraph_decode(text, key),
        }
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shift { offset } => write!(f, "shift cipher (offset {})", offset),
            Self::Digraph { key } => write!(f, "digraph cipher (key {:?})", key),
        }
    }
}

/// File workflows built on the cipher engine
pub struct CipherManager {
    fs: FileManager,
}

impl CipherManager {
    pub fn new() -> Self {
        Self {
            fs: FileManager::new(),
        }
    }
}

impl Default for CipherManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_cipher_dispatch() {
        let cipher = Cipher::Shift { offset: 3 };
        assert_eq!(cipher.encrypt("ABC").unwrap(), "DEF");
        assert_eq!(cipher.decrypt("DEF").unwrap(), "ABC");
    }

    #[test]
    fn test_digraph_cipher_dispatch() {
        let cipher = Cipher::Digraph {
            key: DEFAULT_KEYWORD.to_string(),
        };
        assert_eq!(cipher.encrypt("HELLO").unwrap(), "GYIZSC");
        assert_eq!(cipher.decrypt("GYIZSC").unwrap(), "HELXLO");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Cipher::Shift { offset: -2 }.to_string(),
            "shift cipher (offset -2)"
        );
        assert_eq!(
            Cipher::Digraph { key: "KEY".into() }.to_string(),
            "digraph cipher (key \"KEY\")"
        );
    }
}
