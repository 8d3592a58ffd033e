use crate::cipher::{Cipher, DEFAULT_KEYWORD, DEFAULT_SHIFT};

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const DEFAULT_LIST_DIR: &str = ".";

#[derive(Parser)]
#[command(name = "text-cipher", version, about = "Classical shift and digraph text ciphers")]
pub struct Cli {
    #[command(flatten)]
    pub settings: CipherSettings,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CipherKind {
    /// Rotate letters by a fixed offset
    #[value(alias = "caesar")]
    Shift,
    /// Substitute letter pairs through a keyword table
    #[value(alias = "playfair")]
    Digraph,
}

/// Cipher configuration shared by every command
#[derive(Args, Clone, Debug)]
pub struct CipherSettings {
    /// Cipher to apply
    #[arg(short, long, global = true, env = "TEXT_CIPHER_CIPHER", value_enum, default_value_t = CipherKind::Shift)]
    pub cipher: CipherKind,
    /// Shift offset for the shift cipher
    #[arg(long, global = true, env = "TEXT_CIPHER_SHIFT", allow_negative_numbers = true, default_value_t = DEFAULT_SHIFT)]
    pub shift: i64,
    /// Keyword for the digraph cipher table
    #[arg(short, long, global = true, env = "TEXT_CIPHER_KEY", default_value = DEFAULT_KEYWORD)]
    pub key: String,
}

impl CipherSettings {
    pub fn cipher_for(&self, kind: CipherKind) -> Cipher {
        match kind {
            CipherKind::Shift => Cipher::Shift { offset: self.shift },
            CipherKind::Digraph => Cipher::Digraph {
                key: self.key.clone(),
            },
        }
    }

    pub fn cipher(&self) -> Cipher {
        self.cipher_for(self.cipher)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text to a file
    Encrypt {
        /// Input (@file, - for stdin, or literal)
        #[arg(short, long)]
        input: String,
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
        /// Force overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Decrypt a file to another file
    Decrypt {
        /// Encrypted source file
        #[arg(short, long)]
        source: PathBuf,
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
        /// Force overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Decrypt and display a file next to its ciphertext
    Show {
        /// Encrypted source file
        #[arg(short, long)]
        source: PathBuf,
    },

    /// List text files in directory
    List {
        /// Directory containing .txt files
        #[arg(short, long, default_value = DEFAULT_LIST_DIR)]
        dir: PathBuf,
    },

    /// Print the digraph substitution table for the key
    Table,

    /// Interactive encrypt/decrypt menu
    Menu,
}
