// Interactive shell: a dialoguer select loop that owns all session state
// and hands each request to the cipher manager.

use crate::cipher::{Cipher, CipherManager, Decrypted};
use crate::cli::{CipherKind, CipherSettings};
use crate::errors::CipherError;

use dialoguer::{Input, Select};
use std::path::Path;

const MENU_ITEMS: [&str; 3] = [
    "Create or edit a file with encrypted text",
    "Decrypt and read text from an existing file",
    "Exit",
];
const CIPHER_ITEMS: [&str; 2] = ["Shift (Caesar)", "Digraph (Playfair)"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Encrypt,
    Decrypt,
    Exit,
}

impl MenuChoice {
    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Encrypt),
            1 => Some(Self::Decrypt),
            2 => Some(Self::Exit),
            _ => None,
        }
    }
}

fn cipher_kind_from_index(index: usize) -> Option<CipherKind> {
    match index {
        0 => Some(CipherKind::Shift),
        1 => Some(CipherKind::Digraph),
        _ => None,
    }
}

/// Run the menu until the user exits
pub fn main_menu(manager: &CipherManager, settings: &CipherSettings) -> Result<(), CipherError> {
    println!("Welcome to the File Text Cipher Program!");

    loop {
        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        let outcome = match MenuChoice::from_index(selection) {
            Some(MenuChoice::Encrypt) => prompt_encrypt(manager, settings),
            Some(MenuChoice::Decrypt) => prompt_decrypt(manager, settings),
            Some(MenuChoice::Exit) => {
                println!("Goodbye!");
                return Ok(());
            }
            None => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };

        // A failed request ends the request, not the session
        if let Err(e) = outcome {
            eprintln!("Error: {}", e);
        }
    }
}

fn prompt_encrypt(manager: &CipherManager, settings: &CipherSettings) -> Result<(), CipherError> {
    let filename: String = Input::new()
        .with_prompt("Enter the filename (with .txt extension)")
        .interact_text()?;
    let cipher = prompt_cipher(settings)?;
    let plain_text: String = Input::new()
        .with_prompt("Enter the text to encrypt")
        .allow_empty(true)
        .interact_text()?;

    create_encrypted_file(manager, &cipher, Path::new(filename.trim()), &plain_text)?;
    Ok(())
}

fn prompt_decrypt(manager: &CipherManager, settings: &CipherSettings) -> Result<(), CipherError> {
    let filename: String = Input::new()
        .with_prompt("Enter the filename to decrypt")
        .interact_text()?;
    let cipher = prompt_cipher(settings)?;

    if let Some(result) = read_encrypted_file(manager, &cipher, Path::new(filename.trim()))? {
        println!("\nEncrypted text from file:");
        println!("{}", result.encrypted);
        println!("\nDecrypted text:");
        println!("{}", result.decrypted);
    }
    Ok(())
}

fn prompt_cipher(settings: &CipherSettings) -> Result<Cipher, CipherError> {
    let default = match settings.cipher {
        CipherKind::Shift => 0,
        CipherKind::Digraph => 1,
    };
    let selection = Select::new()
        .with_prompt("Choose a cipher")
        .items(&CIPHER_ITEMS)
        .default(default)
        .interact()?;

    let kind = cipher_kind_from_index(selection)
        .ok_or_else(|| CipherError::Parse("Invalid cipher choice".to_string()))?;
    Ok(settings.cipher_for(kind))
}

/// Encrypt and write, replacing any existing file
pub fn create_encrypted_file(
    manager: &CipherManager,
    cipher: &Cipher,
    path: &Path,
    plain_text: &str,
) -> Result<String, CipherError> {
    let encrypted = manager.write_encrypted(cipher, plain_text, path, true)?;
    println!("Encrypted text saved to {}", path.display());
    Ok(encrypted)
}

/// Decrypt an existing file; a missing file is reported and yields `None`
pub fn read_encrypted_file(
    manager: &CipherManager,
    cipher: &Cipher,
    path: &Path,
) -> Result<Option<Decrypted>, CipherError> {
    if !path.exists() {
        println!("Error: {} does not exist.", path.display());
        return Ok(None);
    }
    manager.decrypt_file(cipher, path).map(Some)
}
