// src/cipher/table.rs
use crate::errors::CipherError;

use std::fmt;

pub const GRID_SIZE: usize = 5;

/// Letter merged into `SUBSTITUTE_LETTER` and left out of the grid
pub const EXCLUDED_LETTER: char = 'J';
pub const SUBSTITUTE_LETTER: char = 'I';
pub const FILLER_LETTER: char = 'X';

pub const ALPHABET: [char; GRID_SIZE * GRID_SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// 5x5 key-derived letter grid, row-major, holding every alphabet letter once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    grid: [[char; GRID_SIZE]; GRID_SIZE],
    positions: [Option<(usize, usize)>; 26],
}

impl SubstitutionTable {
    /// Build the grid from the normalized key followed by the rest of the alphabet
    pub fn build(key: &str) -> Self {
        let normalized = normalize_key(key);

        let mut placed = [false; 26];
        let mut sequence = Vec::with_capacity(ALPHABET.len());
        for letter in normalized.iter().chain(ALPHABET.iter()) {
            let slot = letter_slot(*letter);
            if !placed[slot] {
                placed[slot] = true;
                sequence.push(*letter);
            }
        }

        let mut grid = [[FILLER_LETTER; GRID_SIZE]; GRID_SIZE];
        let mut positions = [None; 26];
        for (index, letter) in sequence.into_iter().enumerate() {
            let (row, col) = (index / GRID_SIZE, index % GRID_SIZE);
            grid[row][col] = letter;
            positions[letter_slot(letter)] = Some((row, col));
        }

        tracing::debug!(key_letters = normalized.len(), "built substitution table");
        Self { grid, positions }
    }

    /// Position of `letter` in the grid
    pub fn locate(&self, letter: char) -> Result<(usize, usize), CipherError> {
        if !is_table_letter(letter) {
            return Err(CipherError::Lookup(letter));
        }
        self.positions[letter_slot(letter)].ok_or(CipherError::Lookup(letter))
    }

    pub fn letter_at(&self, row: usize, col: usize) -> char {
        self.grid[row % GRID_SIZE][col % GRID_SIZE]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char; GRID_SIZE]> {
        self.grid.iter()
    }
}

impl fmt::Display for SubstitutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            if index + 1 < GRID_SIZE {
                writeln!(f, "{}", line.join(" "))?;
            } else {
                write!(f, "{}", line.join(" "))?;
            }
        }
        Ok(())
    }
}

/// Uppercase, keep alphabet letters only, drop repeats in first-seen order
pub fn normalize_key(key: &str) -> Vec<char> {
    let mut seen = [false; 26];
    key.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| is_table_letter(*c))
        .filter(|c| !std::mem::replace(&mut seen[letter_slot(*c)], true))
        .collect()
}

fn is_table_letter(c: char) -> bool {
    c.is_ascii_uppercase() && c != EXCLUDED_LETTER
}

// Caller guarantees an ASCII uppercase letter
fn letter_slot(c: char) -> usize {
    (c as u8 - b'A') as usize
}
