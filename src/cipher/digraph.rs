// src/cipher/digraph.rs
use super::table::{
    EXCLUDED_LETTER, FILLER_LETTER, GRID_SIZE, SUBSTITUTE_LETTER, SubstitutionTable,
};
use crate::errors::CipherError;

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn step(self, index: usize) -> usize {
        match self {
            Self::Forward => (index + 1) % GRID_SIZE,
            Self::Backward => (index + GRID_SIZE - 1) % GRID_SIZE,
        }
    }
}

/// Pair-substitution cipher over a keyword-derived 5x5 table
#[derive(Debug, Clone)]
pub struct DigraphCipher {
    table: SubstitutionTable,
}

impl DigraphCipher {
    pub fn new(key: &str) -> Self {
        Self {
            table: SubstitutionTable::build(key),
        }
    }

    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    pub fn encode(&self, plain_text: &str) -> Result<String, CipherError> {
        let digraphs = split_digraphs(&normalize_plaintext(plain_text));
        tracing::debug!(pairs = digraphs.len(), "encoding digraphs");
        self.substitute_all(&digraphs, Direction::Forward)
    }

    /// Inverse substitution over fixed pairs; fillers and the excluded letter stay lost
    pub fn decode(&self, cipher_text: &str) -> Result<String, CipherError> {
        let letters: Vec<char> = cipher_text.chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() % 2 != 0 {
            return Err(CipherError::Parse(format!(
                "odd-length ciphertext ({} characters)",
                letters.len()
            )));
        }
        let digraphs: Vec<(char, char)> = letters
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        tracing::debug!(pairs = digraphs.len(), "decoding digraphs");
        self.substitute_all(&digraphs, Direction::Backward)
    }

    fn substitute_all(
        &self,
        digraphs: &[(char, char)],
        direction: Direction,
    ) -> Result<String, CipherError> {
        let mut output = String::with_capacity(digraphs.len() * 2);
        for &(first, second) in digraphs {
            let (a, b) = self.substitute(first, second, direction)?;
            output.push(a);
            output.push(b);
        }
        Ok(output)
    }

    fn substitute(
        &self,
        first: char,
        second: char,
        direction: Direction,
    ) -> Result<(char, char), CipherError> {
        let (row1, col1) = self.table.locate(first)?;
        let (row2, col2) = self.table.locate(second)?;

        let pair = if row1 == row2 {
            (
                self.table.letter_at(row1, direction.step(col1)),
                self.table.letter_at(row2, direction.step(col2)),
            )
        } else if col1 == col2 {
            (
                self.table.letter_at(direction.step(row1), col1),
                self.table.letter_at(direction.step(row2), col2),
            )
        } else {
            // Rectangle: swap columns, identical both ways
            (
                self.table.letter_at(row1, col2),
                self.table.letter_at(row2, col1),
            )
        };
        Ok(pair)
    }
}

pub fn digraph_encode(plain_text: &str, key: &str) -> Result<String, CipherError> {
    DigraphCipher::new(key).encode(plain_text)
}

pub fn digraph_decode(cipher_text: &str, key: &str) -> Result<String, CipherError> {
    DigraphCipher::new(key).decode(cipher_text)
}

/// Strip whitespace, uppercase, and merge the excluded letter into its substitute
pub fn normalize_plaintext(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .map(|c| if c == EXCLUDED_LETTER { SUBSTITUTE_LETTER } else { c })
        .collect()
}

/// Pair letters left to right, breaking doubles and padding the tail with the filler
pub fn split_digraphs(letters: &[char]) -> Vec<(char, char)> {
    let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        match letters.get(i + 1) {
            Some(&next) if next != letters[i] => {
                digraphs.push((letters[i], next));
                i += 2;
            }
            _ => {
                digraphs.push((letters[i], FILLER_LETTER));
                i += 1;
            }
        }
    }
    digraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(text: &str) -> String {
        split_digraphs(&normalize_plaintext(text))
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect()
    }

    #[test]
    fn test_split_breaks_doubles_and_pads() {
        assert_eq!(prepared("HELLO"), "HELXLO");
        assert_eq!(prepared("balloon"), "BALXLOON");
        assert_eq!(prepared("ABC"), "ABCX");
        assert_eq!(prepared("AAA"), "AXAXAX");
        assert_eq!(prepared("XX"), "XXXX");
        assert_eq!(prepared(""), "");
    }

    #[test]
    fn test_normalize_plaintext() {
        assert_eq!(
            normalize_plaintext(" jam\tJar\n"),
            vec!['I', 'A', 'M', 'I', 'A', 'R']
        );
    }

    #[test]
    fn test_hello_with_keyword() {
        let encoded = digraph_encode("HELLO", "KEYWORD").unwrap();
        assert_eq!(encoded, "GYIZSC");
        let decoded = digraph_decode(&encoded, "KEYWORD").unwrap();
        // Filler between the doubled L survives decoding
        assert_eq!(decoded, "HELXLO");
        assert_ne!(decoded, "HELLO");
    }

    #[test]
    fn test_roundtrip_returns_prepared_text() {
        for text in ["hide the gold in the tree stump", "balloon", "jam", "Attack at dawn"] {
            let encoded = digraph_encode(text, "PLAYFAIR EXAMPLE").unwrap();
            assert_eq!(encoded.len() % 2, 0);
            assert_eq!(
                digraph_decode(&encoded, "PLAYFAIR EXAMPLE").unwrap(),
                prepared(text)
            );
        }
    }

    #[test]
    fn test_roundtrip_exact_when_preconditions_hold() {
        let encoded = digraph_encode("WORDPLAY", "KEYWORD").unwrap();
        assert_eq!(digraph_decode(&encoded, "KEYWORD").unwrap(), "WORDPLAY");
    }

    #[test]
    fn test_excluded_letter_is_not_restored() {
        let encoded = digraph_encode("JAM", "KEYWORD").unwrap();
        assert_eq!(digraph_decode(&encoded, "KEYWORD").unwrap(), "IAMX");
    }

    #[test]
    fn test_rectangle_is_self_inverse() {
        let cipher = DigraphCipher::new("KEYWORD");
        // H (2,2) and E (0,1) share neither row nor column
        let encoded = cipher.encode("HE").unwrap();
        assert_eq!(encoded, "GY");
        assert_eq!(cipher.encode(&encoded).unwrap(), "HE");
        assert_eq!(cipher.decode(&encoded).unwrap(), "HE");
    }

    #[test]
    fn test_row_wraps_at_last_column() {
        let cipher = DigraphCipher::new("KEYWORD");
        // O sits in column 4 of row 0 and wraps to K in column 0
        assert_eq!(cipher.encode("OK").unwrap(), "KE");
        assert_eq!(cipher.decode("KE").unwrap(), "OK");
    }

    #[test]
    fn test_column_wraps_at_last_row() {
        let cipher = DigraphCipher::new("KEYWORD");
        // Z sits in row 4 of column 4 and wraps to O in row 0
        assert_eq!(cipher.encode("ZO").unwrap(), "OC");
        assert_eq!(cipher.decode("OC").unwrap(), "ZO");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(digraph_encode("", "KEYWORD").unwrap(), "");
        assert_eq!(digraph_encode("  \n", "KEYWORD").unwrap(), "");
        assert_eq!(digraph_decode("", "KEYWORD").unwrap(), "");
    }

    #[test]
    fn test_decode_accepts_lowercase() {
        assert_eq!(digraph_decode("gyizsc", "KEYWORD").unwrap(), "HELXLO");
    }

    #[test]
    fn test_decode_rejects_truncated_ciphertext() {
        // GYIZSC with its last letter cut
        let result = digraph_decode("GYIZS", "KEYWORD");
        assert!(matches!(result, Err(CipherError::Parse(msg)) if msg.contains("odd-length")));
        assert!(matches!(
            digraph_decode("G", "KEYWORD"),
            Err(CipherError::Parse(_))
        ));
    }

    #[test]
    fn test_lookup_failures_propagate() {
        assert!(matches!(
            digraph_encode("HELLO, WORLD", "KEYWORD"),
            Err(CipherError::Lookup(','))
        ));
        assert!(matches!(
            digraph_encode("R2D2", "KEYWORD"),
            Err(CipherError::Lookup('2'))
        ));
        assert!(matches!(
            digraph_decode("JA", "KEYWORD"),
            Err(CipherError::Lookup('J'))
        ));
        assert!(matches!(
            digraph_decode("GY I", "KEYWORD"),
            Err(CipherError::Lookup(' '))
        ));
    }
}
