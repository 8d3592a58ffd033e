// src/cipher/shift.rs

/// Rotate every ASCII letter `offset` places within its case, leaving
/// everything else untouched
pub fn transform(text: &str, offset: i64) -> String {
    let shift = offset.rem_euclid(26) as u8;

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                ((c as u8 - base + shift) % 26 + base) as char
            } else {
                c
            }
        })
        .collect()
}

pub fn shift_encode(text: &str, offset: i64) -> String {
    transform(text, offset)
}

pub fn shift_decode(text: &str, offset: i64) -> String {
    // Negate within the 26-cycle so i64::MIN has an inverse
    transform(text, 26 - offset.rem_euclid(26))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(shift_encode("ABC", 3), "DEF");
        assert_eq!(shift_decode("DEF", 3), "ABC");
        assert_eq!(shift_encode("xyz", 3), "abc");
        assert_eq!(shift_encode("Hello, World!", 3), "Khoor, Zruog!");
    }

    #[test]
    fn test_letters_roundtrip_with_case() {
        let letters: String = ('a'..='z').chain('A'..='Z').collect();
        for k in 0..26 {
            let encoded = shift_encode(&letters, k);
            for (before, after) in letters.chars().zip(encoded.chars()) {
                assert_eq!(before.is_ascii_uppercase(), after.is_ascii_uppercase());
            }
            assert_eq!(shift_decode(&encoded, k), letters);
        }
    }

    #[test]
    fn test_non_letters_pass_through() {
        let text = "0123 !?,\t\n ü ß 漢字 🦀";
        for k in [0, 1, 3, 13, 25, -7, 1000] {
            assert_eq!(shift_encode(text, k), text);
            assert_eq!(shift_decode(text, k), text);
        }
        assert_eq!(shift_encode("42 + 7 = 49!", 11), "42 + 7 = 49!");
    }

    #[test]
    fn test_offsets_are_taken_mod_26() {
        assert_eq!(shift_encode("abc", 29), shift_encode("abc", 3));
        assert_eq!(shift_encode("abc", -23), shift_encode("abc", 3));
        assert_eq!(shift_encode("abc", 26), "abc");
        assert_eq!(shift_decode(&shift_encode("Mixed Case", -40), -40), "Mixed Case");
        assert_eq!(shift_decode(&shift_encode("edge", i64::MIN), i64::MIN), "edge");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(shift_encode("", 3), "");
    }
}
