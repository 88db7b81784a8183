//! Random password generation.
//!
//! Passwords are drawn from the operating system's cryptographically secure
//! generator and restricted to `[A-Za-z0-9]`, which is safe in every value the
//! API accepts a password for.

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Length used when the caller has no preference.
pub const DEFAULT_PASSWORD_LENGTH: usize = 42;

/// Generates a random alphanumeric password of exactly `length` characters.
///
/// Random bytes are base64-encoded and `/`, `+` and `=` are removed; the
/// process repeats until enough characters have been collected.
pub fn generate_password(length: usize) -> String {
    let mut password = String::with_capacity(length);

    while password.len() < length {
        let missing = length - password.len();
        let mut bytes = vec![0u8; missing];
        OsRng.fill_bytes(&mut bytes);

        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
        password.extend(
            encoded
                .chars()
                .filter(|c| !matches!(c, '/' | '+' | '='))
                .take(missing),
        );
    }

    password
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_length_is_exact() {
        for length in [0, 1, 2, 3, 7, 42, 100, 257] {
            assert_eq!(generate_password(length).len(), length);
        }
    }

    #[test]
    fn test_alphabet_is_alphanumeric() {
        let password = generate_password(500);

        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()), "{password}");
    }

    #[test]
    fn test_output_is_not_degenerate() {
        let first = generate_password(DEFAULT_PASSWORD_LENGTH);
        let second = generate_password(DEFAULT_PASSWORD_LENGTH);
        let distinct: HashSet<char> = first.chars().collect();

        assert_ne!(first, second);
        assert!(distinct.len() > 10, "{first}");
    }
}
