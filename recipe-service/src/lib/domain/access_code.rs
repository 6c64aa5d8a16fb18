use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

/// Opaque code handed out by share codes and invites.
///
/// Generated codes are 8 random bytes rendered as 16 lowercase hex characters.
/// Codes read back from clients are kept verbatim; an unknown code simply
/// finds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessCode(String);

impl AccessCode {
    const RANDOM_BYTES: usize = 8;

    /// Generate a new code from the operating system's secure RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; Self::RANDOM_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Wrap a code received from a client or read from storage.
    pub fn from_string(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generated_code_is_sixteen_lowercase_hex_chars() {
        let code = AccessCode::generate();

        assert_eq!(code.as_str().len(), 16);
        assert!(code
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_generated_codes_differ() {
        let codes: HashSet<AccessCode> = (0..100).map(|_| AccessCode::generate()).collect();
        assert_eq!(codes.len(), 100);
    }
}
