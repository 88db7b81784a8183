//! Newtype identifiers.
//!
//! The session token is wrapped in its own type so that it cannot be confused
//! with ordinary string arguments, and so that its `Debug` output never leaks
//! the credential into logs.

/// Opaque credential returned by `login` and sent as the first parameter of
/// every subsequent call.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Creates a new token, returning `None` if the value is empty.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_rejected() {
        assert!(SessionToken::new("").is_none());
        assert_eq!(SessionToken::new("abc").map(|t| t.as_str().to_owned()), Some("abc".to_owned()));
    }

    #[test]
    fn test_debug_output_is_redacted() {
        let token = SessionToken::new("s3cr3t-session").unwrap();

        let debug = format!("{token:?}");

        assert!(!debug.contains("s3cr3t"));
    }
}
