//! Session identity.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::SessionError;

/// Opaque identity of one client session.
///
/// Whatever the outer session store uses (a cookie value, a connection
/// id) becomes the key. The only rule is that it is not blank: a key
/// can only be built through [`SessionKey::new`] or `parse`, both of
/// which reject empty input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionKey(String);

impl SessionKey {
    /// Wraps a raw session identifier.
    ///
    /// # Errors
    /// Returns [`SessionError::MissingKey`] if `raw` is empty or only
    /// whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, SessionError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SessionError::MissingKey);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SessionKey {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_opaque_identifier() {
        let key = SessionKey::new("a1b2c3").unwrap();
        assert_eq!(key.as_str(), "a1b2c3");
    }

    #[test]
    fn test_new_empty_returns_missing_key() {
        assert!(matches!(SessionKey::new(""), Err(SessionError::MissingKey)));
    }

    #[test]
    fn test_new_blank_returns_missing_key() {
        assert!(matches!(
            SessionKey::new("  \t"),
            Err(SessionError::MissingKey)
        ));
    }

    #[test]
    fn test_parse_goes_through_validation() {
        assert!("".parse::<SessionKey>().is_err());
        assert_eq!("xyz".parse::<SessionKey>().unwrap().as_str(), "xyz");
    }

    #[test]
    fn test_display_shows_raw_key() {
        let key = SessionKey::new("a1b2-c3").unwrap();
        assert_eq!(key.to_string(), "a1b2-c3");
    }
}
