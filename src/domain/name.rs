//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// The rendered name doubles as the address book's lookup key, so it must
/// not be empty. No other shape is imposed on it.
///
/// # Example
///
/// ```
/// use rolodex::domain::Name;
///
/// let name = Name::new("Ada").unwrap();
/// assert_eq!(name.as_str(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name has no visible characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Grace Hopper").unwrap();
        assert_eq!(name.as_str(), "Grace Hopper");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert!(Name::new("").is_err());
        assert!(Name::new("   ").is_err());
        assert!(Name::new("\t\n").is_err());
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("Ada").unwrap();
        assert_eq!(format!("{}", name), "Ada");
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Ada").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Ada\"");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
