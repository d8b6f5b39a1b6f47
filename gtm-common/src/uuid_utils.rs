//! UUID utilities and project identifier parsing

use crate::{Error, Result};
use std::fmt;
use uuid::Uuid;

/// Literal used by the UI for a project that has not been created yet
pub const NEW_PROJECT: &str = "new";

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Parse UUID from string
pub fn parse(s: &str) -> std::result::Result<Uuid, uuid::Error> {
    Uuid::parse_str(s)
}

/// Project identifier as it arrives from a route or request body
///
/// Either the `"new"` sentinel or a hyphenated UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectRef {
    New,
    Id(Uuid),
}

impl ProjectRef {
    /// Parse a project identifier, rejecting anything that is neither
    /// `"new"` nor a well-formed hyphenated UUID.
    ///
    /// # Examples
    /// ```
    /// use gtm_common::uuid_utils::ProjectRef;
    ///
    /// assert_eq!(ProjectRef::parse("new").unwrap(), ProjectRef::New);
    /// assert!(ProjectRef::parse("9b2f0c1e-6d1a-4c3b-8f7e-2a5d4c3b2a10").is_ok());
    /// assert!(ProjectRef::parse("not-a-uuid").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        if raw == NEW_PROJECT {
            return Ok(ProjectRef::New);
        }

        // Only the canonical 36-char form is accepted (no braces/urn/simple)
        if raw.len() != 36 {
            return Err(Error::InvalidInput("Invalid project ID format".to_string()));
        }

        parse(raw)
            .map(ProjectRef::Id)
            .map_err(|_| Error::InvalidInput("Invalid project ID format".to_string()))
    }

    /// Parse an optional identifier; absent means a new project
    pub fn parse_optional(raw: Option<&str>) -> Result<Self> {
        match raw {
            None | Some("") => Ok(ProjectRef::New),
            Some(raw) => Self::parse(raw),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        match self {
            ProjectRef::New => None,
            ProjectRef::Id(id) => Some(*id),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, ProjectRef::New)
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectRef::New => f.write_str(NEW_PROJECT),
            ProjectRef::Id(id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sentinel() {
        assert_eq!(ProjectRef::parse("new").unwrap(), ProjectRef::New);
        assert!(ProjectRef::parse("new").unwrap().is_new());
    }

    #[test]
    fn test_valid_uuid() {
        let id = generate();
        let parsed = ProjectRef::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, ProjectRef::Id(id));
        assert_eq!(parsed.to_string(), id.to_string());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(ProjectRef::parse("").is_err());
        assert!(ProjectRef::parse("NEW").is_err());
        assert!(ProjectRef::parse("12345").is_err());
        // simple (unhyphenated) form is not accepted
        assert!(ProjectRef::parse(&generate().simple().to_string()).is_err());
    }

    #[test]
    fn test_optional_absent_is_new() {
        assert_eq!(ProjectRef::parse_optional(None).unwrap(), ProjectRef::New);
        assert_eq!(ProjectRef::parse_optional(Some("")).unwrap(), ProjectRef::New);
        assert!(ProjectRef::parse_optional(Some("bogus")).is_err());
    }
}
