//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers moving through the tracker.
//! These prevent accidental identifier confusion — you cannot pass an
//! `ActorId` where a `RegulationId` is expected.
//!
//! `RefNumber` is the short human-facing code printed on documents and
//! cited in correspondence; it has a validated constructor enforcing
//! the `[A-J][1000-9999]` format.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RegflowError;

/// Unique identifier for a tracked regulation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegulationId(pub Uuid);

/// Unique identifier for an actor (employee, reviewer, or admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl RegulationId {
    /// Generate a new random regulation identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RegulationId {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorId {
    /// Generate a new random actor identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RegulationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "regulation:{}", self.0)
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "actor:{}", self.0)
    }
}

/// Short human-facing reference code for a regulation.
///
/// Format: one category letter `A`–`J` followed by a four-digit number
/// in `1000`–`9999` (e.g. `B4821`). Unique-ish by convention, not
/// enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RefNumber(String);

impl RefNumber {
    /// Validate and wrap a reference number string.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the input is exactly one letter
    /// in `A`–`J` followed by a number in `1000`–`9999`.
    pub fn parse(s: &str) -> Result<Self, RegflowError> {
        let mut chars = s.chars();
        let letter = chars.next();
        let ok = matches!(letter, Some('A'..='J'))
            && s.len() == 5
            && s[1..].parse::<u16>().is_ok_and(|n| (1000..=9999).contains(&n));
        if !ok {
            return Err(RegflowError::Validation(format!(
                "reference number must match [A-J][1000-9999], got: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// The underlying code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RefNumber {
    type Error = RegflowError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<RefNumber> for String {
    fn from(r: RefNumber) -> Self {
        r.0
    }
}

impl std::fmt::Display for RefNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_number_valid() {
        assert_eq!(RefNumber::parse("A1000").unwrap().as_str(), "A1000");
        assert_eq!(RefNumber::parse("J9999").unwrap().as_str(), "J9999");
        assert_eq!(RefNumber::parse("B4821").unwrap().to_string(), "B4821");
    }

    #[test]
    fn test_ref_number_invalid_letter() {
        assert!(RefNumber::parse("K1000").is_err());
        assert!(RefNumber::parse("a1000").is_err());
        assert!(RefNumber::parse("11000").is_err());
    }

    #[test]
    fn test_ref_number_invalid_range() {
        assert!(RefNumber::parse("A0999").is_err());
        assert!(RefNumber::parse("A999").is_err());
        assert!(RefNumber::parse("A10000").is_err());
        assert!(RefNumber::parse("A").is_err());
        assert!(RefNumber::parse("").is_err());
    }

    #[test]
    fn test_ref_number_serde_roundtrip() {
        let r = RefNumber::parse("C2500").unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "\"C2500\"");
        let parsed: RefNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, r);
    }

    #[test]
    fn test_ref_number_serde_rejects_invalid() {
        assert!(serde_json::from_str::<RefNumber>("\"Z1234\"").is_err());
    }

    #[test]
    fn test_ids_distinct() {
        assert_ne!(RegulationId::new(), RegulationId::new());
        assert_ne!(ActorId::new(), ActorId::new());
    }

    #[test]
    fn test_id_display_prefixes() {
        let r = RegulationId::new();
        let a = ActorId::new();
        assert!(r.to_string().starts_with("regulation:"));
        assert!(a.to_string().starts_with("actor:"));
    }
}
