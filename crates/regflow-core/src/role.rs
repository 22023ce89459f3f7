//! # Actor Roles
//!
//! The three roles recognized by the approval workflow, with the
//! capability checks the transition handlers gate on. Role storage and
//! lookup belong to the users collaborator — this module only defines
//! the vocabulary and the boolean capabilities.

use serde::{Deserialize, Serialize};

/// The role of an actor in the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Authors and submits regulation drafts.
    Employee,
    /// Reviews submitted regulations (approve or send back for revision).
    Reviewer,
    /// Publishes approved regulations and assigns reviewers.
    Admin,
}

impl Role {
    /// Whether this role may issue review decisions.
    pub fn can_review(&self) -> bool {
        matches!(self, Self::Reviewer | Self::Admin)
    }

    /// Whether this role may publish and assign reviewers.
    pub fn can_publish(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Employee => "employee",
            Self::Reviewer => "reviewer",
            Self::Admin => "admin",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_capability() {
        assert!(!Role::Employee.can_review());
        assert!(Role::Reviewer.can_review());
        assert!(Role::Admin.can_review());
    }

    #[test]
    fn test_publish_capability() {
        assert!(!Role::Employee.can_publish());
        assert!(!Role::Reviewer.can_publish());
        assert!(Role::Admin.can_publish());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let parsed: Role = serde_json::from_str("\"reviewer\"").unwrap();
        assert_eq!(parsed, Role::Reviewer);
    }
}
