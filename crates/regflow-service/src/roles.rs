//! # Role Directory Collaborator
//!
//! The users collection is an external collaborator; the handlers only
//! consume a role lookup and an optional display name. `StaticRoles` is
//! the in-memory implementation used by tests and the CLI driver.

use std::collections::HashMap;

use regflow_core::{ActorId, Role};
use regflow_store::StoreError;

/// Read-only role lookup against the users collaborator.
pub trait RoleDirectory: Send + Sync {
    /// The actor's role, or `None` if the actor is unknown.
    fn role_of(&self, actor: &ActorId) -> Result<Option<Role>, StoreError>;

    /// Human display name for the actor, when the directory has one.
    fn display_name(&self, actor: &ActorId) -> Result<Option<String>, StoreError> {
        let _ = actor;
        Ok(None)
    }
}

/// Fixed in-memory role directory.
#[derive(Debug, Default)]
pub struct StaticRoles {
    entries: HashMap<ActorId, (Role, Option<String>)>,
}

impl StaticRoles {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor with a role.
    pub fn with(mut self, actor: ActorId, role: Role) -> Self {
        self.entries.insert(actor, (role, None));
        self
    }

    /// Register an actor with a role and display name.
    pub fn with_named(mut self, actor: ActorId, role: Role, name: impl Into<String>) -> Self {
        self.entries.insert(actor, (role, Some(name.into())));
        self
    }
}

impl RoleDirectory for StaticRoles {
    fn role_of(&self, actor: &ActorId) -> Result<Option<Role>, StoreError> {
        Ok(self.entries.get(actor).map(|(role, _)| *role))
    }

    fn display_name(&self, actor: &ActorId) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(actor).and_then(|(_, name)| name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_roles_lookup() {
        let admin = ActorId::new();
        let roles = StaticRoles::new().with_named(admin, Role::Admin, "A. Okafor");
        assert_eq!(roles.role_of(&admin).unwrap(), Some(Role::Admin));
        assert_eq!(
            roles.display_name(&admin).unwrap().as_deref(),
            Some("A. Okafor")
        );
        assert_eq!(roles.role_of(&ActorId::new()).unwrap(), None);
    }
}
