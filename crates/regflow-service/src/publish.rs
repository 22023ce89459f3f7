//! # Publish Handler
//!
//! Admin-only terminal transition: fixes the published state, bumps the
//! version, and appends the version-history entry.

use regflow_core::{ActorId, RegulationId, Timestamp};
use regflow_state::{LifecycleError, Regulation};
use regflow_store::RegulationStore;

use crate::error::ServiceError;
use crate::roles::RoleDirectory;

/// Publish an approved regulation.
///
/// # Errors
///
/// - [`ServiceError::Forbidden`] unless the actor is an admin.
/// - [`ServiceError::Validation`] unless the document is pending publish.
/// - [`ServiceError::NotFound`] if the regulation does not exist.
pub fn publish_regulation(
    store: &dyn RegulationStore,
    roles: &dyn RoleDirectory,
    id: &RegulationId,
    admin: &ActorId,
    version_notes: Option<&str>,
    now: Timestamp,
) -> Result<Regulation, ServiceError> {
    let role = crate::resolve_role(roles, admin)?;
    if !role.can_publish() {
        return Err(ServiceError::Forbidden(format!(
            "role {role} cannot publish regulations"
        )));
    }

    let mut regulation = crate::fetch(store, id)?;
    regulation
        .publish(admin, role, version_notes, now)
        .map_err(|e| match e {
            LifecycleError::InvalidTransition { .. } => ServiceError::Validation(
                "only regulations under review can be published".to_string(),
            ),
            other => ServiceError::from(other),
        })?;
    store.update(id, &regulation)?;

    tracing::info!(
        regulation = %id,
        admin = %admin,
        version = regulation.version,
        "regulation published"
    );
    Ok(regulation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regflow_core::{RefNumber, RegulationStatus, Role};
    use regflow_store::MemoryStore;
    use crate::review::{review_regulation, ReviewDecision};
    use crate::roles::StaticRoles;
    use crate::submit::submit_regulation;

    fn at(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    struct Fixture {
        store: MemoryStore,
        roles: StaticRoles,
        id: RegulationId,
        admin: ActorId,
    }

    fn pending_publish_fixture() -> Fixture {
        let store = MemoryStore::new();
        let reviewer = ActorId::new();
        let admin = ActorId::new();
        let reg = Regulation::new(
            ActorId::new(),
            RefNumber::parse("G7000").unwrap(),
            "Import Licensing Rules",
            "trade",
            at("2026-01-01T00:00:00Z"),
        );
        store.insert(&reg).unwrap();
        let roles = StaticRoles::new()
            .with(reg.created_by, Role::Employee)
            .with(reviewer, Role::Reviewer)
            .with(admin, Role::Admin);

        submit_regulation(&store, &roles, &reg.id, &reg.created_by, at("2026-01-02T00:00:00Z"))
            .unwrap();
        review_regulation(
            &store,
            &roles,
            &reg.id,
            &reviewer,
            ReviewDecision::Approve,
            "ok",
            None,
            at("2026-01-03T00:00:00Z"),
        )
        .unwrap();

        Fixture {
            store,
            roles,
            id: reg.id,
            admin,
        }
    }

    #[test]
    fn test_publish_happy_path() {
        let f = pending_publish_fixture();
        let updated = publish_regulation(
            &f.store,
            &f.roles,
            &f.id,
            &f.admin,
            Some("First edition"),
            at("2026-01-04T00:00:00Z"),
        )
        .unwrap();

        assert_eq!(updated.status, RegulationStatus::Published);
        assert_eq!(updated.version, 2);
        assert!(updated.is_active);
        let stored = f.store.get(&f.id).unwrap();
        assert_eq!(stored.version_history.last().unwrap().version, 1);
        assert_eq!(stored.version_history.last().unwrap().notes, "First edition");
    }

    #[test]
    fn test_reviewer_cannot_publish() {
        let f = pending_publish_fixture();
        let reviewer = ActorId::new();
        let roles = StaticRoles::new().with(reviewer, Role::Reviewer);
        let result = publish_regulation(
            &f.store,
            &roles,
            &f.id,
            &reviewer,
            None,
            at("2026-01-04T00:00:00Z"),
        );
        assert!(matches!(result, Err(ServiceError::Forbidden(_))));
    }

    #[test]
    fn test_publish_from_wrong_status_message() {
        let store = MemoryStore::new();
        let admin = ActorId::new();
        let roles = StaticRoles::new().with(admin, Role::Admin);
        let reg = Regulation::new(
            ActorId::new(),
            RefNumber::parse("G7001").unwrap(),
            "Draft only",
            "trade",
            at("2026-01-01T00:00:00Z"),
        );
        store.insert(&reg).unwrap();

        let result =
            publish_regulation(&store, &roles, &reg.id, &admin, None, at("2026-01-02T00:00:00Z"));
        match result {
            Err(ServiceError::Validation(msg)) => {
                assert_eq!(msg, "only regulations under review can be published");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_double_publish_rejected() {
        let f = pending_publish_fixture();
        publish_regulation(&f.store, &f.roles, &f.id, &f.admin, None, at("2026-01-04T00:00:00Z"))
            .unwrap();
        let result =
            publish_regulation(&f.store, &f.roles, &f.id, &f.admin, None, at("2026-01-05T00:00:00Z"));
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_publish_missing_regulation() {
        let store = MemoryStore::new();
        let admin = ActorId::new();
        let roles = StaticRoles::new().with(admin, Role::Admin);
        let result = publish_regulation(
            &store,
            &roles,
            &RegulationId::new(),
            &admin,
            None,
            at("2026-01-02T00:00:00Z"),
        );
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
