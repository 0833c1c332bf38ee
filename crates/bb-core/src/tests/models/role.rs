use crate::{ALLOWED_ROLES, Role};

use std::str::FromStr;

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("OWNER").unwrap(), Role::Owner);
    assert_eq!(Role::from_str("COORDINATOR").unwrap(), Role::Coordinator);
    assert_eq!(Role::from_str("CASHIER").unwrap(), Role::Cashier);
    assert!(Role::from_str("owner").is_err());
    assert!(Role::from_str("SUPERUSER").is_err());
}

#[test]
fn test_role_as_str_round_trips_through_from_str() {
    for role in [Role::Owner, Role::Staff, Role::Waiter, Role::Shop] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_only_owner_admin_coordinator_are_dashboard_roles() {
    assert_eq!(ALLOWED_ROLES.len(), 3);
    assert!(Role::Owner.is_dashboard_role());
    assert!(Role::Admin.is_dashboard_role());
    assert!(Role::Coordinator.is_dashboard_role());
    assert!(!Role::Staff.is_dashboard_role());
    assert!(!Role::Shop.is_dashboard_role());
    assert!(!Role::Waiter.is_dashboard_role());
    assert!(!Role::Cashier.is_dashboard_role());
}
