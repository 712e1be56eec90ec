use std::sync::Arc;

use edugate_core::{
    DashboardVariant, Permission, PermissionRegistry, PermissionResolver, Role, visible_navigation,
};
use fake::Fake;
use fake::faker::lorem::en::Word;

fn random_unknown_role() -> String {
    loop {
        let word: String = Word().fake();
        let candidate = format!("{}_{}", word, (1000..9999).fake::<u32>());
        if Role::parse(&candidate).is_none() {
            return candidate;
        }
    }
}

#[test]
fn test_any_and_all_agree_with_single_checks() {
    let resolver = PermissionResolver::standard();

    for role in Role::ALL {
        for pair in Permission::ALL.windows(2) {
            let held: Vec<bool> = pair
                .iter()
                .map(|permission| resolver.has_permission(*role, *permission))
                .collect();

            assert_eq!(
                resolver.has_any_permission(*role, pair),
                held.iter().any(|granted| *granted)
            );
            assert_eq!(
                resolver.has_all_permissions(*role, pair),
                held.iter().all(|granted| *granted)
            );
        }
    }
}

#[test]
fn test_single_element_lists_match_has_permission() {
    let resolver = PermissionResolver::standard();

    for role in Role::ALL {
        for permission in Permission::ALL {
            let single = resolver.has_permission(*role, *permission);
            assert_eq!(resolver.has_any_permission(*role, [*permission]), single);
            assert_eq!(resolver.has_all_permissions(*role, [*permission]), single);
        }
    }
}

#[test]
fn test_random_unknown_roles_are_denied_everything() {
    let resolver = PermissionResolver::standard();

    for _ in 0..50 {
        let role = random_unknown_role();
        assert!(resolver.permissions_for(role.as_str()).is_empty());
        assert!(!resolver.has_any_permission(role.as_str(), Permission::ALL));
        assert!(!resolver.has_permission(role.as_str(), Permission::ViewDashboard));
        assert!(visible_navigation(&resolver, role.as_str()).is_empty());
        assert_eq!(
            DashboardVariant::for_role(role.as_str()),
            DashboardVariant::Restricted
        );
    }
}

#[test]
fn test_random_unknown_permissions_are_never_granted() {
    let resolver = PermissionResolver::standard();

    for _ in 0..50 {
        let word: String = Word().fake();
        let name = format!("{}_{}", word, (1000..9999).fake::<u32>());
        assert!(Permission::parse(&name).is_none());

        for role in Role::ALL {
            assert!(!resolver.has_permission(*role, name.as_str()));
            assert!(!resolver.has_all_permissions(*role, [name.as_str()]));
        }
    }
}

#[test]
fn test_names_are_case_sensitive() {
    let resolver = PermissionResolver::standard();

    assert!(resolver.has_permission("teacher", "mark_attendance"));
    assert!(!resolver.has_permission("TEACHER", "mark_attendance"));
    assert!(!resolver.has_permission("teacher", "Mark_Attendance"));
    assert!(!resolver.has_permission(" teacher", "mark_attendance"));
}

type Answers = (bool, bool, bool);

fn answers(resolver: &PermissionResolver, role: &str, permission: Permission) -> Answers {
    (
        resolver.has_permission(role, permission),
        resolver.has_any_permission(role, [permission, Permission::ManageRoles]),
        resolver.has_all_permissions(role, [permission, Permission::ViewDashboard]),
    )
}

#[test]
fn test_repeated_queries_return_identical_results() {
    let resolver = PermissionResolver::standard();
    let clone = resolver.clone();
    let rebuilt = PermissionResolver::new(Arc::new(PermissionRegistry::standard()));

    let mut roles: Vec<String> = Role::ALL.iter().map(|role| role.to_string()).collect();
    roles.push(random_unknown_role());

    for role in &roles {
        for permission in Permission::ALL {
            let first = answers(&resolver, role, *permission);
            for _ in 0..3 {
                assert_eq!(answers(&resolver, role, *permission), first);
            }
            assert_eq!(answers(&clone, role, *permission), first);
            assert_eq!(answers(&rebuilt, role, *permission), first);
        }
    }
}
