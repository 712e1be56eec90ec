use edugate_core::{CheckMode, DashboardVariant, Permission, PermissionResolver, Role};

/// One line per role: wire name, label and number of grants.
pub fn roles(resolver: &PermissionResolver) -> Vec<String> {
    resolver
        .registry()
        .roles()
        .map(|(role, granted)| {
            format!(
                "{:<12} {:<16} {} permissions",
                role.as_str(),
                role.label(),
                granted.len()
            )
        })
        .collect()
}

/// The permissions `role` holds, one per line, in declaration order. A role
/// that is not recognized yields a single explanatory line.
pub fn permissions(resolver: &PermissionResolver, role: &str) -> Vec<String> {
    if Role::parse(role).is_none() {
        return vec![format!("{}: unrecognized role, no permissions granted", role)];
    }

    let mut granted: Vec<Permission> = resolver.permissions_for(role).iter().copied().collect();
    granted.sort();
    granted
        .into_iter()
        .map(|permission| format!("{:<14} {}", permission.resource(), permission))
        .collect()
}

pub fn check(
    resolver: &PermissionResolver,
    role: &str,
    mode: CheckMode,
    permissions: &[String],
) -> &'static str {
    if resolver.check(role, mode, permissions) {
        "granted"
    } else {
        "denied"
    }
}

pub fn dashboard(role: &str) -> String {
    let variant = DashboardVariant::for_role(role);
    format!("{} ({})", variant.as_str(), variant.title())
}
