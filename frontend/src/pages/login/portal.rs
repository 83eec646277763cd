use crate::api::{Role, UserSummary};
use crate::components::guard::{ADMIN_DASHBOARD, MANAGER_DASHBOARD, USER_DASHBOARD};

/// One login screen serves every role; a portal only differs in its copy,
/// the roles it admits and where it lands afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginPortalConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub audience: &'static str,
    pub roles: &'static [Role],
    pub redirect: &'static str,
}

pub const ADMIN_PORTAL: LoginPortalConfig = LoginPortalConfig {
    title: "Administrator sign in",
    subtitle: "Platform administration",
    audience: "administrators",
    roles: &[Role::Admin, Role::Owner],
    redirect: ADMIN_DASHBOARD,
};

pub const MANAGER_PORTAL: LoginPortalConfig = LoginPortalConfig {
    title: "Manager sign in",
    subtitle: "Manage your organization and team",
    audience: "managers",
    roles: &[Role::Manager],
    redirect: MANAGER_DASHBOARD,
};

pub const USER_PORTAL: LoginPortalConfig = LoginPortalConfig {
    title: "Team member sign in",
    subtitle: "Your tasks and comments",
    audience: "team members",
    roles: &[Role::User],
    redirect: USER_DASHBOARD,
};

impl LoginPortalConfig {
    pub fn admits(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Where a signed-in user goes next, or the message shown when the
    /// account does not belong to this portal.
    pub fn outcome(&self, user: &UserSummary) -> Result<&'static str, String> {
        if self.admits(&user.role) {
            Ok(self.redirect)
        } else {
            Err(format!(
                "Access denied. This portal is for {} only.",
                self.audience
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> UserSummary {
        UserSummary {
            username: "u".into(),
            name: String::new(),
            surname: String::new(),
            role,
        }
    }

    #[test]
    fn portal_admits_only_its_roles() {
        assert_eq!(ADMIN_PORTAL.outcome(&user(Role::Owner)), Ok(ADMIN_DASHBOARD));
        assert_eq!(MANAGER_PORTAL.outcome(&user(Role::Manager)), Ok(MANAGER_DASHBOARD));
        assert_eq!(USER_PORTAL.outcome(&user(Role::User)), Ok(USER_DASHBOARD));
        assert_eq!(
            USER_PORTAL.outcome(&user(Role::Manager)).unwrap_err(),
            "Access denied. This portal is for team members only."
        );
        assert!(ADMIN_PORTAL.outcome(&user(Role::Other("AUDITOR".into()))).is_err());
    }
}
