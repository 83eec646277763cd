use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
};
use leptos::*;

pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const MANAGER_DASHBOARD: &str = "/manager/dashboard";
pub const USER_DASHBOARD: &str = "/user/dashboard";
pub const HOME: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    Render,
    Redirect(&'static str),
}

/// Landing dashboard for a role; unknown roles go back to the public root.
pub fn dashboard_for_role(role: &Role) -> &'static str {
    match role {
        Role::Admin | Role::Owner => ADMIN_DASHBOARD,
        Role::Manager => MANAGER_DASHBOARD,
        Role::User => USER_DASHBOARD,
        Role::Other(_) => HOME,
    }
}

/// An empty `allowed` list admits any authenticated user.
pub fn guard_decision(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    if !state.is_authenticated() {
        return GuardDecision::Redirect(HOME);
    }
    if allowed.is_empty() {
        return GuardDecision::Render;
    }
    match state.role() {
        Some(role) if allowed.contains(&role) => GuardDecision::Render,
        Some(role) => GuardDecision::Redirect(dashboard_for_role(&role)),
        None => GuardDecision::Redirect(HOME),
    }
}

#[component]
pub fn RequireRole(#[prop(optional)] allowed: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let allowed = store_value(allowed);
    let decision =
        create_memo(move |_| allowed.with_value(|roles| guard_decision(&auth.state.get(), roles)));
    create_effect(move |_| {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::debug!("Route guard redirecting to {}", target);
            auth.api().navigator().redirect(target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UserSummary;

    fn state_for(role: Option<Role>) -> AuthState {
        match role {
            Some(role) => AuthState::signed_in(
                UserSummary {
                    username: "u".into(),
                    name: String::new(),
                    surname: String::new(),
                    role,
                },
                "token",
            ),
            None => AuthState::default(),
        }
    }

    #[test]
    fn loading_defers_every_decision() {
        let state = AuthState {
            loading: true,
            ..AuthState::default()
        };
        assert_eq!(guard_decision(&state, &[]), GuardDecision::Loading);
        assert_eq!(guard_decision(&state, &[Role::Admin]), GuardDecision::Loading);
    }

    #[test]
    fn unauthenticated_redirects_home() {
        let state = state_for(None);
        assert_eq!(guard_decision(&state, &[]), GuardDecision::Redirect(HOME));
        assert_eq!(
            guard_decision(&state, &[Role::Manager]),
            GuardDecision::Redirect(HOME)
        );
    }

    #[test]
    fn empty_role_set_admits_any_authenticated_role() {
        for role in [
            Role::Admin,
            Role::Owner,
            Role::Manager,
            Role::User,
            Role::Other("AUDITOR".into()),
        ] {
            assert_eq!(guard_decision(&state_for(Some(role)), &[]), GuardDecision::Render);
        }
    }

    #[test]
    fn outside_role_redirects_to_its_own_dashboard() {
        let allowed = [Role::Manager];
        assert_eq!(
            guard_decision(&state_for(Some(Role::Admin)), &allowed),
            GuardDecision::Redirect(ADMIN_DASHBOARD)
        );
        assert_eq!(
            guard_decision(&state_for(Some(Role::Owner)), &allowed),
            GuardDecision::Redirect(ADMIN_DASHBOARD)
        );
        assert_eq!(
            guard_decision(&state_for(Some(Role::User)), &allowed),
            GuardDecision::Redirect(USER_DASHBOARD)
        );
        assert_eq!(
            guard_decision(&state_for(Some(Role::Other("AUDITOR".into()))), &allowed),
            GuardDecision::Redirect(HOME)
        );
        assert_eq!(
            guard_decision(&state_for(Some(Role::Manager)), &[Role::User]),
            GuardDecision::Redirect(MANAGER_DASHBOARD)
        );
    }

    #[test]
    fn redirect_target_is_never_the_guarded_route() {
        let targets = [ADMIN_DASHBOARD, MANAGER_DASHBOARD, USER_DASHBOARD, HOME];
        let allowed = [Role::Admin, Role::Owner];
        for role in [Role::Manager, Role::User, Role::Other("X".into())] {
            match guard_decision(&state_for(Some(role)), &allowed) {
                GuardDecision::Redirect(target) => {
                    assert!(targets.contains(&target));
                    assert_ne!(target, ADMIN_DASHBOARD);
                }
                other => panic!("expected redirect, got {:?}", other),
            }
        }
    }

    #[test]
    fn allowed_role_renders() {
        assert_eq!(
            guard_decision(&state_for(Some(Role::Owner)), &[Role::Admin, Role::Owner]),
            GuardDecision::Render
        );
    }
}
