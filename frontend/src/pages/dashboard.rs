use leptos::*;

use crate::{
    components::{
        guard::{dashboard_for_role, HOME},
        layout::LoadingSpinner,
    },
    state::auth::use_auth,
};

/// `/dashboard`: forwards a signed-in user to the dashboard of their role.
#[component]
pub fn DashboardDispatcher() -> impl IntoView {
    let auth = use_auth();
    let target = create_memo(move |_| {
        auth.state.with(|state| {
            if state.loading {
                None
            } else {
                Some(state.role().map(|r| dashboard_for_role(&r)).unwrap_or(HOME))
            }
        })
    });
    create_effect(move |_| {
        if let Some(path) = target.get() {
            auth.api().navigator().redirect(path);
        }
    });
    view! { <LoadingSpinner /> }
}
