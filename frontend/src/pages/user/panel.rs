use leptos::*;

use super::components::MyTaskList;
use crate::{
    components::{cards::TaskStatsCards, forms::TaskFilterBar},
    state::{
        analytics::{use_task_stats, StatsScope},
        auth::use_auth,
        tasks::use_my_tasks,
    },
    utils::filter::TaskFilter,
};

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let tasks = use_my_tasks();
    let stats = use_task_stats();
    let filter = create_rw_signal(TaskFilter::default());

    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            if let Some(user) = auth.user() {
                tasks.spawn_fetch(user.username.clone());
                stats.spawn_fetch(StatsScope::User(user.username));
            }
        }
    });

    let greeting = move || {
        auth.user()
            .map(|u| format!("Hello, {}", u.display_name()))
            .unwrap_or_else(|| "My tasks".into())
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-fg">{greeting}</h1>
                <p class="text-sm text-fg-muted">"Tasks assigned to you and their discussion."</p>
            </div>
            <TaskStatsCards state=stats.state() />
            <section class="space-y-4">
                <h2 class="text-lg font-semibold text-fg">"My tasks"</h2>
                <TaskFilterBar filter=filter />
                <MyTaskList hook=tasks filter=filter />
            </section>
        </div>
    }
}
