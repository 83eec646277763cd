use leptos::*;

use crate::{
    api::TaskStats,
    components::layout::LoadingSpinner,
    state::resource::LoadState,
};

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] icon: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 flex items-center gap-4">
                {icon.map(|icon| view! {
                    <div class="w-10 h-10 flex items-center justify-center rounded-xl bg-surface-muted text-action-primary-bg">
                        <i class=format!("fas {}", icon)></i>
                    </div>
                })}
                <div>
                    <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                    <dd class="mt-1 text-2xl font-semibold text-fg">{move || value.get()}</dd>
                </div>
            </div>
        </div>
    }
}

/// (label, value, icon) rows shown for a stats snapshot.
pub fn stat_rows(stats: &TaskStats) -> Vec<(&'static str, String, &'static str)> {
    vec![
        ("Total tasks", stats.total.to_string(), "fa-list-check"),
        ("Pending", stats.pending.to_string(), "fa-hourglass-half"),
        ("Completed", stats.completed.to_string(), "fa-circle-check"),
        ("On hold", stats.on_hold.to_string(), "fa-pause"),
        ("Overdue", stats.over_due_count.to_string(), "fa-triangle-exclamation"),
        ("Completion", format!("{:.0}%", stats.completion_rate), "fa-chart-line"),
    ]
}

#[component]
pub fn TaskStatsCards(state: Signal<LoadState<TaskStats>>) -> impl IntoView {
    view! {
        {move || match state.get() {
            LoadState::Idle | LoadState::Loading => view! { <LoadingSpinner /> }.into_view(),
            LoadState::Failed(err) => view! {
                <p class="text-sm text-status-error-text">{format!("Statistics unavailable: {}", err.error)}</p>
            }.into_view(),
            LoadState::Ready(stats) => view! {
                <div class="grid grid-cols-2 md:grid-cols-3 xl:grid-cols-6 gap-4">
                    {stat_rows(&stats).into_iter().map(|(label, value, icon)| view! {
                        <StatCard label=label value=value icon=icon />
                    }).collect_view()}
                </div>
            }.into_view(),
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn ready_stats_render_each_card() {
        let html = render_to_string(|| {
            let stats = TaskStats {
                total: 8,
                completed: 6,
                completion_rate: 75.0,
                ..Default::default()
            };
            let state = create_rw_signal(LoadState::Ready(stats));
            view! { <TaskStatsCards state=state.into() /> }
        });
        assert!(html.contains("Total tasks"));
        assert!(html.contains("75%"));
    }

    #[test]
    fn failed_stats_show_reason() {
        let html = render_to_string(|| {
            let state = create_rw_signal(LoadState::<TaskStats>::Failed(ApiError::http(500, "down")));
            view! { <TaskStatsCards state=state.into() /> }
        });
        assert!(html.contains("Statistics unavailable: down"));
    }
}
