use leptos::*;

use crate::{
    api::SubscriptionPlan,
    components::{common::Button, error::InlineErrorMessage, layout::LoadingSpinner},
    state::billing::BillingHook,
    utils::format::format_price,
};

fn plan_limits(plan: &SubscriptionPlan) -> String {
    let limit = |value: Option<i64>, noun: &str| match value {
        Some(n) => format!("{} {}", n, noun),
        None => format!("unlimited {}", noun),
    };
    format!("{}, {}", limit(plan.max_users, "users"), limit(plan.max_clients, "clients"))
}

#[component]
pub fn BillingSection(billing: BillingHook, #[prop(optional, into)] current_plan: MaybeSignal<Option<String>>) -> impl IntoView {
    let plans = billing.plans.state();
    let checkout = billing.checkout.state;
    let choose = create_action(move |plan_id: &i64| {
        let plan_id = *plan_id;
        async move { billing.checkout(plan_id).await }
    });
    let checkout_error = Signal::derive(move || checkout.with(|s| s.error().cloned()));

    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Subscription"</h2>
            {move || current_plan.get().map(|name| view! {
                <p class="text-sm text-fg-muted">"Current plan: "<span class="font-medium text-fg">{name}</span></p>
            })}
            {move || {
                let current = plans.get();
                if current.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let active: Vec<SubscriptionPlan> = current.items().into_iter().filter(|p| p.is_active).collect();
                if active.is_empty() {
                    return view! { <p class="text-sm text-fg-muted">"No plans available right now."</p> }.into_view();
                }
                view! {
                    <div class="grid gap-4 md:grid-cols-3">
                        {active.into_iter().map(|plan| {
                            let id = plan.id;
                            view! {
                                <div class="border border-border rounded-lg p-4 space-y-2">
                                    <h3 class="font-semibold text-fg">{plan.title()}</h3>
                                    <p class="text-2xl font-bold text-fg">{format_price(plan.price_per_month)}<span class="text-sm text-fg-muted">" / month"</span></p>
                                    <p class="text-sm text-fg-muted">{plan_limits(&plan)}</p>
                                    <Button
                                        class="w-full"
                                        loading=choose.pending()
                                        on_click=Callback::new(move |_| choose.dispatch(id))
                                    >
                                        "Choose plan"
                                    </Button>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
            <InlineErrorMessage error=checkout_error />
        </section>
    }
}
