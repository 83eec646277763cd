use leptos::*;

use crate::api::{ApiClient, ApiError, SubscriptionPlan};
use crate::state::resource::{ListResource, Loader, RefreshPolicy, ResourceHook};
use crate::state::use_api;

pub struct Plans;

impl ListResource for Plans {
    type Item = SubscriptionPlan;
    type Query = ();
    const REFRESH: RefreshPolicy = RefreshPolicy::Manual;
    const NAME: &'static str = "subscription plan";

    async fn fetch(api: &ApiClient, _query: &()) -> Result<Vec<SubscriptionPlan>, ApiError> {
        api.list_subscription_plans().await
    }
}

/// Plan list plus the hosted checkout hand-off.
#[derive(Clone, Copy)]
pub struct BillingHook {
    pub plans: ResourceHook<Plans>,
    pub checkout: Loader<String>,
}

impl BillingHook {
    pub fn new(api: ApiClient) -> Self {
        Self {
            plans: ResourceHook::new(api),
            checkout: Loader::new(),
        }
    }

    /// Sends the browser to the checkout page for `plan_id`.
    pub async fn checkout(&self, plan_id: i64) -> Result<String, ApiError> {
        let api = self.plans.api();
        let url = {
            let api = api.clone();
            self.checkout
                .load(async move { api.create_checkout(plan_id).await })
                .await?
        };
        log::info!("Redirecting to checkout for plan {}", plan_id);
        api.navigator().redirect(&url);
        Ok(url)
    }

    /// Resolves a plan by its name (case-insensitive) among the loaded plans.
    pub async fn checkout_by_name(&self, name: &str) -> Result<String, ApiError> {
        let mut plans = self.plans.items();
        if plans.is_empty() {
            plans = self.plans.fetch(()).await?;
        }
        let plan = find_plan(&plans, name)
            .ok_or_else(|| ApiError::validation(format!("Unknown plan: {}", name)))?;
        self.checkout(plan.id).await
    }
}

pub fn find_plan<'a>(plans: &'a [SubscriptionPlan], name: &str) -> Option<&'a SubscriptionPlan> {
    let wanted = name.trim();
    plans
        .iter()
        .find(|plan| plan.name.eq_ignore_ascii_case(wanted) || plan.title().eq_ignore_ascii_case(wanted))
}

pub fn use_billing() -> BillingHook {
    BillingHook::new(use_api())
}
