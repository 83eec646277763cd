use reqwest::Method;

use super::client::ApiClient;
use super::types::*;

impl ApiClient {
    pub async fn list_subscription_plans(&self) -> Result<Vec<SubscriptionPlan>, ApiError> {
        self.get_json("/billing/plans").await
    }

    /// Starts a hosted checkout and returns the URL to send the browser to.
    pub async fn create_checkout(&self, plan_id: i64) -> Result<String, ApiError> {
        let body = self
            .send_text(Method::POST, "/billing/checkout", &CheckoutRequest { plan_id })
            .await?;
        checkout_url_from_body(&body)
    }
}

pub(crate) fn checkout_url_from_body(body: &str) -> Result<String, ApiError> {
    let url = match serde_json::from_str::<CheckoutResponse>(body) {
        Ok(parsed) => parsed.into_url(),
        Err(_) => body.trim().to_string(),
    };
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(ApiError::decode_failed("Checkout did not return a redirect URL"))
    }
}
