use crate::api::ApiError;
use leptos::*;

/// Field messages the backend attaches to a validation failure, if any.
pub fn detail_messages(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|d| d.get("errors"))
        .and_then(|v| v.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| {
            let details = detail_messages(&e);
            let status = e.status.map(|s| format!("HTTP {}", s));
            view! {
                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                    <div class="font-bold">{e.error.clone()}</div>
                    {(!details.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                        </ul>
                    })}
                    {status.map(|s| view! { <div class="text-xs opacity-75">{s}</div> })}
                </div>
            }
        })}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_lists_backend_details() {
        let html = render_to_string(|| {
            let mut error = ApiError::http(400, "Validation failed");
            error.details = Some(json!({ "errors": ["Title is required", "Due date is invalid"] }));
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Title is required"));
        assert!(html.contains("HTTP 400"));
    }

    #[test]
    fn client_side_error_has_no_status_line() {
        let html = render_to_string(|| {
            let signal = create_rw_signal(Some(ApiError::validation("Comment cannot be empty")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Comment cannot be empty"));
        assert!(!html.contains("HTTP"));
    }
}
