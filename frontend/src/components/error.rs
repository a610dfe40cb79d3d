use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.to_string()).unwrap_or_default()}</div>
                {move || error.get().and_then(|e| {
                    e.status().map(|status| view! {
                        <div class="text-xs opacity-75">{format!("{} · HTTP {}", e.code(), status)}</div>
                    })
                })}
            </div>
        </Show>
    }
}
