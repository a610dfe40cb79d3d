use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text text-sm px-4 py-2 rounded-lg" role="alert">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
