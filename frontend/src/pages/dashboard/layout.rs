use leptos::*;

#[component]
pub fn DashboardSection(
    #[prop(into)] title: String,
    #[prop(into)] icon: String,
    #[prop(optional)] actions: Option<View>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between gap-3">
                <h2 class="text-lg font-semibold text-fg flex items-center gap-2">
                    <i class=format!("fas {} text-action-primary-bg", icon)></i>
                    {title}
                </h2>
                {actions}
            </div>
            {children()}
        </section>
    }
}

/// Show/Hide button for a collapsible form.
#[component]
pub fn FormToggle(
    shown: RwSignal<bool>,
    #[prop(into)] show_label: String,
) -> impl IntoView {
    view! {
        <button
            type="button"
            aria-expanded=move || shown.get().to_string()
            class="inline-flex items-center rounded-md px-3 py-1.5 text-sm font-semibold bg-surface-muted text-fg hover:bg-action-ghost-bg-hover"
            on:click=move |_| shown.update(|open| *open = !*open)
        >
            {move || if shown.get() { "Hide Form".to_string() } else { show_label.clone() }}
        </button>
    }
}
