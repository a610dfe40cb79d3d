use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] icon: Option<View>,
) -> impl IntoView {
    view! {
        <div class="text-center py-10 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <div class="mx-auto h-10 w-10 text-fg-muted">
                {icon.unwrap_or_else(|| view! {
                    <i class="fas fa-inbox text-3xl" aria-hidden="true"></i>
                }.into_view())}
            </div>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(move || {
            view! {
                <EmptyState
                    title="No employees yet"
                    description="Add your first employee to get started."
                />
            }
        });
        assert!(html.contains("No employees yet"));
        assert!(html.contains("Add your first employee"));
    }
}
