use leptos::*;

/// Placeholder shown while a counter is unknown.
pub const MISSING_VALUE: &str = "—";

fn display_count(value: Option<u64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

#[component]
pub fn StatCard(
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(into)] value: Signal<Option<u64>>,
    #[prop(optional, into)] icon: String,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 flex items-center gap-4">
                <div class="w-10 h-10 rounded-lg flex items-center justify-center bg-primary-subtle text-action-primary-bg">
                    <i class=format!("fas {}", if icon.is_empty() { "fa-chart-bar" } else { icon.as_str() })></i>
                </div>
                <div>
                    <dt class="text-sm font-medium text-fg-muted">{move || label.get()}</dt>
                    <dd class="mt-1 text-2xl font-semibold text-fg">
                        {move || display_count(value.get())}
                    </dd>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counts_render_placeholder() {
        assert_eq!(display_count(None), "—");
        assert_eq!(display_count(Some(0)), "0");
        assert_eq!(display_count(Some(42)), "42");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_label_and_value() {
        let html = render_to_string(move || {
            view! { <StatCard label="Total Employees" value=Signal::derive(|| Some(7)) /> }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("7"));
    }
}
