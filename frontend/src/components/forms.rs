use crate::utils::time::{format_display_date, parse_date_input};
use leptos::*;
use wasm_bindgen::JsCast;

fn date_label(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "Select a date".to_string();
    }
    parse_date_input(raw)
        .map(format_display_date)
        .unwrap_or_else(|| raw.to_string())
}

#[component]
pub fn DatePicker(
    #[prop(into)] value: RwSignal<String>,
    label: Option<&'static str>,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_click = move |_| {
        if disabled.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = js_sys::Reflect::get(&input, &"showPicker".into()).map(|f| {
                if f.is_function() {
                    let _ = js_sys::Reflect::apply(
                        &f.unchecked_into::<js_sys::Function>(),
                        &input,
                        &js_sys::Array::new(),
                    );
                }
            });
            let _ = input.focus();
        }
    };

    view! {
        <div class="flex flex-col gap-1.5 w-full">
            {label.map(|l| view! { <label for=id.clone() class="text-sm font-bold text-fg-muted ml-1">{l}</label> })}
            <div
                class=move || format!(
                    "relative group cursor-pointer rounded-xl border-2 transition-all duration-200 bg-form-control-bg py-2.5 px-4 flex items-center justify-between shadow-sm border-form-control-border {}",
                    if disabled.get() { "opacity-50 cursor-not-allowed" } else { "hover:border-action-primary-border-hover" }
                )
                on:click=on_click
            >
                <div class="flex items-center gap-3">
                    <i class="far fa-calendar-alt text-base text-fg-muted"></i>
                    <span class=move || format!(
                        "text-sm font-semibold tracking-wide {}",
                        if value.get().is_empty() { "text-text-muted" } else { "text-fg" }
                    )>
                        {move || date_label(&value.get())}
                    </span>
                </div>
                <input
                    type="date"
                    id=id
                    node_ref=input_ref
                    class="absolute inset-0 w-full h-full opacity-0 pointer-events-none"
                    disabled=disabled
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[component]
pub fn TextField(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5">
            <label for=id.clone() class="text-sm font-bold text-fg-muted">{label}</label>
            <input
                id=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_label_formats_valid_dates_and_prompts_when_blank() {
        assert_eq!(date_label(""), "Select a date");
        assert_eq!(date_label("2025-03-14"), "Fri, Mar 14 2025");
        assert_eq!(date_label("not-a-date"), "not-a-date");
    }
}
