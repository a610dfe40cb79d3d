use crate::pages::login::{components::messages::InlineErrorMessage, utils::LoginFormState};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let show_password = form.show_password;

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="w-full max-w-md bg-surface-elevated shadow-xl rounded-2xl p-8 border border-border">
                <h2 class="text-3xl font-bold text-center text-fg mb-2">{"HRMS Lite"}</h2>
                <p class="text-center text-fg-muted mb-6">{"Admin Login"}</p>

                <InlineErrorMessage error=error />

                <form class="space-y-5 mt-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="username" class="block text-sm font-medium text-fg-muted mb-1">
                            {"Username"}
                        </label>
                        <input
                            id="username"
                            name="username"
                            type="text"
                            autocomplete="username"
                            placeholder="Enter username"
                            class="w-full px-4 py-2 rounded-lg border border-form-control-border bg-form-control-bg focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                            prop:value=move || form.username.get()
                            on:input=move |ev| form.username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg-muted mb-1">
                            {"Password"}
                        </label>
                        <div class="relative">
                            <input
                                id="password"
                                name="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                placeholder="Enter password"
                                class="w-full px-4 py-2 pr-10 rounded-lg border border-form-control-border bg-form-control-bg focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                                prop:value=move || form.password.get()
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-3 flex items-center text-fg-muted hover:text-fg"
                                aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                                on:click=move |_| show_password.update(|shown| *shown = !*shown)
                            >
                                <i class=move || if show_password.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                            </button>
                        </div>
                    </div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full py-3 rounded-lg bg-action-primary-bg text-action-primary-text font-semibold hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
