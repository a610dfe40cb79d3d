use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            form=vm.form
            error=vm.error
            pending=pending
            on_submit=handle_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_form() {
        let html = render_to_string(move || view! { <LoginPanel /> });
        assert!(html.contains("Admin Login"));
        assert!(html.contains("Username"));
        assert!(html.contains("Password"));
        assert!(html.contains("type=\"submit\""));
    }
}
