use crate::{
    components::{
        common::Button,
        forms::TextField,
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::dashboard::{
        utils::{EmployeeFormState, MessageState},
        view_model::{submit_employee_form, DashboardViewModel},
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn EmployeeForm(vm: DashboardViewModel) -> impl IntoView {
    let form = EmployeeFormState::default();
    let messages = MessageState::default();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let vm = vm.clone();
        spawn_local(async move {
            submit_employee_form(&vm, form, messages).await;
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            {move || messages.success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
            {move || messages.error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <TextField value=form.employee_id label="Employee ID" id="employee-id" placeholder="E001" />
                <TextField value=form.full_name label="Full Name" id="employee-full-name" placeholder="Jane Doe" />
                <TextField
                    value=form.email
                    label="Email"
                    id="employee-email"
                    input_type="email"
                    placeholder="jane@example.com"
                />
                <TextField value=form.department label="Department" id="employee-department" placeholder="Engineering" />
            </div>
            <div class="flex justify-end">
                <Button attr:type="submit" loading=form.submitting>
                    {move || if form.submitting.get() { "Adding..." } else { "Add Employee" }}
                </Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::dashboard::repository::DashboardRepository;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    #[test]
    fn employee_form_renders_all_fields() {
        let html = render_to_string(move || {
            let vm = DashboardViewModel::new(DashboardRepository::new_with_client(Rc::new(
                ApiClient::new_with_base_url("http://localhost:9"),
            )));
            view! { <EmployeeForm vm=vm /> }
        });
        for label in ["Employee ID", "Full Name", "Email", "Department", "Add Employee"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("type=\"submit\""));
    }
}
