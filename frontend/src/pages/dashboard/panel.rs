use crate::{
    components::layout::{ErrorMessage, Layout},
    pages::dashboard::{
        components::{
            AttendanceForm, AttendanceQueryPanel, EmployeeForm, EmployeeList, SummarySection,
        },
        layout::{DashboardSection, FormToggle},
        view_model::{use_dashboard_view_model, DashboardViewModel},
    },
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    view! { <DashboardContent vm=vm /> }
}

#[component]
pub fn DashboardContent(vm: DashboardViewModel) -> impl IntoView {
    let registry = vm.registry;
    let show_employee_form = vm.show_employee_form;
    let show_attendance_form = vm.show_attendance_form;
    let employee_form_vm = vm.clone();
    let attendance_form_vm = vm.clone();
    let list_vm = vm.clone();
    let query_vm = vm.clone();

    view! {
        <Layout>
            {move || registry.with(|s| s.error.clone()).map(|message| view! { <ErrorMessage message=message /> })}
            <SummarySection
                repo=vm.repo.clone()
                generation=vm.generation
                selected_employee=vm.selected_employee
            />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <DashboardSection
                    title="Employees"
                    icon="fa-users"
                    actions=view! { <FormToggle shown=show_employee_form show_label="Add Employee" /> }.into_view()
                >
                    <Show when=move || show_employee_form.get()>
                        <EmployeeForm vm=employee_form_vm.clone() />
                    </Show>
                    <EmployeeList vm=list_vm />
                </DashboardSection>
                <DashboardSection
                    title="Attendance"
                    icon="fa-calendar-check"
                    actions=view! { <FormToggle shown=show_attendance_form show_label="Mark Attendance" /> }.into_view()
                >
                    <Show when=move || show_attendance_form.get()>
                        <AttendanceForm vm=attendance_form_vm.clone() />
                    </Show>
                    <AttendanceQueryPanel vm=query_vm />
                </DashboardSection>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::dashboard::repository::DashboardRepository;
    use crate::state::{auth::AuthProvider, session::SessionStore};
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    fn view_model() -> DashboardViewModel {
        DashboardViewModel::new(DashboardRepository::new_with_client(Rc::new(
            ApiClient::new_with_base_url("http://localhost:9"),
        )))
    }

    #[test]
    fn dashboard_renders_sections_with_forms_hidden() {
        let html = render_to_string(move || {
            let client = ApiClient::with_session(SessionStore::with_token("tok1"));
            view! { <AuthProvider client=client><DashboardContent vm=view_model() /></AuthProvider> }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("Employees"));
        assert!(html.contains("Attendance"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("Mark Attendance"));
        assert!(html.contains("All employees"));
        assert!(!html.contains("Full Name"));
    }

    #[test]
    fn load_failure_banner_is_page_level() {
        let html = render_to_string(move || {
            let vm = view_model();
            vm.registry
                .update(|s| s.error = Some("Failed to load employees.".into()));
            vm.show_employee_form.set(true);
            view! { <DashboardContent vm=vm /> }
        });
        assert!(html.contains("Failed to load employees."));
        assert!(html.contains("Full Name"));
        assert!(html.contains("Hide Form"));
    }
}
