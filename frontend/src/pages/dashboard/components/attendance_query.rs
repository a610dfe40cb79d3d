use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee, EmployeeId},
    components::{
        common::{Button, ButtonVariant},
        empty_state::EmptyState,
        forms::DatePicker,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::dashboard::{
        utils::resolve_employee_name,
        view_model::{AttendanceQueryModel, DashboardViewModel, QueryState},
    },
    utils::time::format_display_date,
};
use leptos::*;

fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "bg-status-success-bg text-status-success-text",
        AttendanceStatus::Absent => "bg-status-error-bg text-status-error-text",
    }
}

fn employee_label(employees: &[Employee], id: EmployeeId) -> String {
    resolve_employee_name(employees, id).unwrap_or_else(|| format!("#{}", id))
}

#[component]
pub fn AttendanceQueryPanel(vm: DashboardViewModel) -> impl IntoView {
    let model = AttendanceQueryModel::new();
    let filter = model.filter;
    let state = model.state;
    let registry = vm.registry;
    let selected_employee = vm.selected_employee;
    let employees = Signal::derive(move || registry.with(|s| s.employees.clone()));

    {
        let model = model.clone();
        let repo = vm.repo.clone();
        vm.generation.subscribe(move |_| {
            let model = model.clone();
            let repo = repo.clone();
            spawn_local(async move { model.on_refresh(&repo).await });
        });
    }

    let on_employee_change = {
        let model = model.clone();
        let repo = vm.repo.clone();
        move |event: ev::Event| {
            let raw = event_target_value(&event);
            let model = model.clone();
            let repo = repo.clone();
            spawn_local(async move {
                model.select_employee(&repo, raw, selected_employee).await;
            });
        }
    };

    let on_filter = {
        let repo = vm.repo.clone();
        move |_: ev::MouseEvent| {
            let model = model.clone();
            let repo = repo.clone();
            spawn_local(async move { model.apply_filter(&repo).await });
        }
    };

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 gap-4 md:grid-cols-4 md:items-end">
                <div class="flex flex-col gap-1.5">
                    <label for="query-employee" class="text-sm font-bold text-fg-muted">"Employee"</label>
                    <select
                        id="query-employee"
                        class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || filter.employee.get()
                        on:change=on_employee_change
                    >
                        <option value="">"All employees"</option>
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id
                            children=move |employee: Employee| view! {
                                <option value=employee.id.to_string()>{employee.full_name}</option>
                            }
                        />
                    </select>
                </div>
                <DatePicker value=filter.start_date label=Some("From") id="query-start-date" />
                <DatePicker value=filter.end_date label=Some("To") id="query-end-date" />
                <Button
                    variant=ButtonVariant::Secondary
                    on:click=on_filter
                    loading=Signal::derive(move || state.with(|s| s.loading))
                >
                    <i class="fas fa-filter mr-2"></i>
                    "Filter"
                </Button>
            </div>
            <AttendanceRecords state=state employees=employees />
        </div>
    }
}

#[component]
pub fn AttendanceRecords(
    state: RwSignal<QueryState>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
) -> impl IntoView {
    view! {
        {move || {
            let QueryState { records, loading, error } = state.get();
            if loading && records.is_empty() {
                view! { <LoadingSpinner /> }.into_view()
            } else if let Some(message) = error {
                view! { <ErrorMessage message=message /> }.into_view()
            } else if records.is_empty() {
                view! {
                    <EmptyState
                        title="No attendance records found"
                        description="Pick an employee or a date range, then press Filter."
                    />
                }.into_view()
            } else {
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-2 text-left font-semibold text-fg-muted">"Date"</th>
                                <th class="px-4 py-2 text-left font-semibold text-fg-muted">"Employee"</th>
                                <th class="px-4 py-2 text-left font-semibold text-fg-muted">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {records
                                .into_iter()
                                .map(|record: AttendanceRecord| {
                                    let name = employees.with(|all| employee_label(all, record.employee_id));
                                    view! {
                                        <tr>
                                            <td class="px-4 py-2 text-fg">{format_display_date(record.date)}</td>
                                            <td class="px-4 py-2 text-fg">{name}</td>
                                            <td class="px-4 py-2">
                                                <span class=format!(
                                                    "inline-flex rounded-full px-2 py-0.5 text-xs font-semibold {}",
                                                    status_badge_class(record.status)
                                                )>
                                                    {record.status.as_str()}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }
        }}
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::employee, ssr::render_to_string};
    use chrono::NaiveDate;

    #[test]
    fn idle_query_shows_prompt() {
        let html = render_to_string(move || {
            let state = create_rw_signal(QueryState::default());
            view! { <AttendanceRecords state=state employees=Signal::derive(Vec::new) /> }
        });
        assert!(html.contains("No attendance records found"));
    }

    #[test]
    fn records_render_with_names_and_status() {
        let html = render_to_string(move || {
            let state = create_rw_signal(QueryState {
                records: vec![AttendanceRecord {
                    id: 1,
                    employee_id: 1,
                    date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
                    status: AttendanceStatus::Absent,
                }],
                loading: false,
                error: None,
            });
            let employees = Signal::derive(|| vec![employee(1, "E001", "Jane Doe")]);
            view! { <AttendanceRecords state=state employees=employees /> }
        });
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Absent"));
        assert!(html.contains("bg-status-error-bg"));
    }

    #[test]
    fn query_error_is_shown_inline() {
        let html = render_to_string(move || {
            let state = create_rw_signal(QueryState {
                error: Some("Failed to load attendance records.".into()),
                ..QueryState::default()
            });
            view! { <AttendanceRecords state=state employees=Signal::derive(Vec::new) /> }
        });
        assert!(html.contains("Failed to load attendance records."));
    }
}
