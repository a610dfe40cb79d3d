use crate::{
    api::Employee,
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::LoadingSpinner,
        virtual_list::{should_virtualize, VirtualList},
    },
    pages::dashboard::{utils::DeleteConfirmation, view_model::DashboardViewModel},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMode {
    Loading,
    Failed,
    Empty,
    Plain,
    Windowed,
}

fn list_mode(loading: bool, failed: bool, len: usize) -> ListMode {
    match len {
        _ if failed && !loading => ListMode::Failed,
        0 if loading => ListMode::Loading,
        0 => ListMode::Empty,
        n if should_virtualize(n) => ListMode::Windowed,
        _ => ListMode::Plain,
    }
}

fn delete_prompt(target: Option<&Employee>) -> String {
    match target {
        Some(employee) => format!(
            "Are you sure you want to delete {}? This action cannot be undone.",
            employee.full_name
        ),
        None => String::new(),
    }
}

#[component]
pub fn EmployeeList(vm: DashboardViewModel) -> impl IntoView {
    let registry = vm.registry;
    let confirmation = DeleteConfirmation::default();
    let deleting = create_rw_signal(false);

    let employees = Signal::derive(move || registry.with(|s| s.employees.clone()));
    let mode = create_memo(move |_| {
        registry.with(|s| list_mode(s.loading, s.error.is_some(), s.employees.len()))
    });
    let delete_error = vm.delete_error;

    let on_delete = Callback::new(move |employee: Employee| confirmation.request(employee));
    let on_cancel = Callback::new(move |_| confirmation.cancel());
    let on_confirm = Callback::new(move |_| {
        let vm = vm.clone();
        deleting.set(true);
        spawn_local(async move {
            vm.confirm_delete(confirmation).await;
            deleting.set(false);
        });
    });

    view! {
        <div class="space-y-3">
            <InlineErrorMessage error=Signal::derive(move || delete_error.get()) />
            {move || match mode.get() {
                ListMode::Loading => view! { <LoadingSpinner /> }.into_view(),
                ListMode::Failed => view! {
                    <p class="text-sm text-status-error-text py-4 text-center">
                        "Employees could not be loaded."
                    </p>
                }.into_view(),
                ListMode::Empty => view! {
                    <EmptyState
                        title="No employees yet."
                        description="Add your first employee to get started."
                    />
                }.into_view(),
                ListMode::Windowed => view! {
                    <VirtualList
                        items=employees
                        key=|employee: &Employee| employee.id
                        row=move |employee| view! { <EmployeeRow employee=employee on_delete=on_delete /> }
                    />
                }.into_view(),
                ListMode::Plain => view! {
                    <ul class="divide-y divide-border">
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id
                            children=move |employee| view! { <EmployeeRow employee=employee on_delete=on_delete /> }
                        />
                    </ul>
                }.into_view(),
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || confirmation.is_open())
                title="Delete employee"
                message=Signal::derive(move || delete_prompt(confirmation.target().as_ref()))
                on_confirm=on_confirm
                on_cancel=on_cancel
                confirm_label="Delete"
                confirm_disabled=Signal::derive(move || deleting.get())
                destructive=true
            />
        </div>
    }
}

#[component]
fn EmployeeRow(employee: Employee, on_delete: Callback<Employee>) -> impl IntoView {
    let initial = employee.initial();
    let label = format!("Delete {}", employee.full_name);
    let target = employee.clone();

    view! {
        <li class="flex items-center justify-between gap-4 py-4 px-2">
            <div class="flex items-center gap-3 min-w-0">
                <div class="w-10 h-10 rounded-full bg-primary-subtle text-action-primary-bg flex items-center justify-center font-semibold">
                    {initial}
                </div>
                <div class="min-w-0">
                    <p class="text-sm font-semibold text-fg truncate">{employee.full_name}</p>
                    <p class="text-xs text-fg-muted truncate">
                        {format!("{} · {}", employee.employee_id, employee.department)}
                    </p>
                    <p class="text-xs text-fg-muted truncate">{employee.email}</p>
                </div>
            </div>
            <button
                type="button"
                aria-label=label
                class="text-action-danger-bg hover:text-action-danger-bg-hover px-3 py-2 rounded-md text-sm"
                on:click=move |_| on_delete.call(target.clone())
            >
                <i class="fas fa-trash"></i>
            </button>
        </li>
    }
}
