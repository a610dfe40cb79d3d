use crate::{
    api::{AttendanceStatus, Employee},
    components::{
        common::Button,
        forms::DatePicker,
        layout::{ErrorMessage, SuccessMessage},
    },
    pages::dashboard::{
        utils::{AttendanceFormState, MessageState},
        view_model::{submit_attendance_form, DashboardViewModel},
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AttendanceForm(vm: DashboardViewModel) -> impl IntoView {
    let form = AttendanceFormState::default();
    let messages = MessageState::default();
    let registry = vm.registry;
    let employees = Signal::derive(move || registry.with(|s| s.employees.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let vm = vm.clone();
        spawn_local(async move {
            submit_attendance_form(&vm, form, messages).await;
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            {move || messages.success.get().map(|msg| view! { <SuccessMessage message=msg /> })}
            {move || messages.error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                <div class="flex flex-col gap-1.5">
                    <label for="attendance-employee" class="text-sm font-bold text-fg-muted">"Employee"</label>
                    <select
                        id="attendance-employee"
                        class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg"
                        prop:value=move || form.employee_id.get()
                        on:change=move |ev| form.employee_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select employee"</option>
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id
                            children=move |employee: Employee| view! {
                                <option value=employee.id.to_string()>
                                    {format!("{} ({})", employee.full_name, employee.employee_id)}
                                </option>
                            }
                        />
                    </select>
                </div>
                <DatePicker value=form.date label=Some("Date") id="attendance-date" />
            </div>
            <fieldset class="flex items-center gap-6">
                <legend class="text-sm font-bold text-fg-muted mb-2">"Status"</legend>
                {AttendanceStatus::ALL
                    .into_iter()
                    .map(|status| view! {
                        <label class="inline-flex items-center gap-2 text-sm text-fg">
                            <input
                                type="radio"
                                name="attendance-status"
                                value=status.as_str()
                                prop:checked=move || form.status.get() == status
                                on:change=move |_| form.status.set(status)
                            />
                            {status.as_str()}
                        </label>
                    })
                    .collect_view()}
            </fieldset>
            <div class="flex justify-end">
                <Button attr:type="submit" loading=form.submitting>
                    {move || if form.submitting.get() { "Marking..." } else { "Mark Attendance" }}
                </Button>
            </div>
        </form>
    }
}
