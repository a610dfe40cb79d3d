use crate::{
    api::EmployeeId,
    components::cards::StatCard,
    pages::dashboard::{
        repository::DashboardRepository,
        utils::present_days_label,
        view_model::{SummaryModel, SummaryState},
    },
    state::refresh::RefreshGeneration,
};
use leptos::*;

#[component]
pub fn SummarySection(
    repo: DashboardRepository,
    generation: RefreshGeneration,
    selected_employee: RwSignal<Option<EmployeeId>>,
) -> impl IntoView {
    let model = SummaryModel::new();
    let state = model.state;

    {
        let model = model.clone();
        let repo = repo.clone();
        generation.subscribe(move |_| {
            let model = model.clone();
            let repo = repo.clone();
            spawn_local(async move { model.load_counts(&repo).await });
        });
    }

    // Selected-employee card follows both the selection and every refresh.
    create_effect(move |_| {
        generation.track();
        let selected = selected_employee.get();
        let model = model.clone();
        let repo = repo.clone();
        spawn_local(async move { model.load_selected(&repo, selected).await });
    });

    view! { <SummaryCards state=state /> }
}

#[component]
pub fn SummaryCards(state: RwSignal<SummaryState>) -> impl IntoView {
    let total_employees =
        Signal::derive(move || state.with(|s| s.counts.map(|c| c.total_employees)));
    let total_rows =
        Signal::derive(move || state.with(|s| s.counts.map(|c| c.total_attendance_rows)));
    let present_label = Signal::derive(move || {
        state.with(|s| {
            present_days_label(s.selected.as_ref().and_then(|sel| sel.name.as_deref()))
        })
    });
    let present_days = Signal::derive(move || {
        state.with(|s| s.selected.as_ref().map(|sel| sel.present_days))
    });

    view! {
        <section class="space-y-2">
            <dl class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <StatCard label="Total Employees" value=total_employees icon="fa-users" />
                <StatCard
                    label="Total Attendance Records"
                    value=total_rows
                    icon="fa-clipboard-list"
                />
                <Show when=move || state.with(|s| s.selected.is_some())>
                    <StatCard label=present_label value=present_days icon="fa-user-check" />
                </Show>
            </dl>
            <Show when=move || state.with(|s| s.loading)>
                <p class="text-xs text-fg-muted">"Refreshing summary..."</p>
            </Show>
        </section>
    }
}
