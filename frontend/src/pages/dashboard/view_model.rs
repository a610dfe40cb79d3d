use super::{
    repository::{AttendanceQuery, DashboardRepository},
    utils::{
        resolve_employee_name, AttendanceFilter, AttendanceFormState, DeleteConfirmation,
        EmployeeFormState, LatestRequest, MessageState, ATTENDANCE_ERROR_CLEAR_MS,
        SUCCESS_CLEAR_MS,
    },
};
use crate::api::{ApiError, AttendanceRecord, DashboardCounts, Employee, EmployeeId};
use crate::state::{auth::use_api_client, refresh::RefreshGeneration};
use leptos::*;
use log::{debug, error, info, warn};
use std::rc::Rc;

pub const LOAD_EMPLOYEES_FAILED: &str = "Failed to load employees.";
pub const LOAD_ATTENDANCE_FAILED: &str = "Failed to load attendance records.";
pub const EMPLOYEE_CREATED: &str = "Employee added successfully!";
pub const CREATE_EMPLOYEE_FAILED: &str = "Failed to add employee.";
pub const ATTENDANCE_MARKED: &str = "Attendance marked successfully!";
pub const MARK_ATTENDANCE_FAILED: &str = "Failed to mark attendance.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub records: Vec<AttendanceRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSummary {
    pub employee_id: EmployeeId,
    pub name: Option<String>,
    pub present_days: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryState {
    pub counts: Option<DashboardCounts>,
    pub loading: bool,
    pub selected: Option<SelectedSummary>,
}

/// Page-level state shared by every dashboard panel.
#[derive(Clone)]
pub struct DashboardViewModel {
    pub repo: DashboardRepository,
    pub registry: RwSignal<RegistryState>,
    pub generation: RefreshGeneration,
    pub selected_employee: RwSignal<Option<EmployeeId>>,
    pub show_employee_form: RwSignal<bool>,
    pub show_attendance_form: RwSignal<bool>,
    pub delete_error: RwSignal<Option<ApiError>>,
}

impl DashboardViewModel {
    pub fn new(repo: DashboardRepository) -> Self {
        Self {
            repo,
            registry: create_rw_signal(RegistryState::default()),
            generation: RefreshGeneration::new(),
            selected_employee: create_rw_signal(None),
            show_employee_form: create_rw_signal(false),
            show_attendance_form: create_rw_signal(false),
            delete_error: create_rw_signal(None),
        }
    }

    /// Replaces the employee list. On failure the list is emptied and the
    /// page-level banner is set until the next successful load.
    pub async fn load_employees(&self) {
        self.registry.update(|state| {
            state.loading = true;
            state.error = None;
        });
        match self.repo.list_employees().await {
            Ok(employees) => {
                debug!("loaded {} employees", employees.len());
                self.registry.update(|state| {
                    state.employees = employees;
                    state.loading = false;
                });
            }
            Err(err) => {
                error!("failed to load employees: {}", err);
                self.registry.update(|state| {
                    state.employees.clear();
                    state.error = Some(LOAD_EMPLOYEES_FAILED.into());
                    state.loading = false;
                });
            }
        }
    }

    /// Reload the list, then tell the dependent panels to re-fetch.
    async fn refresh_after_mutation(&self) {
        self.load_employees().await;
        self.generation.bump();
    }

    pub async fn on_employee_created(&self) {
        self.refresh_after_mutation().await;
    }

    pub async fn on_employee_deleted(&self) {
        self.refresh_after_mutation().await;
    }

    pub async fn on_attendance_marked(&self) {
        self.refresh_after_mutation().await;
    }

    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError> {
        self.delete_error.set(None);
        if let Err(err) = self.repo.delete_employee(id).await {
            warn!("failed to delete employee {}: {}", id, err);
            self.delete_error.set(Some(err.clone()));
            return Err(err);
        }
        info!("employee {} deleted", id);
        self.on_employee_deleted().await;
        Ok(())
    }

    /// Deletes whoever the dialog holds. A cancelled dialog holds nobody.
    pub async fn confirm_delete(&self, confirmation: DeleteConfirmation) {
        if let Some(employee) = confirmation.take() {
            let _ = self.delete_employee(employee.id).await;
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let repo = DashboardRepository::new_with_client(Rc::new(use_api_client()));
    let vm = DashboardViewModel::new(repo);

    let initial = vm.clone();
    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            let vm = initial.clone();
            spawn_local(async move { vm.load_employees().await });
        }
    });

    vm
}

/// Filter inputs and results of the attendance panel.
#[derive(Clone)]
pub struct AttendanceQueryModel {
    pub filter: AttendanceFilter,
    pub state: RwSignal<QueryState>,
    latest: LatestRequest,
}

impl AttendanceQueryModel {
    pub fn new() -> Self {
        Self {
            filter: AttendanceFilter::default(),
            state: create_rw_signal(QueryState::default()),
            latest: LatestRequest::default(),
        }
    }

    /// "Filter" button: honours the employee and the date inputs.
    pub async fn apply_filter(&self, repo: &DashboardRepository) {
        let query = AttendanceQuery::explicit(self.filter.selected_employee(), self.filter.range());
        self.run(repo, query).await;
    }

    /// Employee dropdown change. Publishes the selection and queries with
    /// the current date inputs.
    pub async fn select_employee(
        &self,
        repo: &DashboardRepository,
        raw: String,
        selected: RwSignal<Option<EmployeeId>>,
    ) {
        self.filter.employee.set(raw);
        let employee = self.filter.selected_employee();
        selected.set(employee);
        let query = AttendanceQuery::explicit(employee, self.filter.range());
        self.run(repo, query).await;
    }

    /// Refresh-generation change. An employee filter reloads without the date
    /// range; a range-only view reloads the range.
    pub async fn on_refresh(&self, repo: &DashboardRepository) {
        let query =
            AttendanceQuery::implicit_refresh(self.filter.selected_employee(), self.filter.range());
        self.run(repo, query).await;
    }

    pub async fn run(&self, repo: &DashboardRepository, query: AttendanceQuery) {
        let ticket = self.latest.issue();
        if query == AttendanceQuery::Idle {
            self.state.set(QueryState::default());
            return;
        }
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });
        let result = repo.fetch_attendance(query).await;
        if !self.latest.is_current(ticket) {
            debug!("discarding stale attendance response");
            return;
        }
        match result {
            Ok(records) => self.state.update(|state| {
                state.records = records;
                state.loading = false;
            }),
            Err(err) => {
                error!("failed to load attendance: {}", err);
                self.state.update(|state| {
                    state.records.clear();
                    state.loading = false;
                    state.error = Some(err.user_message(LOAD_ATTENDANCE_FAILED));
                });
            }
        }
    }
}

#[derive(Clone)]
pub struct SummaryModel {
    pub state: RwSignal<SummaryState>,
    latest: LatestRequest,
}

impl SummaryModel {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(SummaryState::default()),
            latest: LatestRequest::default(),
        }
    }

    /// Failure leaves the cards without values.
    pub async fn load_counts(&self, repo: &DashboardRepository) {
        self.state.update(|state| state.loading = true);
        let counts = match repo.fetch_counts().await {
            Ok(counts) => Some(counts),
            Err(err) => {
                warn!("failed to load dashboard counts: {}", err);
                None
            }
        };
        self.state.update(|state| {
            state.counts = counts;
            state.loading = false;
        });
    }

    /// Name and present-day count for the selected employee. Failures read
    /// as zero days.
    pub async fn load_selected(&self, repo: &DashboardRepository, selected: Option<EmployeeId>) {
        let ticket = self.latest.issue();
        let Some(employee_id) = selected else {
            self.state.update(|state| state.selected = None);
            return;
        };

        let summary = match repo.list_employees().await {
            Ok(employees) => {
                let name = resolve_employee_name(&employees, employee_id);
                let present_days = repo
                    .fetch_present_days(employee_id)
                    .await
                    .unwrap_or_else(|err| {
                        warn!("failed to load present days for {}: {}", employee_id, err);
                        0
                    });
                SelectedSummary {
                    employee_id,
                    name,
                    present_days,
                }
            }
            Err(err) => {
                warn!("failed to resolve selected employee: {}", err);
                SelectedSummary {
                    employee_id,
                    name: None,
                    present_days: 0,
                }
            }
        };

        if self.latest.is_current(ticket) {
            self.state.update(|state| state.selected = Some(summary));
        } else {
            debug!("discarding stale summary for {}", employee_id);
        }
    }
}

/// Validates and creates an employee. Returns whether it was created.
pub async fn submit_employee_form(
    vm: &DashboardViewModel,
    form: EmployeeFormState,
    messages: MessageState,
) -> bool {
    if form.submitting.get_untracked() {
        return false;
    }
    messages.clear();
    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(msg) => {
            messages.show_error(msg, None);
            return false;
        }
    };

    form.submitting.set(true);
    let result = vm.repo.create_employee(payload).await;
    form.submitting.set(false);

    match result {
        Ok(created) => {
            info!("employee {} created", created.employee_id);
            form.reset();
            messages.show_success(EMPLOYEE_CREATED, SUCCESS_CLEAR_MS);
            vm.on_employee_created().await;
            true
        }
        Err(err) => {
            messages.show_error(err.user_message(CREATE_EMPLOYEE_FAILED), None);
            false
        }
    }
}

/// Validates and records attendance. Returns whether it was recorded.
pub async fn submit_attendance_form(
    vm: &DashboardViewModel,
    form: AttendanceFormState,
    messages: MessageState,
) -> bool {
    if form.submitting.get_untracked() {
        return false;
    }
    messages.clear();
    let payload = match form.to_payload() {
        Ok(payload) => payload,
        Err(msg) => {
            messages.show_error(msg, Some(ATTENDANCE_ERROR_CLEAR_MS));
            return false;
        }
    };

    form.submitting.set(true);
    let result = vm.repo.mark_attendance(payload).await;

    let marked = match result {
        Ok(record) => {
            info!(
                "attendance {} recorded for employee {} on {}",
                record.status, record.employee_id, record.date
            );
            messages.show_success(ATTENDANCE_MARKED, SUCCESS_CLEAR_MS);
            vm.on_attendance_marked().await;
            form.reset();
            true
        }
        Err(err) => {
            messages.show_error(
                err.user_message(MARK_ATTENDANCE_FAILED),
                Some(ATTENDANCE_ERROR_CLEAR_MS),
            );
            false
        }
    };
    form.submitting.set(false);
    marked
}
