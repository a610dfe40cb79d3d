use crate::api::{
    AttendanceStatus, CreateEmployee, DateRange, Employee, EmployeeId, MarkAttendance,
};
use crate::utils::{time::parse_date_input, timer};
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const SELECT_EMPLOYEE_AND_DATE: &str = "Select employee and date.";
pub const SUCCESS_CLEAR_MS: u32 = 3_000;
pub const ATTENDANCE_ERROR_CLEAR_MS: u32 = 5_000;

/// Parses a `<select>` value holding an employee's numeric id.
pub fn parse_employee_id(raw: &str) -> Option<EmployeeId> {
    raw.trim().parse::<EmployeeId>().ok()
}

pub fn resolve_employee_name(employees: &[Employee], id: EmployeeId) -> Option<String> {
    employees
        .iter()
        .find(|employee| employee.id == id)
        .map(|employee| employee.full_name.clone())
}

pub fn present_days_label(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("{}'s Present Days", name),
        _ => "Present Days".to_string(),
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    pub employee_id: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub department: RwSignal<String>,
    pub submitting: RwSignal<bool>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            submitting: create_rw_signal(false),
        }
    }
}

impl EmployeeFormState {
    pub fn to_payload(&self) -> Result<CreateEmployee, String> {
        let employee_id = self.employee_id.get_untracked().trim().to_string();
        let full_name = self.full_name.get_untracked().trim().to_string();
        let email = self.email.get_untracked().trim().to_string();
        let department = self.department.get_untracked().trim().to_string();
        if [&employee_id, &full_name, &email, &department]
            .iter()
            .any(|value| value.is_empty())
        {
            return Err(ALL_FIELDS_REQUIRED.into());
        }
        Ok(CreateEmployee {
            employee_id,
            full_name,
            email,
            department,
        })
    }

    pub fn reset(&self) {
        self.employee_id.set(String::new());
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.department.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceFormState {
    pub employee_id: RwSignal<String>,
    pub date: RwSignal<String>,
    pub status: RwSignal<AttendanceStatus>,
    pub submitting: RwSignal<bool>,
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            status: create_rw_signal(AttendanceStatus::default()),
            submitting: create_rw_signal(false),
        }
    }
}

impl AttendanceFormState {
    pub fn to_payload(&self) -> Result<MarkAttendance, String> {
        let employee_id = parse_employee_id(&self.employee_id.get_untracked());
        let date = parse_date_input(&self.date.get_untracked());
        match (employee_id, date) {
            (Some(employee_id), Some(date)) => Ok(MarkAttendance {
                employee_id,
                date,
                status: self.status.get_untracked(),
            }),
            _ => Err(SELECT_EMPLOYEE_AND_DATE.into()),
        }
    }

    pub fn reset(&self) {
        self.employee_id.set(String::new());
        self.date.set(String::new());
        self.status.set(AttendanceStatus::default());
    }
}

/// Success / error banner pair for a form.
#[derive(Clone, Copy)]
pub struct MessageState {
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl Default for MessageState {
    fn default() -> Self {
        Self {
            success: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }
}

impl MessageState {
    pub fn clear(&self) {
        self.success.set(None);
        self.error.set(None);
    }

    pub fn show_success(&self, message: impl Into<String>, clear_after_ms: u32) {
        let message = message.into();
        self.success.set(Some(message.clone()));
        Self::clear_later(self.success, message, clear_after_ms);
    }

    pub fn show_error(&self, message: impl Into<String>, clear_after_ms: Option<u32>) {
        let message = message.into();
        self.error.set(Some(message.clone()));
        if let Some(ms) = clear_after_ms {
            Self::clear_later(self.error, message, ms);
        }
    }

    // Only clears if the slot still holds the same message.
    fn clear_later(slot: RwSignal<Option<String>>, message: String, ms: u32) {
        timer::schedule(ms, move || {
            let _ = slot.try_update(|current| {
                if current.as_deref() == Some(message.as_str()) {
                    *current = None;
                }
            });
        });
    }
}

/// Employee awaiting delete confirmation.
#[derive(Clone, Copy)]
pub struct DeleteConfirmation {
    pending: RwSignal<Option<Employee>>,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self {
            pending: create_rw_signal(None),
        }
    }
}

impl DeleteConfirmation {
    pub fn request(&self, employee: Employee) {
        self.pending.set(Some(employee));
    }

    pub fn cancel(&self) {
        self.pending.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.pending.with(Option::is_some)
    }

    pub fn target(&self) -> Option<Employee> {
        self.pending.get()
    }

    /// Closes the dialog and hands back the confirmed employee, if any.
    pub fn take(&self) -> Option<Employee> {
        let target = self.pending.get_untracked();
        self.pending.set(None);
        target
    }
}

/// Issues increasing tickets; only the newest ticket's response is applied.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest(Rc<Cell<u64>>);

impl LatestRequest {
    pub fn issue(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Raw filter inputs of the attendance query panel.
#[derive(Clone, Copy)]
pub struct AttendanceFilter {
    pub employee: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
}

impl Default for AttendanceFilter {
    fn default() -> Self {
        Self {
            employee: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
        }
    }
}

impl AttendanceFilter {
    pub fn selected_employee(&self) -> Option<EmployeeId> {
        parse_employee_id(&self.employee.get_untracked())
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(
            parse_date_input(&self.start_date.get_untracked()),
            parse_date_input(&self.end_date.get_untracked()),
        )
    }
}
