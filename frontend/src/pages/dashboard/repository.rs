use crate::api::{
    ApiClient, ApiError, AttendanceRecord, CreateEmployee, DashboardCounts, DateRange, Employee,
    EmployeeId, MarkAttendance,
};
use std::rc::Rc;

/// What the attendance panel should fetch for its current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceQuery {
    /// Nothing selected: no request, empty prompt.
    Idle,
    ForEmployee {
        employee_id: EmployeeId,
        range: DateRange,
    },
    InRange(DateRange),
}

impl AttendanceQuery {
    /// Query for the Filter button or an employee selection.
    pub fn explicit(employee: Option<EmployeeId>, range: DateRange) -> Self {
        match employee {
            Some(employee_id) => AttendanceQuery::ForEmployee { employee_id, range },
            None if !range.is_empty() => AttendanceQuery::InRange(range),
            None => AttendanceQuery::Idle,
        }
    }

    /// Query after a data refresh. An employee filter reloads that employee
    /// without the date inputs; otherwise the range view reloads as is.
    pub fn implicit_refresh(employee: Option<EmployeeId>, range: DateRange) -> Self {
        match employee {
            Some(employee_id) => AttendanceQuery::ForEmployee {
                employee_id,
                range: DateRange::default(),
            },
            None => AttendanceQuery::explicit(None, range),
        }
    }
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create_employee(&self, payload: CreateEmployee) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError> {
        self.client.delete_employee(id).await
    }

    pub async fn mark_attendance(
        &self,
        payload: MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        self.client.mark_attendance(&payload).await
    }

    pub async fn fetch_attendance(
        &self,
        query: AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        match query {
            AttendanceQuery::Idle => Ok(Vec::new()),
            AttendanceQuery::ForEmployee { employee_id, range } => {
                self.client
                    .list_attendance_by_employee(employee_id, range)
                    .await
            }
            AttendanceQuery::InRange(range) => self.client.list_attendance(range).await,
        }
    }

    pub async fn fetch_counts(&self) -> Result<DashboardCounts, ApiError> {
        self.client.dashboard_summary().await
    }

    pub async fn fetch_present_days(&self, employee_id: EmployeeId) -> Result<u64, ApiError> {
        self.client
            .present_days_for_employee(employee_id)
            .await
            .map(|totals| totals.present_days)
    }
}
