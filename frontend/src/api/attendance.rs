use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceRecord, DashboardCounts, DateRange, EmployeeId, MarkAttendance,
        PresentDays,
    },
};

impl ApiClient {
    pub async fn mark_attendance(
        &self,
        payload: &MarkAttendance,
    ) -> Result<AttendanceRecord, ApiError> {
        let url = self.endpoint("/attendance").await;
        let response = self
            .send_authorized(self.http_client().post(url).json(payload))
            .await?;
        self.read_json(response).await
    }

    /// All attendance rows, optionally bounded by `range`.
    pub async fn list_attendance(
        &self,
        range: DateRange,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self.endpoint("/attendance").await;
        let response = self
            .send_authorized(self.http_client().get(url).query(&range.query_params()))
            .await?;
        let records: Option<Vec<AttendanceRecord>> = self.read_json(response).await?;
        Ok(records.unwrap_or_default())
    }

    pub async fn list_attendance_by_employee(
        &self,
        employee_id: EmployeeId,
        range: DateRange,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}/attendance", employee_id))
            .await;
        let response = self
            .send_authorized(self.http_client().get(url).query(&range.query_params()))
            .await?;
        let records: Option<Vec<AttendanceRecord>> = self.read_json(response).await?;
        Ok(records.unwrap_or_default())
    }

    /// Present-day totals for every employee.
    pub async fn present_days(&self) -> Result<Vec<PresentDays>, ApiError> {
        let url = self.endpoint("/present-days").await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        let totals: Option<Vec<PresentDays>> = self.read_json(response).await?;
        Ok(totals.unwrap_or_default())
    }

    pub async fn present_days_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> Result<PresentDays, ApiError> {
        let url = self
            .endpoint(&format!("/employees/{}/present-days", employee_id))
            .await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.read_json(response).await
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardCounts, ApiError> {
        let url = self.endpoint("/dashboard").await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        self.read_json(response).await
    }
}
