use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployee, Employee, EmployeeId},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/employees").await;
        let response = self.send_authorized(self.http_client().get(url)).await?;
        // The backend answers `null` when the table is empty.
        let employees: Option<Vec<Employee>> = self.read_json(response).await?;
        Ok(employees.unwrap_or_default())
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        let url = self.endpoint("/employees").await;
        let response = self
            .send_authorized(self.http_client().post(url).json(payload))
            .await?;
        self.read_json(response).await
    }

    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/employees/{}", id)).await;
        let response = self.send_authorized(self.http_client().delete(url)).await?;
        self.expect_success(response).await
    }
}
