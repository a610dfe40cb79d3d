use log::{info, warn};

use super::{
    client::{error_from_response, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Exchanges admin credentials for a bearer token and stores it in the
    /// session. A rejected login never clears an existing session.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/admin/login").await;
        let response = self.send(self.http_client().post(url).form(&request)).await?;

        if !response.status().is_success() {
            let error = error_from_response(response).await;
            warn!("admin login rejected: {}", error.code());
            return Err(error);
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;
        self.session()
            .set_token(&login.access_token)
            .map_err(ApiError::decode)?;
        info!("admin login succeeded");
        Ok(login)
    }
}
