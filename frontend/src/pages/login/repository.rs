use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.login(request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionStore;
    use httpmock::prelude::*;

    fn repository(server: &MockServer, session: SessionStore) -> LoginRepository {
        LoginRepository::new_with_client(Rc::new(
            ApiClient::with_session(session).with_base_url(server.base_url()),
        ))
    }

    #[tokio::test]
    async fn login_posts_credentials_and_stores_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/admin/login")
                    .body_contains("username=admin");
                then.status(200)
                    .json_body(serde_json::json!({ "access_token": "tok1" }));
            })
            .await;

        let session = SessionStore::in_memory();
        let repo = repository(&server, session.clone());
        let response = repo
            .login(LoginRequest {
                username: "admin".into(),
                password: "admin@123".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.access_token, "tok1");
        assert_eq!(session.get_token().as_deref(), Some("tok1"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_propagates_validation_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/admin/login");
                then.status(422).json_body(serde_json::json!({
                    "detail": [{ "loc": ["body", "password"], "msg": "field required" }]
                }));
            })
            .await;

        let repo = repository(&server, SessionStore::in_memory());
        let error = repo
            .login(LoginRequest {
                username: "admin".into(),
                password: String::new(),
            })
            .await
            .expect_err("should return validation error");
        assert_eq!(error.code(), "VALIDATION_ERROR");
        assert_eq!(error.detail(), Some("field required"));
    }
}
