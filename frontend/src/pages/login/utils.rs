use crate::api::{ApiError, LoginRequest};
use leptos::*;

pub const INVALID_CREDENTIALS: &str = "Invalid admin credentials";
pub const SERVER_UNREACHABLE: &str = "Unable to reach the server. Please try again.";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub show_password: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            show_password: create_rw_signal(false),
        }
    }
}

impl LoginFormState {
    /// Validated request built from the current inputs.
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        let username = self.username.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&username, &password)?;
        Ok(LoginRequest {
            username: username.trim().to_string(),
            password,
        })
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".into());
    }
    if password.is_empty() {
        return Err("Password is required".into());
    }
    Ok(())
}

/// The login screen never echoes server detail back to the user.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Network(_) => SERVER_UNREACHABLE.to_string(),
        _ => INVALID_CREDENTIALS.to_string(),
    }
}
