use super::utils::{login_error_message, LoginFormState};
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::timer::redirect_to;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.password.set(String::new());
                    redirect_to("/");
                }
                Err(err) => {
                    log::warn!("login failed: {}", err.code());
                    error.set(Some(login_error_message(&err)));
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
