use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
    state::session::SessionStore,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context(session: &SessionStore) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        is_authenticated: session.is_authenticated(),
        loading: false,
    });

    // Token changes from anywhere (login, logout, a 401 from the gateway)
    // flow back into the reactive state.
    session.subscribe(move |authenticated| {
        let _ = set_auth_state.try_update(|state| state.is_authenticated = authenticated);
    });

    (auth_state, set_auth_state)
}

/// Provides the session, the API client bound to it, and the reactive auth
/// state to everything below it.
#[component]
pub fn AuthProvider(
    #[prop(optional)] client: Option<ApiClient>,
    children: Children,
) -> impl IntoView {
    let client = client.unwrap_or_default();
    let session = client.session().clone();
    let ctx = create_auth_context(&session);
    provide_context(session);
    provide_context(client);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_default()
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::with_session(use_session()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(_) => {
            set_auth_state.update(|state| {
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Local only: the backend has no logout endpoint.
pub fn logout(session: &SessionStore, set_auth_state: WriteSignal<AuthState>) {
    session.clear_token();
    set_auth_state.update(|state| {
        state.is_authenticated = false;
        state.loading = false;
    });
    log::info!("admin logged out");
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::new_with_client(Rc::new(use_api_client()));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();
    Callback::new(move |_| {
        logout(&session, set_auth);
        crate::utils::timer::redirect_to("/login");
    })
}
