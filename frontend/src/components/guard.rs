use crate::{
    state::auth::{use_auth, use_session},
    utils::timer::redirect_to,
};
use leptos::*;

/// Renders `children` only while a session token is present. Without one it
/// redirects to `/login` and never constructs the protected subtree.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let session = use_session();
    // Re-read the store on every auth change; the signal alone can lag a
    // token removed by another tab.
    let has_token = create_memo(move |_| {
        let _ = auth.get().is_authenticated;
        session.get_token().is_some()
    });
    create_effect(move |_| {
        if !has_token.get() {
            redirect_to("/login");
        }
    });
    view! {
        <Show when=move || has_token.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAuth;
    use crate::state::{auth::AuthProvider, session::SessionStore};
    use crate::api::ApiClient;
    use crate::test_support::ssr::render_to_string;
    use leptos::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn render_guarded(session: SessionStore, built: Rc<Cell<bool>>) -> String {
        render_to_string(move || {
            let client = ApiClient::with_session(session);
            view! {
                <AuthProvider client=client>
                    <RequireAuth>
                        {
                            let built = built.clone();
                            move || {
                                built.set(true);
                                view! { <div>"protected-content"</div> }
                            }
                        }
                    </RequireAuth>
                </AuthProvider>
            }
        })
    }

    #[test]
    fn require_auth_renders_children_with_token() {
        let built = Rc::new(Cell::new(false));
        let html = render_guarded(SessionStore::with_token("tok1"), built.clone());
        assert!(html.contains("protected-content"));
        assert!(built.get());
    }

    #[test]
    fn require_auth_never_builds_children_without_token() {
        let built = Rc::new(Cell::new(false));
        let html = render_guarded(SessionStore::in_memory(), built.clone());
        assert!(!html.contains("protected-content"));
        assert!(!built.get());
    }

    #[test]
    fn require_auth_rejects_blank_token() {
        let built = Rc::new(Cell::new(false));
        let html = render_guarded(SessionStore::with_token("  "), built.clone());
        assert!(!html.contains("protected-content"));
    }
}
