use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{guard::RequireAuth, layout::APP_TITLE},
    pages::{dashboard::DashboardPage, login::LoginPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text=APP_TITLE />
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/" view=ProtectedDashboard/>
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dashboard_is_the_only_protected_route() {
        assert_eq!(PROTECTED_ROUTE_PATHS, &["/"]);
        assert!(ROUTE_PATHS.contains(&"/login"));
    }

    #[test]
    fn public_and_protected_routes_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(&protected | &public, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
