use crate::state::auth::{use_auth, use_logout};
use leptos::*;

pub const APP_TITLE: &str = "HRMS Lite";
pub const APP_SUBTITLE: &str = "Modern Employee & Attendance Management System";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let on_logout = use_logout();
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <i class="fas fa-users text-action-primary-bg text-xl"></i>
                        <div>
                            <h1 class="text-xl font-semibold text-fg">{APP_TITLE}</h1>
                            <p class="text-xs text-fg-muted hidden sm:block">{APP_SUBTITLE}</p>
                        </div>
                    </div>
                    <Show when=move || auth.get().is_authenticated>
                        <button
                            on:click=move |_| on_logout.call(())
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            <i class="fas fa-sign-out-alt mr-2"></i>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
