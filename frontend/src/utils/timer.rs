//! Deferred callbacks and page navigation. Both are browser-only side effects,
//! so host builds (tests, SSR rendering) turn them into no-ops.

/// Runs `f` once after `millis` milliseconds.
#[cfg(target_arch = "wasm32")]
pub fn schedule(millis: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn schedule(_millis: u32, _f: impl FnOnce() + 'static) {}

#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.pathname().map(|p| p == path).unwrap_or(false) {
            return;
        }
        if let Err(err) = location.set_href(path) {
            log::warn!("navigation to {} failed: {:?}", path, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}
