/// Leaves the current page through `location.replace`, so the guarded page
/// does not stay in browser history.
#[cfg(target_arch = "wasm32")]
pub fn replace_location(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().replace(path) {
        log::error!("failed to redirect to {}: {:?}", path, err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace_location(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}
