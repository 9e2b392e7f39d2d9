pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod utils;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Installs the panic hook and console logger, resolves runtime config in the
/// background and mounts the router.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", err).into());
    }
    log::info!("starting Kollege frontend");

    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
