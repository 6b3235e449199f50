//! Browser client for the Taskflow task-management backend.
//!
//! Renders state, collects form input, and dispatches REST requests; all
//! business logic (task storage, scheduling, the Telegram bot itself, AI
//! suggestions) lives behind the `/api` endpoints.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

pub use app::App;

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(App);
    }
}
