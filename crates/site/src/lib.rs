mod web_app;

pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::logging::log!(
        "booting desktop with {} host",
        platform_host_web::host_strategy_name()
    );
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
