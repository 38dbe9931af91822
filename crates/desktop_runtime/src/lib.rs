pub mod app_runtime;
pub mod apps;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod session;
pub mod window_manager;

pub use components::{
    is_narrow_viewport, use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell,
};
pub use model::*;
pub use persistence::{load_boot_snapshot, persist_wallpaper, BootSnapshot};
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use session::{verify_credentials, Authenticated, SessionError};
