//! Host-side runtime helpers for executing reducer effects against injected host services.
//!
//! Reducer semantics stay pure; everything that touches storage or app sessions runs here
//! behind the [`HostServices`] bundle assembled by the entry layer.

mod boot;
mod persistence_effects;

use std::rc::Rc;

use desktop_app_contract::{AppCommand, AppServices};
use leptos::Callback;
use platform_host::{HostServices, KeyValueStore};

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps injected host services.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured key-value store.
    pub fn store(&self) -> Rc<dyn KeyValueStore> {
        self.services.storage.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Builds the service bundle handed to mounted apps.
    pub fn app_services(&self, sender: Callback<AppCommand>) -> AppServices {
        AppServices::new(
            self.services.storage.clone(),
            self.services.chat.clone(),
            self.services.speech.clone(),
            sender,
        )
    }

    /// Installs boot hydration of the session flag and wallpaper.
    pub fn install_boot_hydration(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot_hydration(self.clone(), runtime.dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistSession => persistence_effects::persist_session(self),
            RuntimeEffect::ClearSession => persistence_effects::clear_session(self),
            RuntimeEffect::PersistWallpaper => {
                persistence_effects::persist_wallpaper(self, runtime)
            }
            RuntimeEffect::ReleaseWindow(app_id) => {
                runtime.app_runtime.update_value(|sessions| {
                    sessions.release(app_id);
                });
            }
        }
    }
}
