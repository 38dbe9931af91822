//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, per-window app
//! sessions, and host bootstrap wiring. UI composition stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServices, WindowLifetime};
use leptos::*;
use platform_host::HostServices;

use crate::{
    app_runtime::AppRuntimeState,
    effect_executor,
    host::DesktopHostContext,
    model::{AppId, DesktopState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Per-window lifetime tokens.
    pub app_runtime: StoredValue<AppRuntimeState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Returns the live lifetime token for a window, creating it on first mount.
    pub fn lifetime_for(&self, app_id: AppId) -> WindowLifetime {
        self.app_runtime
            .try_update_value(|sessions| sessions.lifetime_for(app_id))
            .unwrap_or_default()
    }

    /// Builds the service bundle for an app mounted inside a window.
    pub fn app_services(&self) -> AppServices {
        let dispatch = self.dispatch;
        let sender = Callback::new(move |command: AppCommand| {
            dispatch.call(DesktopAction::HandleAppCommand(command));
        });
        self.host.get_value().app_services(sender)
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let app_runtime = store_value(AppRuntimeState::default());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let previous = desktop.clone();

        match reduce_desktop(&mut desktop, action) {
            Ok(new_effects) => {
                if desktop != previous {
                    state.set(desktop);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        effects,
        app_runtime,
        dispatch,
    };

    provide_context(runtime);

    runtime.host.get_value().install_boot_hydration(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
