use leptos::{logging, SignalGetUntracked};

use crate::{host::DesktopHostContext, persistence, runtime_context::DesktopRuntimeContext};

pub(super) fn persist_session(host: &DesktopHostContext) {
    if let Err(err) = persistence::persist_session(host.store().as_ref()) {
        logging::warn!("persist session failed: {err}");
    }
}

pub(super) fn clear_session(host: &DesktopHostContext) {
    if let Err(err) = persistence::clear_session(host.store().as_ref()) {
        logging::warn!("clear session failed: {err}");
    }
}

pub(super) fn persist_wallpaper(host: &DesktopHostContext, runtime: DesktopRuntimeContext) {
    let state = runtime.state.get_untracked();
    if let Err(err) = persistence::persist_wallpaper(host.store().as_ref(), &state) {
        logging::warn!("persist wallpaper failed: {err}");
    }
}
