use leptos::{create_effect, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let snapshot = persistence::load_boot_snapshot(host.store().as_ref());
            leptos::logging::log!(
                "desktop boot via {} host (logged_in={})",
                host.host_strategy_name(),
                snapshot.logged_in
            );
            dispatch.call(DesktopAction::Hydrate {
                logged_in: snapshot.logged_in,
                wallpaper_url: snapshot.wallpaper_url,
            });
        });
    });
}
