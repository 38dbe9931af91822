use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::{
    Icon, IconName, IconSize, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

use super::use_desktop_runtime;
use crate::{apps, model::AppId, reducer::DesktopAction};

fn window_style(z_index: u32, minimized: bool) -> String {
    if minimized {
        format!("z-index:{z_index};display:none;")
    } else {
        format!("z-index:{z_index};")
    }
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let record = create_memo(move |_| state.get().window(app_id).copied());
    let focused = Signal::derive(move || state.get().is_active(app_id));
    let minimized = Signal::derive(move || record.get().is_some_and(|w| w.minimized));
    let maximized = Signal::derive(move || record.get().is_some_and(|w| w.maximized));
    let style = Signal::derive(move || {
        let z_index = state.get().z_index(app_id).unwrap_or_default();
        window_style(z_index, minimized.get())
    });

    let focus = Callback::new(move |_| {
        if !runtime.state.get_untracked().is_active(app_id) {
            runtime.dispatch_action(DesktopAction::FocusWindow(app_id));
        }
    });
    let minimize = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::ToggleMinimize(app_id))
    });
    let toggle_maximize = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::ToggleMaximize(app_id))
    });
    let close = Callback::new(move |_| runtime.dispatch_action(DesktopAction::CloseWindow(app_id)));

    view! {
        <WindowFrame
            style=style
            aria_label=app_id.label().to_string()
            data_app=app_id.label().to_string()
            focused=focused
            minimized=minimized
            maximized=maximized
            on_mousedown=focus
        >
            <WindowTitleBar on_dblclick=toggle_maximize>
                <WindowTitle>
                    <span class="titlebar-app-icon" aria-hidden="true">
                        <Icon icon=apps::icon_for(app_id) size=IconSize::Sm />
                    </span>
                    <span>{app_id.label()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimize window"
                        on_click=minimize
                    />
                    {move || {
                        let (icon, label) = if maximized.get() {
                            (IconName::WindowRestore, "Restore window")
                        } else {
                            (IconName::WindowMaximize, "Maximize window")
                        };
                        view! {
                            <WindowControlButton icon aria_label=label on_click=toggle_maximize />
                        }
                    }}
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window"
                        danger=true
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>
                <WindowContent app_id=app_id />
            </WindowBody>
        </WindowFrame>
    }
}

#[component]
fn WindowContent(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let context = AppMountContext {
        window_label: app_id.label(),
        lifetime: runtime.lifetime_for(app_id),
        services: runtime.app_services(),
    };
    let module = create_local_resource(|| (), move |_| apps::load_app_module(app_id));

    // The mounted view lives as long as this component; minimizing only hides the frame.
    view! {
        <Suspense fallback=|| view! { <p class="window-loading">"Loading..."</p> }>
            {
                let context = context.clone();
                move || module.get().map(|module| module.mount(context.clone()))
            }
        </Suspense>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn minimized_windows_are_hidden_not_removed() {
        assert_eq!(window_style(12, false), "z-index:12;");
        assert_eq!(window_style(12, true), "z-index:12;display:none;");
    }
}
