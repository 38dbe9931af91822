use leptos::*;
use system_ui::{
    Cluster, EmptyState, IconButton, IconName, LauncherMenu, LayoutJustify, MenuItem, Text,
    TextField, TextRole,
};

use super::use_desktop_runtime;
use crate::{apps, model::AppId, reducer::DesktopAction};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Returns whether a mousedown landed outside the launcher and its toggle button.
#[cfg(target_arch = "wasm32")]
fn is_outside_click(ev: &web_sys::MouseEvent, menu: &web_sys::Element) -> bool {
    const START_BUTTON_SELECTOR: &str = "[data-ui-slot='start-button']";

    let Some(target) = ev.target() else {
        return false;
    };
    let Some(element) = target.dyn_ref::<web_sys::Element>() else {
        return false;
    };
    let on_toggle = element
        .closest(START_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .is_some();
    !on_toggle && !menu.contains(Some(element.unchecked_ref()))
}

#[cfg(not(target_arch = "wasm32"))]
fn is_outside_click(_: &web_sys::MouseEvent, _: &web_sys::Element) -> bool {
    false
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let menu_ref = create_node_ref::<html::Div>();
    let query = create_rw_signal(String::new());
    let matches = create_memo(move |_| apps::filter_launcher_apps(&query.get()));

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        let Some(menu) = menu_ref.get_untracked() else {
            return;
        };
        if is_outside_click(&ev, &menu) {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let close_on_escape = Callback::new(move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });

    view! {
        <LauncherMenu node_ref=menu_ref>
            <TextField
                placeholder="Type to search"
                aria_label="Search apps"
                ui_slot="launcher-search"
                value=query
                on_input=Callback::new(move |ev| query.set(event_target_value(&ev)))
                on_keydown=close_on_escape
            />

            <Text role=TextRole::Label>"Pinned"</Text>
            <div class="launcher-grid" data-ui-slot="launcher-pinned">
                <Show
                    when=move || !matches.get().is_empty()
                    fallback=|| view! { <EmptyState icon=IconName::Search title="No apps found" /> }
                >
                    <For each=move || matches.get() key=|app_id| *app_id let:app_id>
                        <LauncherEntry app_id=app_id />
                    </For>
                </Show>
            </div>

            <Cluster justify=LayoutJustify::Between layout_class="launcher-footer">
                <Cluster>
                    <span class="launcher-avatar" aria-hidden="true"></span>
                    <Text>"Admin"</Text>
                </Cluster>
                <Cluster>
                    <IconButton
                        icon=IconName::Settings
                        aria_label="Settings"
                        title="Settings"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::OpenWindow(AppId::Settings))
                        })
                    />
                    <IconButton
                        icon=IconName::Power
                        aria_label="Log out"
                        title="Log out"
                        on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::Logout))
                    />
                </Cluster>
            </Cluster>
        </LauncherMenu>
    }
}

#[component]
fn LauncherEntry(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <MenuItem
            icon=apps::icon_for(app_id)
            data_app=app_id.label().to_string()
            on_click=Callback::new(move |_| runtime.dispatch_action(DesktopAction::OpenWindow(app_id)))
        >
            {app_id.label()}
        </MenuItem>
    }
}
