//! Desktop shell UI composition: session gate, wallpaper, desktop icons, window layer, taskbar,
//! and launcher overlay.

mod login;
mod start_menu;
mod taskbar;
mod window;

use leptos::*;

use self::{login::LoginScreen, start_menu::StartMenu, taskbar::DesktopTaskbar, window::DesktopWindow};

use crate::{apps, model::AppId, reducer::DesktopAction};
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Icon,
    IconSize,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Viewport width below which the taskbar hides per-window buttons.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

/// Returns whether a viewport of `width` CSS pixels uses the compact taskbar.
pub fn is_narrow_viewport(width: f64) -> bool {
    width < NARROW_VIEWPORT_PX
}

fn wallpaper_style(url: &str) -> String {
    // Quotes would end the CSS string early.
    let url = url.replace(['\'', '"'], "");
    format!("background-image:url('{url}');background-size:cover;background-position:center;")
}

#[component]
/// Root shell: the login form while signed out, the desktop while signed in.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let logged_in = create_memo(move |_| runtime.state.get().logged_in);

    view! {
        <Show when=move || logged_in.get() fallback=|| view! { <LoginScreen /> }>
            <DesktopSurface />
        </Show>
    }
}

#[component]
fn DesktopSurface() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let wallpaper = create_memo(move |_| state.get().wallpaper_url);
    let open_ids = create_memo(move |_| state.get().open_ids());

    view! {
        <DesktopRoot>
            <DesktopBackdrop style=Signal::derive(move || wallpaper_style(&wallpaper.get()))>
                <DesktopIconGrid>
                    <For
                        each=move || apps::desktop_icon_apps().to_vec()
                        key=|app_id| *app_id
                        let:app_id
                    >
                        <DesktopIcon app_id=app_id />
                    </For>
                </DesktopIconGrid>
            </DesktopBackdrop>

            <DesktopWindowLayer>
                <For each=move || open_ids.get() key=|app_id| *app_id let:app_id>
                    <DesktopWindow app_id=app_id />
                </For>
            </DesktopWindowLayer>

            <Show when=move || state.get().start_menu_open fallback=|| ()>
                <StartMenu />
            </Show>

            <DesktopTaskbar />
        </DesktopRoot>
    }
}

#[component]
fn DesktopIcon(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let descriptor = apps::app_descriptor(app_id);

    view! {
        <DesktopIconButton
            title=descriptor.description
            data_app=app_id.label()
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::OpenWindow(app_id))
            })
        >
            <span class="desktop-icon-glyph" aria-hidden="true">
                <Icon icon=descriptor.icon size=IconSize::Lg />
            </span>
            <span class="desktop-icon-label">{app_id.label()}</span>
        </DesktopIconButton>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn narrow_breakpoint_is_exclusive() {
        assert!(is_narrow_viewport(375.0));
        assert!(is_narrow_viewport(767.9));
        assert!(!is_narrow_viewport(768.0));
        assert!(!is_narrow_viewport(1920.0));
    }

    #[test]
    fn wallpaper_style_strips_quotes() {
        assert_eq!(
            wallpaper_style("https://x/a'b.jpg"),
            "background-image:url('https://x/ab.jpg');background-size:cover;background-position:center;"
        );
    }
}
