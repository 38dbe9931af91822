use std::time::Duration;

use leptos::*;
use system_ui::{ClockButton, Icon, IconName, IconSize, Taskbar, TaskbarButton, TaskbarSection};

use super::{is_narrow_viewport, use_desktop_runtime};
use crate::{apps, model::AppId, reducer::DesktopAction};

const CLOCK_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockReading {
    hour: u32,
    minute: u32,
}

impl ClockReading {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let minutes_of_day = (platform_host::unix_time_ms_now() / 60_000) % (24 * 60);
            Self {
                hour: (minutes_of_day / 60) as u32,
                minute: (minutes_of_day % 60) as u32,
            }
        }
    }

    fn format(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        return web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::MAX);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        f64::MAX
    }
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let compact = create_rw_signal(is_narrow_viewport(viewport_width()));
    let clock = create_rw_signal(ClockReading::now());
    let open_ids = create_memo(move |_| state.get().open_ids());
    let start_open = Signal::derive(move || state.get().start_menu_open);

    let resize_listener = window_event_listener(ev::resize, move |_| {
        compact.set(is_narrow_viewport(viewport_width()));
    });
    on_cleanup(move || resize_listener.remove());

    match set_interval_with_handle(move || clock.set(ClockReading::now()), CLOCK_TICK) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("taskbar clock interval failed: {err:?}"),
    }

    view! {
        <Taskbar aria_label="Taskbar" compact=compact>
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    ui_slot="start-button"
                    aria_label="Start"
                    aria_haspopup="menu"
                    aria_expanded=start_open
                    pressed=start_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu)
                    })
                >
                    <Icon icon=IconName::Launcher size=IconSize::Md />
                </TaskbarButton>
            </TaskbarSection>

            <Show when=move || !compact.get() fallback=|| ()>
                <TaskbarSection ui_slot="running" aria_label="Open windows">
                    <For each=move || open_ids.get() key=|app_id| *app_id let:app_id>
                        <TaskbarWindowButton app_id=app_id />
                    </For>
                </TaskbarSection>
            </Show>

            <TaskbarSection ui_slot="tray">
                <ClockButton aria_label=Signal::derive(move || format!("Time {}", clock.get().format()))>
                    {move || clock.get().format()}
                </ClockButton>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarWindowButton(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let active = Signal::derive(move || state.get().is_active(app_id));
    let minimized = Signal::derive(move || {
        state.get().window(app_id).is_some_and(|w| w.minimized)
    });

    view! {
        <TaskbarButton
            aria_label=app_id.label().to_string()
            title=app_id.label().to_string()
            data_app=app_id.label().to_string()
            selected=active
            pressed=Signal::derive(move || active.get() && !minimized.get())
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::ActivateWindow(app_id))
            })
        >
            <Icon icon=apps::icon_for(app_id) size=IconSize::Md />
        </TaskbarButton>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_pads_hours_and_minutes() {
        assert_eq!(ClockReading { hour: 9, minute: 5 }.format(), "09:05");
        assert_eq!(ClockReading { hour: 23, minute: 59 }.format(), "23:59");
    }

    #[test]
    fn clock_reading_stays_in_range() {
        let now = ClockReading::now();
        assert!(now.hour < 24);
        assert!(now.minute < 60);
    }
}
