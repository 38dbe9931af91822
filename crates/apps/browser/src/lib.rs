//! Web browser desktop apps: tabbed Chrome and Firefox windows over the Wayback Machine, and a
//! YouTube embed player.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod tabs;
pub mod youtube;

use std::time::Duration;

use desktop_app_contract::{AppMountContext, StateService};
use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use platform_host::{keys, next_monotonic_timestamp_ms};
use system_ui::prelude::*;

pub use tabs::{BrowserTab, TabStrip, DEFAULT_URL};

/// How long the simulated loading overlay stays up after a navigation.
pub const LOADING_INDICATOR_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Browser window variant. Each keeps its own persisted tab strip.
pub enum BrowserFlavor {
    /// Chrome window.
    Chrome,
    /// Firefox window.
    Firefox,
}

impl BrowserFlavor {
    /// Storage slug for the tab strip key.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
        }
    }

    /// Storage key holding this flavor's tab strip.
    pub fn storage_key(self) -> String {
        keys::browser_tabs_key(self.slug())
    }
}

/// Mounts the Chrome window.
pub fn mount_chrome_app(context: AppMountContext) -> View {
    view! { <BrowserApp flavor=BrowserFlavor::Chrome state=context.services.state /> }.into_view()
}

/// Mounts the Firefox window.
pub fn mount_firefox_app(context: AppMountContext) -> View {
    view! { <BrowserApp flavor=BrowserFlavor::Firefox state=context.services.state /> }.into_view()
}

/// Mounts the YouTube window.
pub fn mount_youtube_app(_context: AppMountContext) -> View {
    view! { <YouTubeApp /> }.into_view()
}

#[component]
/// Tabbed browser window contents.
pub fn BrowserApp(
    /// Which browser this window is.
    flavor: BrowserFlavor,
    /// Persistence handle for the tab strip.
    state: StateService,
) -> impl IntoView {
    let storage_key = flavor.storage_key();
    let mut restored = state.load::<TabStrip>(&storage_key);
    restored.normalize();

    let strip = create_rw_signal(restored);
    let address = create_rw_signal(strip.with_untracked(TabStrip::active_url));
    let loading = create_rw_signal(false);
    let loading_timer = store_value(None::<TimeoutHandle>);
    let state = store_value(state);
    let storage_key = store_value(storage_key);

    let cancel_loading_timer = move || {
        if let Some(handle) = loading_timer.get_value() {
            handle.clear();
        }
        loading_timer.set_value(None);
    };
    on_cleanup(cancel_loading_timer);

    let mutate = move |change: &dyn Fn(&mut TabStrip)| {
        strip.update(|strip| change(strip));
        address.set(strip.with_untracked(TabStrip::active_url));
        state.with_value(|state| {
            storage_key.with_value(|key| strip.with_untracked(|strip| state.save(key, strip)))
        });
    };

    let start_loading = move || {
        cancel_loading_timer();
        loading.set(true);
        match set_timeout_with_handle(
            move || loading.set(false),
            Duration::from_millis(LOADING_INDICATOR_MS),
        ) {
            Ok(handle) => loading_timer.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("browser loading timer failed: {err:?}");
                loading.set(false);
            }
        }
    };

    let navigate = move || {
        let input = address.get_untracked();
        if tabs::normalize_address(&input).is_none() {
            return;
        }
        mutate(&|strip: &mut TabStrip| {
            strip.navigate(&input);
        });
        start_loading();
    };

    let add_tab = move |_| {
        let now = next_monotonic_timestamp_ms();
        mutate(&|strip: &mut TabStrip| {
            strip.add(now);
        });
    };

    let close_tab = move |id: String| {
        let now = next_monotonic_timestamp_ms();
        mutate(&|strip: &mut TabStrip| strip.close(&id, now));
    };

    let activate_tab = move |id: String| {
        mutate(&|strip: &mut TabStrip| {
            strip.activate(&id);
        });
    };

    let view_in_archive = move |_| {
        if let Some(normalized) = tabs::normalize_address(&address.get_untracked()) {
            address.set(tabs::wayback_url(&normalized));
        }
    };

    let frame_url = Signal::derive(move || strip.with(TabStrip::active_url));
    let frame_title = Signal::derive(move || {
        strip.with(|strip| {
            strip
                .active_tab()
                .map(|tab| tab.title.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <div class="app-browser" data-app=flavor.slug()>
            <div class="browser-tabstrip">
                <TabList aria_label="Tabs">
                    <For
                        each=move || strip.with(|strip| strip.tabs.clone())
                        key=|tab| format!("{}:{}", tab.id, tab.title)
                        let:tab
                    >
                        {
                            let id = tab.id.clone();
                            view! {
                                <BrowserTabButton
                                    tab=tab
                                    active=Signal::derive(move || strip.with(|strip| strip.active == id))
                                    on_activate=Callback::new(activate_tab)
                                    on_close=Callback::new(close_tab)
                                />
                            }
                        }
                    </For>
                </TabList>
                <IconButton
                    icon=IconName::Add
                    aria_label="New tab"
                    title="New tab"
                    on_click=Callback::new(add_tab)
                />
            </div>

            <form
                class="browser-navbar"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    navigate();
                }
            >
                <ToolBar aria_label="Navigation">
                    <IconButton
                        icon=IconName::ArrowClockwise
                        aria_label="Reload"
                        title="Reload"
                        on_click=Callback::new(move |_| start_loading())
                    />
                    <TextField
                        variant=FieldVariant::Inset
                        input_type="url"
                        aria_label="Address"
                        value=address
                        on_input=Callback::new(move |ev| address.set(event_target_value(&ev)))
                    />
                    <IconButton
                        icon=IconName::Globe
                        aria_label="View in Wayback Machine"
                        title="View in Wayback Machine"
                        on_click=Callback::new(view_in_archive)
                    />
                </ToolBar>
            </form>

            <div class="browser-content">
                <iframe
                    class="browser-frame"
                    src=move || frame_url.get()
                    title=move || frame_title.get()
                    sandbox="allow-same-origin allow-scripts allow-popups allow-forms"
                ></iframe>
                <Show when=move || loading.get() fallback=|| ()>
                    <div class="browser-loading" role="status">
                        "Connecting to Wayback Machine..."
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn BrowserTabButton(
    tab: BrowserTab,
    active: Signal<bool>,
    on_activate: Callback<String>,
    on_close: Callback<String>,
) -> impl IntoView {
    let activate_id = tab.id.clone();
    let close_id = tab.id.clone();

    view! {
        <div class="browser-tab" data-ui-selected=move || if active.get() { "true" } else { "false" }>
            <Tab
                selected=active
                title=tab.title.clone()
                on_click=Callback::new(move |_| on_activate.call(activate_id.clone()))
            >
                <Icon icon=IconName::Globe size=IconSize::Sm />
                <span class="browser-tab-title">{tab.title.clone()}</span>
            </Tab>
            <IconButton
                icon=IconName::Dismiss
                aria_label="Close tab"
                title="Close tab"
                on_click=Callback::new(move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    on_close.call(close_id.clone());
                })
            />
        </div>
    }
}

#[component]
/// YouTube window contents.
pub fn YouTubeApp() -> impl IntoView {
    let term = create_rw_signal(String::new());
    let url = create_rw_signal(youtube::FEATURED_URL.to_string());

    let search = move || {
        if let Some(next) = youtube::search_url(&term.get_untracked()) {
            url.set(next);
        }
    };

    view! {
        <div class="app-youtube" data-app="YouTube">
            <ToolBar aria_label="Search">
                <TextField
                    input_type="search"
                    placeholder="Search YouTube..."
                    aria_label="Search YouTube"
                    value=term
                    on_input=Callback::new(move |ev| term.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            search();
                        }
                    })
                />
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Search
                    disabled=Signal::derive(move || term.with(|term| term.trim().is_empty()))
                    on_click=Callback::new(move |_| search())
                >
                    "Search"
                </Button>
            </ToolBar>
            <div class="youtube-player">
                <iframe
                    class="youtube-frame"
                    src=move || url.get()
                    title="YouTube"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                ></iframe>
            </div>
        </div>
    }
}
