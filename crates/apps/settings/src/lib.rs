//! Built-in Settings desktop app for the wallpaper, display brightness, assistant API keys, and
//! the admin account password.
//!
//! Wallpaper changes go through [`AppServices::set_wallpaper`] so the desktop runtime owns the
//! persisted value; API keys and the password override are written straight to the injected
//! key-value store, where the assistants and the session gate read them at call time.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppMountContext, AppServices, StateService};
use leptos::*;
use platform_host::keys;
use system_ui::prelude::*;

/// Lowest brightness the slider allows, in percent.
pub const MIN_BRIGHTNESS: u32 = 50;
/// Highest brightness the slider allows, in percent.
pub const MAX_BRIGHTNESS: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsSection {
    Display,
    ApiKeys,
    Account,
}

impl SettingsSection {
    const ALL: [Self; 3] = [Self::Display, Self::ApiKeys, Self::Account];

    fn label(self) -> &'static str {
        match self {
            Self::Display => "Display",
            Self::ApiKeys => "API Keys",
            Self::Account => "Account",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::Display => IconName::Display,
            Self::ApiKeys => IconName::Key,
            Self::Account => IconName::Person,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Built-in wallpaper choice.
pub struct WallpaperPreset {
    /// Display name.
    pub label: &'static str,
    /// Image URL.
    pub url: &'static str,
}

/// Wallpapers offered without typing a URL.
pub const WALLPAPER_PRESETS: [WallpaperPreset; 2] = [
    WallpaperPreset {
        label: "Mountain Lake",
        url: "https://images.unsplash.com/photo-1477346611705-65d1883cee1e?auto=format&fit=crop&w=1920&q=80",
    },
    WallpaperPreset {
        label: "Aurora",
        url: "https://images.unsplash.com/photo-1707343843437-caacff5cfa74",
    },
];

/// Normalizes a user-entered wallpaper URL. Only `http://` and `https://` URLs are accepted.
pub fn normalize_wallpaper_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    let scheme_len = if lower.starts_with("https://") {
        "https://".len()
    } else if lower.starts_with("http://") {
        "http://".len()
    } else {
        return None;
    };
    (trimmed.len() > scheme_len && !trimmed.contains(char::is_whitespace))
        .then(|| trimmed.to_string())
}

/// Clamps a slider value into the supported brightness range.
pub fn clamp_brightness(value: u32) -> u32 {
    value.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}

/// CSS filter applied to the wallpaper preview.
pub fn brightness_filter(percent: u32) -> String {
    format!("filter:brightness({}%);", clamp_brightness(percent))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// API keys edited on the API Keys tab.
pub struct ApiKeys {
    /// OpenAI key.
    pub openai: String,
    /// Google Gemini key.
    pub gemini: String,
    /// Groq key.
    pub groq: String,
    /// ElevenLabs key.
    pub elevenlabs: String,
}

impl ApiKeys {
    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (keys::OPENAI_KEY, &self.openai),
            (keys::GEMINI_KEY, &self.gemini),
            (keys::GROQ_KEY, &self.groq),
            (keys::ELEVENLABS_KEY, &self.elevenlabs),
        ]
    }

    /// Reads all keys; missing keys load as empty strings.
    pub fn load(state: &StateService) -> Self {
        let read = |key| state.get(key).unwrap_or_default();
        Self {
            openai: read(keys::OPENAI_KEY),
            gemini: read(keys::GEMINI_KEY),
            groq: read(keys::GROQ_KEY),
            elevenlabs: read(keys::ELEVENLABS_KEY),
        }
    }

    /// Writes every key. Blank values remove the stored key.
    pub fn save(&self, state: &StateService) {
        for (key, value) in self.entries() {
            let value = value.trim();
            if value.is_empty() {
                state.remove(key);
            } else {
                state.set(key, value);
            }
        }
    }
}

/// Stores a new admin password override, or removes it when `password` is blank.
///
/// Returns `true` when an override is now stored.
pub fn store_admin_password(state: &StateService, password: &str) -> bool {
    if password.is_empty() {
        state.remove(keys::ADMIN_PASSWORD_KEY);
        false
    } else {
        state.set(keys::ADMIN_PASSWORD_KEY, password);
        true
    }
}

/// Mounts the Settings app into a desktop window.
pub fn mount_settings_app(context: AppMountContext) -> View {
    view! { <SettingsApp services=context.services /> }.into_view()
}

#[component]
/// Settings app window contents.
pub fn SettingsApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let section = create_rw_signal(SettingsSection::Display);
    let services = store_value(services);

    view! {
        <div class="app-settings" data-app="Settings">
            <nav class="settings-sidebar" aria-label="Settings sections">
                <Heading>"Settings"</Heading>
                <Stack gap=LayoutGap::Sm>
                    {SettingsSection::ALL
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    role="tab"
                                    leading_icon=entry.icon()
                                    selected=Signal::derive(move || section.get() == entry)
                                    on_click=Callback::new(move |_| section.set(entry))
                                >
                                    {entry.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Stack>
            </nav>
            <main class="settings-content">
                {move || match section.get() {
                    SettingsSection::Display => {
                        view! { <DisplaySection services=services.get_value() /> }.into_view()
                    }
                    SettingsSection::ApiKeys => {
                        view! { <ApiKeysSection services=services.get_value() /> }.into_view()
                    }
                    SettingsSection::Account => {
                        view! { <AccountSection services=services.get_value() /> }.into_view()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn DisplaySection(services: AppServices) -> impl IntoView {
    let current = create_rw_signal(
        services
            .state
            .get(keys::WALLPAPER_KEY)
            .unwrap_or_else(|| WALLPAPER_PRESETS[0].url.to_string()),
    );
    let custom_url = create_rw_signal(String::new());
    let url_error = create_rw_signal(None::<&'static str>);
    let brightness = create_rw_signal(100_u32);
    let services = store_value(services);

    let apply = move |url: String| {
        services.with_value(|services| services.set_wallpaper(url.clone()));
        current.set(url);
    };
    let apply_custom = move || match normalize_wallpaper_url(&custom_url.get_untracked()) {
        Some(url) => {
            url_error.set(None);
            custom_url.set(String::new());
            apply(url);
        }
        None => url_error.set(Some("Enter an http:// or https:// image URL.")),
    };

    view! {
        <Stack>
            <Heading>"Display Settings"</Heading>

            <FieldGroup title="Wallpaper">
                <div
                    class="settings-wallpaper-preview"
                    style=move || {
                        format!(
                            "background-image:url('{}');{}",
                            current.get().replace(['\'', '"'], ""),
                            brightness_filter(brightness.get())
                        )
                    }
                ></div>
                <Cluster>
                    {WALLPAPER_PRESETS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    leading_icon=IconName::Image
                                    selected=Signal::derive(move || current.get() == preset.url)
                                    on_click=Callback::new(move |_| apply(preset.url.to_string()))
                                >
                                    {preset.label}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Cluster>
            </FieldGroup>

            <FieldGroup title="Custom Wallpaper">
                <Cluster>
                    <TextField
                        input_type="url"
                        placeholder="Enter wallpaper URL"
                        aria_label="Wallpaper URL"
                        value=custom_url
                        on_input=Callback::new(move |ev| custom_url.set(event_target_value(&ev)))
                        on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                apply_custom();
                            }
                        })
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| apply_custom())
                    >
                        "Apply"
                    </Button>
                </Cluster>
                <Show when=move || url_error.get().is_some() fallback=|| ()>
                    <Text tone=TextTone::Danger>{move || url_error.get().unwrap_or_default()}</Text>
                </Show>
            </FieldGroup>

            <FieldGroup title="Brightness">
                <Cluster justify=LayoutJustify::Between>
                    <RangeField
                        min="50"
                        max="150"
                        aria_label="Brightness"
                        value=Signal::derive(move || brightness.get().to_string())
                        on_input=Callback::new(move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                brightness.set(clamp_brightness(value));
                            }
                        })
                    />
                    <Text tone=TextTone::Secondary>{move || format!("{}%", brightness.get())}</Text>
                </Cluster>
            </FieldGroup>
        </Stack>
    }
}

#[component]
fn ApiKeysSection(services: AppServices) -> impl IntoView {
    let state = store_value(services.state.clone());
    let draft = create_rw_signal(ApiKeys::load(&services.state));
    let saved = create_rw_signal(false);

    let key_field = move |label: &'static str,
                          placeholder: &'static str,
                          read: fn(&ApiKeys) -> String,
                          write: fn(&mut ApiKeys, String)| {
        view! {
            <FieldGroup title=label>
                <TextField
                    input_type="password"
                    placeholder=placeholder
                    aria_label=label
                    value=Signal::derive(move || draft.with(read))
                    on_input=Callback::new(move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|keys| write(keys, value));
                        saved.set(false);
                    })
                />
            </FieldGroup>
        }
    };

    view! {
        <Stack>
            <Heading>"API Keys"</Heading>
            {key_field("OpenAI API Key", "sk-...", |k| k.openai.clone(), |k, v| k.openai = v)}
            {key_field("Google Gemini API Key", "AIza...", |k| k.gemini.clone(), |k, v| k.gemini = v)}
            {key_field("Groq API Key", "gsk_...", |k| k.groq.clone(), |k, v| k.groq = v)}
            {key_field(
                "ElevenLabs API Key",
                "xi-...",
                |k| k.elevenlabs.clone(),
                |k, v| k.elevenlabs = v,
            )}
            <Cluster>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Save
                    on_click=Callback::new(move |_| {
                        state.with_value(|state| draft.with_untracked(|keys| keys.save(state)));
                        saved.set(true);
                    })
                >
                    "Save API Keys"
                </Button>
                <Show when=move || saved.get() fallback=|| ()>
                    <Text tone=TextTone::Success>"Saved"</Text>
                </Show>
            </Cluster>
        </Stack>
    }
}

#[component]
fn AccountSection(services: AppServices) -> impl IntoView {
    let has_override = create_rw_signal(
        services
            .state
            .get(keys::ADMIN_PASSWORD_KEY)
            .is_some_and(|value| !value.is_empty()),
    );
    let new_password = create_rw_signal(String::new());
    let services = store_value(services);

    view! {
        <Stack>
            <Heading>"Account"</Heading>
            <Text tone=TextTone::Secondary>
                {move || {
                    if has_override.get() {
                        "Signed in as admin. A custom password is set; admin / admin still works."
                    } else {
                        "Signed in as admin with the default password."
                    }
                }}
            </Text>

            <FieldGroup
                title="Password"
                description="Leave blank and save to remove the custom password."
            >
                <Cluster>
                    <TextField
                        input_type="password"
                        aria_label="New password"
                        placeholder="New password"
                        autocomplete="new-password"
                        value=new_password
                        on_input=Callback::new(move |ev| new_password.set(event_target_value(&ev)))
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| {
                            let stored = services.with_value(|services| {
                                store_admin_password(&services.state, &new_password.get_untracked())
                            });
                            has_override.set(stored);
                            new_password.set(String::new());
                        })
                    >
                        "Save Password"
                    </Button>
                </Cluster>
            </FieldGroup>

            <Cluster>
                <Button
                    variant=ButtonVariant::Danger
                    leading_icon=IconName::Power
                    on_click=Callback::new(move |_| services.with_value(AppServices::logout))
                >
                    "Log out"
                </Button>
            </Cluster>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::{KeyValueStore, MemoryKeyValueStore};
    use pretty_assertions::assert_eq;

    use super::*;

    fn state() -> (Rc<MemoryKeyValueStore>, StateService) {
        let store = Rc::new(MemoryKeyValueStore::default());
        let state = StateService::new(store.clone());
        (store, state)
    }

    #[test]
    fn wallpaper_url_requires_http_scheme() {
        assert_eq!(
            normalize_wallpaper_url("  https://example.com/a.jpg "),
            Some("https://example.com/a.jpg".to_string())
        );
        assert_eq!(
            normalize_wallpaper_url("HTTP://example.com/a.jpg"),
            Some("HTTP://example.com/a.jpg".to_string())
        );
        assert_eq!(normalize_wallpaper_url("javascript:alert(1)"), None);
        assert_eq!(normalize_wallpaper_url("https://"), None);
        assert_eq!(normalize_wallpaper_url("example.com/a.jpg"), None);
        assert_eq!(normalize_wallpaper_url("https://a b"), None);
    }

    #[test]
    fn brightness_is_clamped() {
        assert_eq!(clamp_brightness(10), MIN_BRIGHTNESS);
        assert_eq!(clamp_brightness(100), 100);
        assert_eq!(clamp_brightness(400), MAX_BRIGHTNESS);
        assert_eq!(brightness_filter(120), "filter:brightness(120%);");
    }

    #[test]
    fn saving_blank_api_key_removes_it() {
        let (store, state) = state();
        store.set(keys::GROQ_KEY, "gsk_old").expect("seed");

        let keys_draft = ApiKeys {
            openai: " sk-123 ".to_string(),
            groq: String::new(),
            ..ApiKeys::default()
        };
        keys_draft.save(&state);

        assert_eq!(store.get(keys::OPENAI_KEY).expect("read"), Some("sk-123".to_string()));
        assert_eq!(store.get(keys::GROQ_KEY).expect("read"), None);
        assert_eq!(ApiKeys::load(&state).openai, "sk-123");
    }

    #[test]
    fn admin_password_override_round_trips_through_store() {
        let (store, state) = state();

        assert!(store_admin_password(&state, "hunter2"));
        assert_eq!(
            store.get(keys::ADMIN_PASSWORD_KEY).expect("read"),
            Some("hunter2".to_string())
        );

        assert!(!store_admin_password(&state, ""));
        assert_eq!(store.get(keys::ADMIN_PASSWORD_KEY).expect("read"), None);
    }
}
