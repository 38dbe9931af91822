//! Assistant desktop apps: ChatGPT, Gemini and Joi chat windows, and the Creative Writer.
//!
//! Every request reads its API key from storage at call time and fails with
//! [`AssistantError::MissingApiKey`] before any network traffic when the key is absent. Replies
//! are applied through the window's [`WindowLifetime`], so answers that arrive after the window
//! closed are dropped.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod chat;
pub mod joi;
pub mod speech;
pub mod writer;

use chrono::{DateTime, Utc};
use desktop_app_contract::{AppMountContext, AssistantServices, StateService, WindowLifetime};
use leptos::*;
use platform_host::{keys, next_monotonic_timestamp_ms, AssistantError, ChatRole};
use system_ui::prelude::*;

pub use chat::{ChatProfile, Transcript};
pub use joi::JoiSettings;
pub use writer::{SavedStory, StoryShelf, WriterMode};

/// Mounts the ChatGPT window.
pub fn mount_chatgpt_app(context: AppMountContext) -> View {
    mount_chat(ChatProfile::ChatGpt, context)
}

/// Mounts the Gemini window.
pub fn mount_gemini_app(context: AppMountContext) -> View {
    mount_chat(ChatProfile::Gemini, context)
}

/// Mounts the Joi window.
pub fn mount_joi_app(context: AppMountContext) -> View {
    mount_chat(ChatProfile::Joi, context)
}

fn mount_chat(profile: ChatProfile, context: AppMountContext) -> View {
    view! {
        <ChatApp
            profile
            state=context.services.state
            assistants=context.services.assistants
            lifetime=context.lifetime
        />
    }
    .into_view()
}

/// Mounts the Creative Writer window.
pub fn mount_creative_writer_app(context: AppMountContext) -> View {
    view! {
        <CreativeWriterApp
            state=context.services.state
            assistants=context.services.assistants
            lifetime=context.lifetime
        />
    }
    .into_view()
}

fn profile_icon(profile: ChatProfile) -> IconName {
    match profile {
        ChatProfile::ChatGpt => IconName::Chat,
        ChatProfile::Gemini => IconName::Bot,
        ChatProfile::Joi => IconName::Heart,
    }
}

#[component]
/// Chat window contents for one profile.
pub fn ChatApp(
    /// Which chat this window is.
    profile: ChatProfile,
    /// Persistence handle for keys, transcript and Joi settings.
    state: StateService,
    /// Chat and speech transports.
    assistants: AssistantServices,
    /// Cancellation token of the owning window.
    lifetime: WindowLifetime,
) -> impl IntoView {
    let transcript_key = store_value(profile.transcript_key());
    let transcript = create_rw_signal(transcript_key.with_value(|key| state.load::<Transcript>(key)));
    let joi_settings = create_rw_signal(JoiSettings::load(&state));
    let input = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);
    let show_settings = create_rw_signal(false);
    let playback = store_value(None::<speech::Playback>);
    let state = store_value(state);
    let assistants = store_value(assistants);
    let lifetime = store_value(lifetime);
    let is_joi = profile == ChatProfile::Joi;

    let stop_playback = move || {
        playback.update_value(|current| {
            if let Some(current) = current.take() {
                current.stop();
            }
        });
    };
    on_cleanup(stop_playback);

    let persist_transcript = move || {
        state.with_value(|state| {
            transcript_key.with_value(|key| transcript.with_untracked(|t| state.save(key, t)))
        });
    };

    let speak = move |text: String| {
        let request = joi_settings
            .with_untracked(|settings| state.with_value(|state| settings.speech_request(state, &text)));
        let Some(request) = request else {
            return;
        };
        let speech_service = assistants.with_value(|services| services.speech.clone());
        lifetime.with_value(|lifetime| {
            lifetime.spawn(
                async move { speech_service.synthesize(request).await },
                move |result| match result {
                    Ok(bytes) => match speech::play_audio(&bytes) {
                        Ok(started) => {
                            stop_playback();
                            playback.set_value(Some(started));
                        }
                        Err(err) => logging::warn!("joi playback failed: {err}"),
                    },
                    Err(err) => logging::warn!("joi speech failed: {err}"),
                },
            )
        });
    };

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || pending.get_untracked() {
            return;
        }
        let persona = is_joi.then(|| joi_settings.with_untracked(|s| s.personality.clone()));
        let prepared = transcript.with_untracked(|transcript| {
            state.with_value(|state| {
                chat::prepare_request(state, profile, persona.as_deref(), &transcript.messages, &text)
            })
        });
        let request = match prepared {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        error.set(None);
        input.set(String::new());
        transcript.update(|t| t.push(ChatRole::User, text));
        persist_transcript();
        pending.set(true);

        let chat_service = assistants.with_value(|services| services.chat.clone());
        lifetime.with_value(|lifetime| {
            lifetime.spawn(
                async move { chat_service.complete(request).await },
                move |result: Result<String, AssistantError>| {
                    pending.set(false);
                    match result {
                        Ok(reply) => {
                            transcript.update(|t| t.push(ChatRole::Assistant, reply.clone()));
                            persist_transcript();
                            if is_joi {
                                speak(reply);
                            }
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                },
            )
        });
    };

    let clear = move |_| {
        stop_playback();
        transcript.set(Transcript::default());
        error.set(None);
        state.with_value(|state| transcript_key.with_value(|key| state.remove(key)));
    };

    let title = Signal::derive(move || {
        if is_joi {
            joi_settings.with(|s| s.display_name().to_string())
        } else {
            profile.title().to_string()
        }
    });
    let messages = create_memo(move |_| {
        transcript.with(|t| t.messages.iter().cloned().enumerate().collect::<Vec<_>>())
    });

    view! {
        <div class="app-chat" data-app=profile.title() data-profile=profile.token()>
            <ToolBar aria_label="Conversation">
                <Icon icon=profile_icon(profile) size=IconSize::Md />
                <Heading>{move || title.get()}</Heading>
                <Cluster justify=LayoutJustify::End>
                    {is_joi
                        .then(|| {
                            view! {
                                <IconButton
                                    icon=IconName::Speaker
                                    aria_label="Stop voice"
                                    title="Stop voice"
                                    on_click=Callback::new(move |_| stop_playback())
                                />
                                <IconButton
                                    icon=IconName::Settings
                                    aria_label="Joi settings"
                                    title="Joi settings"
                                    pressed=show_settings
                                    on_click=Callback::new(move |_| show_settings.update(|open| *open = !*open))
                                />
                            }
                        })}
                    <IconButton
                        icon=IconName::Delete
                        aria_label="Clear conversation"
                        title="Clear conversation"
                        disabled=Signal::derive(move || transcript.with(Transcript::is_empty))
                        on_click=Callback::new(clear)
                    />
                </Cluster>
            </ToolBar>

            <Show when=move || is_joi && show_settings.get() fallback=|| ()>
                <JoiSettingsPanel
                    settings=joi_settings
                    state=state.get_value()
                    on_close=Callback::new(move |_| show_settings.set(false))
                />
            </Show>

            <div class="chat-transcript" role="log" aria-live="polite">
                <Show
                    when=move || !messages.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <EmptyState
                                icon=profile_icon(profile)
                                title=format!("Start a conversation with {}", title.get_untracked())
                            />
                        }
                    }
                >
                    <For
                        each=move || messages.get()
                        key=|(index, message)| format!("{index}:{}", message.content)
                        let:entry
                    >
                        <div class="chat-message" data-role=entry.1.role.token()>
                            <p>{entry.1.content}</p>
                        </div>
                    </For>
                </Show>
                <Show when=move || pending.get() fallback=|| ()>
                    <div class="chat-message chat-pending" data-role="assistant" role="status">
                        "Thinking..."
                    </div>
                </Show>
            </div>

            <Show when=move || error.get().is_some() fallback=|| ()>
                <div class="chat-error" role="alert">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <ToolBar aria_label="Message">
                <TextField
                    placeholder=format!("Message {}...", title.get_untracked())
                    aria_label="Message"
                    value=input
                    on_input=Callback::new(move |ev| input.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send();
                        }
                    })
                />
                <IconButton
                    icon=IconName::Send
                    variant=ButtonVariant::Primary
                    aria_label="Send"
                    title="Send"
                    disabled=Signal::derive(move || pending.get())
                    on_click=Callback::new(move |_| send())
                />
            </ToolBar>
        </div>
    }
}

#[component]
fn JoiSettingsPanel(
    settings: RwSignal<JoiSettings>,
    state: StateService,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = create_rw_signal(settings.get_untracked());
    let state = store_value(state);

    let save = move |_| {
        let next = draft.get_untracked();
        state.with_value(|state| state.save(keys::JOI_SETTINGS_KEY, &next));
        settings.set(next);
        on_close.call(());
    };

    view! {
        <Panel layout_class="joi-settings" title="Joi Settings">
            <Stack>
                <FieldGroup title="Name">
                    <TextField
                        aria_label="Name"
                        value=Signal::derive(move || draft.with(|d| d.name.clone()))
                        on_input=Callback::new(move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.name = value);
                        })
                    />
                </FieldGroup>
                <FieldGroup title="Personality">
                    <TextArea
                        rows=4
                        aria_label="Personality"
                        value=Signal::derive(move || draft.with(|d| d.personality.clone()))
                        on_input=Callback::new(move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.personality = value);
                        })
                    />
                </FieldGroup>
                <FieldGroup
                    title="Voice ID"
                    description="The ElevenLabs API key is managed in Settings."
                >
                    <TextField
                        placeholder="ElevenLabs Voice ID"
                        aria_label="Voice ID"
                        value=Signal::derive(move || draft.with(|d| d.voice_id.clone()))
                        on_input=Callback::new(move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.voice_id = value);
                        })
                    />
                </FieldGroup>
                <FieldGroup title="Speak replies">
                    <CheckboxField
                        aria_label="Speak replies"
                        checked=Signal::derive(move || draft.with(|d| d.voice_enabled))
                        on_change=Callback::new(move |ev| {
                            let checked = event_target_checked(&ev);
                            draft.update(|d| d.voice_enabled = checked);
                        })
                    />
                </FieldGroup>
                <Cluster justify=LayoutJustify::End>
                    <Button variant=ButtonVariant::Quiet on_click=Callback::new(move |_| on_close.call(()))>
                        "Cancel"
                    </Button>
                    <Button variant=ButtonVariant::Primary leading_icon=IconName::Save on_click=Callback::new(save)>
                        "Save Settings"
                    </Button>
                </Cluster>
            </Stack>
        </Panel>
    }
}

#[component]
/// Creative Writer window contents.
pub fn CreativeWriterApp(
    /// Persistence handle for the Groq key and saved stories.
    state: StateService,
    /// Chat transport.
    assistants: AssistantServices,
    /// Cancellation token of the owning window.
    lifetime: WindowLifetime,
) -> impl IntoView {
    let shelf = create_rw_signal(state.load::<StoryShelf>(keys::CREATIVE_STORIES_KEY));
    let mode = create_rw_signal(WriterMode::Story);
    let idea = create_rw_signal(String::new());
    let result = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);
    let state = store_value(state);
    let assistants = store_value(assistants);
    let lifetime = store_value(lifetime);

    let mutate_shelf = move |change: &dyn Fn(&mut StoryShelf)| {
        shelf.update(|shelf| change(shelf));
        state.with_value(|state| {
            shelf.with_untracked(|shelf| state.save(keys::CREATIVE_STORIES_KEY, shelf))
        });
    };

    let generate = move |_| {
        let text = idea.get_untracked();
        if text.trim().is_empty() || pending.get_untracked() {
            return;
        }
        let prepared =
            state.with_value(|state| writer::prepare_request(state, mode.get_untracked(), &text));
        let request = match prepared {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        error.set(None);
        result.set(String::new());
        pending.set(true);
        let chat_service = assistants.with_value(|services| services.chat.clone());
        lifetime.with_value(|lifetime| {
            lifetime.spawn(
                async move { chat_service.complete(request).await },
                move |outcome: Result<String, AssistantError>| {
                    pending.set(false);
                    match outcome {
                        Ok(text) => result.set(text),
                        Err(err) => {
                            logging::warn!("creative writer request failed: {err}");
                            error.set(Some(err.to_string()));
                        }
                    }
                },
            )
        });
    };

    let save = move |_| {
        let title = idea.get_untracked();
        let content = result.get_untracked();
        let now = next_monotonic_timestamp_ms();
        mutate_shelf(&|shelf: &mut StoryShelf| {
            shelf.save(&title, &content, now);
        });
    };

    view! {
        <div class="app-creative-writer" data-app="Creative Writer">
            <aside class="writer-sidebar">
                <Stack gap=LayoutGap::Sm>
                    {WriterMode::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    selected=Signal::derive(move || mode.get() == option)
                                    on_click=Callback::new(move |_| mode.set(option))
                                >
                                    {option.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Stack>
                <Heading>"Saved Stories"</Heading>
                <ListSurface aria_label="Saved stories">
                    <For
                        each=move || shelf.with(|shelf| shelf.stories.clone())
                        key=|story| story.id.clone()
                        let:story
                    >
                        <SavedStoryRow
                            story=story
                            on_open=Callback::new(move |(title, content): (String, String)| {
                                idea.set(title);
                                result.set(content);
                            })
                            on_delete=Callback::new(move |id: String| {
                                mutate_shelf(&|shelf: &mut StoryShelf| {
                                    shelf.delete(&id);
                                });
                            })
                        />
                    </For>
                </ListSurface>
            </aside>

            <main class="writer-main">
                <Stack>
                    <FieldGroup title="Your idea">
                        <TextArea
                            rows=4
                            placeholder="Describe your idea..."
                            aria_label="Idea"
                            value=idea
                            on_input=Callback::new(move |ev| idea.set(event_target_value(&ev)))
                        />
                    </FieldGroup>
                    <Cluster>
                        <Button
                            variant=ButtonVariant::Primary
                            disabled=Signal::derive(move || pending.get())
                            on_click=Callback::new(generate)
                        >
                            {move || if pending.get() { "Generating..." } else { "Generate" }}
                        </Button>
                        <Button
                            leading_icon=IconName::Save
                            disabled=Signal::derive(move || result.with(|r| r.trim().is_empty()))
                            on_click=Callback::new(save)
                        >
                            "Save"
                        </Button>
                    </Cluster>
                    <Show when=move || error.get().is_some() fallback=|| ()>
                        <div class="writer-error" role="alert">{move || error.get().unwrap_or_default()}</div>
                    </Show>
                    <Show when=move || !result.with(String::is_empty) fallback=|| ()>
                        <article class="writer-result">{move || result.get()}</article>
                    </Show>
                </Stack>
            </main>
        </div>
    }
}

#[component]
fn SavedStoryRow(
    story: SavedStory,
    on_open: Callback<(String, String)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let SavedStory {
        id,
        title,
        content,
        created_ms,
    } = story;
    let open_title = title.clone();

    view! {
        <div class="writer-story" role="listitem">
            <Button
                variant=ButtonVariant::Quiet
                title=title.clone()
                on_click=Callback::new(move |_| on_open.call((open_title.clone(), content.clone())))
            >
                <span class="writer-story-title">{title}</span>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {format_saved_date(created_ms)}
                </Text>
            </Button>
            <IconButton
                icon=IconName::Delete
                aria_label="Delete story"
                title="Delete story"
                on_click=Callback::new(move |_| on_delete.call(id.clone()))
            />
        </div>
    }
}

/// `YYYY-MM-DD` in UTC for a unix millisecond timestamp.
pub fn format_saved_date(unix_ms: u64) -> String {
    i64::try_from(unix_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|saved| saved.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn saved_dates_are_utc_calendar_days() {
        assert_eq!(format_saved_date(0), "1970-01-01");
        assert_eq!(format_saved_date(951_782_400_000), "2000-02-29");
        assert_eq!(format_saved_date(1_704_067_199_999), "2023-12-31");
        assert_eq!(format_saved_date(u64::MAX), "");
    }

    #[test]
    fn profiles_map_to_icons() {
        assert_eq!(profile_icon(ChatProfile::Joi), IconName::Heart);
        assert_eq!(profile_icon(ChatProfile::ChatGpt), IconName::Chat);
    }
}
