use desktop_app_contract::{AssistantServices, StateService, WindowLifetime};
use leptos::*;
use platform_host::{keys, next_monotonic_timestamp_ms, AssistantError};
use system_ui::prelude::*;

use crate::browser;
use crate::roster::{self, ChatLog, Employee, Roster, BACKUP_FILE_NAME, FALLBACK_REPLY};

#[component]
/// AI Employees window contents.
pub fn AiEmployeesApp(
    /// Persistence handle for the roster and the Groq key.
    state: StateService,
    /// Chat transport.
    assistants: AssistantServices,
    /// Cancellation token of the owning window.
    lifetime: WindowLifetime,
) -> impl IntoView {
    let roster = create_rw_signal(state.load::<Roster>(keys::AI_EMPLOYEES_KEY));
    let log = create_rw_signal(ChatLog::default());
    let selected = create_rw_signal(None::<String>);
    let name = create_rw_signal(String::new());
    let role = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let hiring = create_rw_signal(false);
    let pending = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);
    let state = store_value(state);
    let assistants = store_value(assistants);
    let lifetime = store_value(lifetime);

    let mutate = move |change: &dyn Fn(&mut Roster)| {
        roster.update(|roster| change(roster));
        state.with_value(|state| {
            roster.with_untracked(|roster| state.save(keys::AI_EMPLOYEES_KEY, roster))
        });
    };

    let finish_hire = move |(name, role): (String, String), personality: Option<String>| {
        let now = next_monotonic_timestamp_ms();
        mutate(&|roster: &mut Roster| {
            roster.hire(&name, &role, personality.clone(), now);
        });
        hiring.set(false);
    };

    let hire = move |_| {
        if hiring.get_untracked() {
            return;
        }
        let Some(draft) = roster::new_hire(&name.get_untracked(), &role.get_untracked()) else {
            return;
        };
        name.set(String::new());
        role.set(String::new());
        error.set(None);

        let prepared = state.with_value(|state| roster::personality_request(state, &draft.0, &draft.1));
        let request = match prepared {
            Ok(request) => request,
            Err(err) => {
                logging::warn!("personality for `{}` skipped: {err}", draft.0);
                finish_hire(draft, None);
                return;
            }
        };

        hiring.set(true);
        let chat_service = assistants.with_value(|services| services.chat.clone());
        lifetime.with_value(|lifetime| {
            lifetime.spawn(
                async move { chat_service.complete(request).await },
                move |result: Result<String, AssistantError>| {
                    let personality = match result {
                        Ok(text) => Some(text),
                        Err(err) => {
                            logging::warn!("personality for `{}` failed: {err}", draft.0);
                            None
                        }
                    };
                    finish_hire(draft, personality);
                },
            )
        });
    };

    let remove = move |id: String| {
        mutate(&|roster: &mut Roster| {
            roster.remove(&id);
        });
        log.update(|log| log.forget(&id));
        if selected.get_untracked().as_deref() == Some(id.as_str()) {
            selected.set(None);
        }
    };

    let current = create_memo(move |_| {
        selected
            .get()
            .and_then(|id| roster.with(|roster| roster.get(&id).cloned()))
    });
    let lines = create_memo(move |_| {
        selected
            .get()
            .map(|id| log.with(|log| log.lines_for(&id)))
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    });

    let send = move || {
        let text = message.get_untracked();
        if text.trim().is_empty() || pending.get_untracked() {
            return;
        }
        let Some(employee) = current.get_untracked() else {
            return;
        };
        let prepared = state.with_value(|state| roster::chat_request(state, &employee, &text));
        let request = match prepared {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        error.set(None);
        message.set(String::new());
        log.update(|log| log.push_user(&employee.id, &text));
        pending.set(true);

        let chat_service = assistants.with_value(|services| services.chat.clone());
        lifetime.with_value(|lifetime| {
            lifetime.spawn(
                async move { chat_service.complete(request).await },
                move |result: Result<String, AssistantError>| {
                    pending.set(false);
                    let reply = match result {
                        Ok(reply) => reply,
                        Err(err) => {
                            logging::warn!("reply from `{}` failed: {err}", employee.name);
                            FALLBACK_REPLY.to_string()
                        }
                    };
                    log.update(|log| log.push_reply(&employee.id, &employee.name, &reply));
                },
            )
        });
    };

    let export = move |_| {
        let outcome = roster
            .with_untracked(|roster| log.with_untracked(|log| roster::export_backup(roster, log)))
            .map_err(|err| err.to_string())
            .and_then(|text| browser::download_text(BACKUP_FILE_NAME, "application/json", &text));
        if let Err(err) = outcome {
            error.set(Some(format!("Export failed: {err}")));
        }
    };

    let import = move |ev: ev::Event| {
        let Some(file) = browser::picked_file(&ev) else {
            return;
        };
        lifetime.with_value(|lifetime| {
            lifetime.spawn(
                async move { file.read_text().await },
                move |result: Result<String, String>| {
                    let parsed = result
                        .and_then(|text| roster::import_backup(&text).map_err(|err| err.to_string()));
                    match parsed {
                        Ok((imported, imported_log)) => {
                            mutate(&|roster: &mut Roster| *roster = imported.clone());
                            log.set(imported_log);
                            selected.set(None);
                            error.set(None);
                        }
                        Err(err) => error.set(Some(format!("Import failed: {err}"))),
                    }
                },
            )
        });
    };

    view! {
        <div class="app-ai-employees" data-app="AI Employees">
            <aside class="employees-sidebar">
                <ToolBar aria_label="Employees">
                    <Heading>"AI Employees"</Heading>
                    <Cluster justify=LayoutJustify::End gap=LayoutGap::Sm>
                        <IconButton
                            icon=IconName::ArrowDownload
                            aria_label="Export employees"
                            title="Export employees"
                            disabled=Signal::derive(move || roster.with(|r| r.employees.is_empty()))
                            on_click=Callback::new(export)
                        />
                        <label class="employees-import ui-icon-button" title="Import employees">
                            <Icon icon=IconName::ArrowUpload />
                            <input
                                type="file"
                                accept=".json,application/json"
                                aria-label="Import employees"
                                on:change=import
                            />
                        </label>
                    </Cluster>
                </ToolBar>

                <Panel layout_class="employees-hire">
                    <Stack gap=LayoutGap::Sm>
                        <TextField
                            placeholder="Name"
                            aria_label="Employee name"
                            value=name
                            on_input=Callback::new(move |ev| name.set(event_target_value(&ev)))
                        />
                        <TextField
                            placeholder="Role"
                            aria_label="Employee role"
                            value=role
                            on_input=Callback::new(move |ev| role.set(event_target_value(&ev)))
                        />
                        <Button
                            variant=ButtonVariant::Primary
                            leading_icon=IconName::Add
                            disabled=Signal::derive(move || {
                                hiring.get() || roster::new_hire(&name.get(), &role.get()).is_none()
                            })
                            on_click=Callback::new(hire)
                        >
                            {move || if hiring.get() { "Creating..." } else { "Add Employee" }}
                        </Button>
                    </Stack>
                </Panel>

                <ListSurface aria_label="Employees">
                    <For
                        each=move || roster.with(|roster| roster.employees.clone())
                        key=|employee| employee.id.clone()
                        let:employee
                    >
                        <EmployeeRow employee selected on_remove=Callback::new(remove) />
                    </For>
                </ListSurface>
            </aside>

            <main class="employees-chat">
                <Show
                    when=move || current.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <EmptyState
                                icon=IconName::People
                                title="Select an employee to start chatting"
                            />
                        }
                    }
                >
                    <ToolBar aria_label="Conversation">
                        <Heading>
                            {move || {
                                current
                                    .get()
                                    .map(|e| format!("Chat with {} ({})", e.name, e.role))
                                    .unwrap_or_default()
                            }}
                        </Heading>
                    </ToolBar>
                    <div class="chat-transcript" role="log" aria-live="polite">
                        <For
                            each=move || lines.get()
                            key=|(index, line)| format!("{index}:{line}")
                            let:entry
                        >
                            <div
                                class="chat-message"
                                data-role=if roster::is_user_line(&entry.1) { "user" } else { "assistant" }
                            >
                                <p>{entry.1}</p>
                            </div>
                        </For>
                        <Show when=move || pending.get() fallback=|| ()>
                            <div class="chat-message chat-pending" data-role="assistant" role="status">
                                "Thinking..."
                            </div>
                        </Show>
                    </div>
                    <ToolBar aria_label="Message">
                        <TextField
                            placeholder="Type your message..."
                            aria_label="Message"
                            value=message
                            on_input=Callback::new(move |ev| message.set(event_target_value(&ev)))
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
                </Show>

                <Show when=move || error.get().is_some() fallback=|| ()>
                    <div class="chat-error" role="alert">{move || error.get().unwrap_or_default()}</div>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn EmployeeRow(
    employee: Employee,
    selected: RwSignal<Option<String>>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let Employee {
        id,
        name,
        role,
        avatar,
        ..
    } = employee;
    let is_selected = {
        let id = id.clone();
        Signal::derive(move || selected.get().as_deref() == Some(id.as_str()))
    };
    let select_id = id.clone();
    let alt = format!("{name} avatar");
    let title = name.clone();

    view! {
        <div class="employee-row" role="listitem">
            <Button
                variant=ButtonVariant::Quiet
                selected=is_selected
                title=title
                on_click=Callback::new(move |_| selected.set(Some(select_id.clone())))
            >
                <img class="employee-avatar" src=avatar alt=alt width="32" height="32" />
                <span class="employee-name">{name}</span>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{role}</Text>
            </Button>
            <IconButton
                icon=IconName::Delete
                aria_label="Remove employee"
                title="Remove employee"
                on_click=Callback::new(move |_| on_remove.call(id.clone()))
            />
        </div>
    }
}
