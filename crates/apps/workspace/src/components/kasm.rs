use desktop_app_assistant::format_saved_date;
use desktop_app_contract::StateService;
use leptos::*;
use platform_host::{keys, next_monotonic_timestamp_ms};
use system_ui::prelude::*;

use crate::browser;
use crate::servers::{normalize_server_url, KasmServer, ServerList};

#[component]
/// Kasm Workspaces window contents.
pub fn KasmApp(
    /// Persistence handle for the server list.
    state: StateService,
) -> impl IntoView {
    let list = create_rw_signal(state.load::<ServerList>(keys::KASM_SERVERS_KEY));
    let selected = create_rw_signal(None::<String>);
    let show_form = create_rw_signal(false);
    let name = create_rw_signal(String::new());
    let url = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let state = store_value(state);

    let mutate = move |change: &dyn Fn(&mut ServerList)| {
        list.update(|list| change(list));
        state.with_value(|state| list.with_untracked(|list| state.save(keys::KASM_SERVERS_KEY, list)));
    };

    let close_form = move || {
        show_form.set(false);
        name.set(String::new());
        url.set(String::new());
    };
    let can_add = Signal::derive(move || {
        !name.with(|name| name.trim().is_empty()) && url.with(|url| normalize_server_url(url).is_some())
    });
    let add = move |_| {
        if !can_add.get_untracked() {
            return;
        }
        let (server_name, server_url) = (name.get_untracked(), url.get_untracked());
        let now = next_monotonic_timestamp_ms();
        mutate(&|list: &mut ServerList| {
            list.add(&server_name, &server_url, now);
        });
        close_form();
    };
    let remove = move |id: String| {
        mutate(&|list: &mut ServerList| {
            list.remove(&id);
        });
        if selected.get_untracked().as_deref() == Some(id.as_str()) {
            selected.set(None);
        }
    };
    let open = move |server_url: String| {
        if let Err(err) = browser::open_in_new_tab(&server_url) {
            logging::warn!("kasm open failed: {err}");
            error.set(Some(err));
        }
    };

    let current = create_memo(move |_| {
        selected
            .get()
            .and_then(|id| list.with(|list| list.get(&id).cloned()))
    });

    view! {
        <div class="app-kasm" data-app="Kasm Workspaces">
            <aside class="kasm-sidebar">
                <ToolBar aria_label="Servers">
                    <Heading>"Kasm Workspaces"</Heading>
                    <Cluster justify=LayoutJustify::End>
                        <IconButton
                            icon=IconName::Add
                            aria_label="Add server"
                            title="Add server"
                            pressed=show_form
                            on_click=Callback::new(move |_| show_form.update(|open| *open = !*open))
                        />
                    </Cluster>
                </ToolBar>

                <Show when=move || show_form.get() fallback=|| ()>
                    <Panel title="Add Kasm Server" layout_class="kasm-add">
                        <Stack gap=LayoutGap::Sm>
                            <FieldGroup title="Server Name">
                                <TextField
                                    placeholder="My Kasm Server"
                                    value=name
                                    on_input=Callback::new(move |ev| name.set(event_target_value(&ev)))
                                />
                            </FieldGroup>
                            <FieldGroup title="Server URL">
                                <TextField
                                    input_type="url"
                                    placeholder="https://kasm.example.com"
                                    value=url
                                    on_input=Callback::new(move |ev| url.set(event_target_value(&ev)))
                                />
                            </FieldGroup>
                            <Cluster justify=LayoutJustify::End gap=LayoutGap::Sm>
                                <Button on_click=Callback::new(move |_| close_form())>"Cancel"</Button>
                                <Button
                                    variant=ButtonVariant::Primary
                                    disabled=Signal::derive(move || !can_add.get())
                                    on_click=Callback::new(add)
                                >
                                    "Add Server"
                                </Button>
                            </Cluster>
                        </Stack>
                    </Panel>
                </Show>

                <Show
                    when=move || !list.with(|list| list.servers.is_empty())
                    fallback=|| {
                        view! {
                            <EmptyState
                                icon=IconName::Display
                                title="No Kasm servers added yet"
                                description="Click the + button to add one."
                            />
                        }
                    }
                >
                    <ListSurface aria_label="Kasm servers">
                        <For
                            each=move || list.with(|list| list.servers.clone())
                            key=|server| server.id.clone()
                            let:server
                        >
                            <ServerRow
                                server
                                selected
                                on_open=Callback::new(open)
                                on_remove=Callback::new(remove)
                            />
                        </For>
                    </ListSurface>
                </Show>
            </aside>

            <main class="kasm-viewer">
                {move || match current.get() {
                    Some(server) => {
                        view! {
                            <iframe
                                class="kasm-frame"
                                src=server.url
                                title=server.name
                                allow="clipboard-read; clipboard-write; fullscreen"
                            ></iframe>
                        }
                            .into_view()
                    }
                    None => {
                        view! {
                            <EmptyState
                                icon=IconName::Monitor
                                title="Select a server from the sidebar to view it."
                            />
                        }
                            .into_view()
                    }
                }}
                <Show when=move || error.get().is_some() fallback=|| ()>
                    <div class="kasm-error" role="alert">{move || error.get().unwrap_or_default()}</div>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn ServerRow(
    server: KasmServer,
    selected: RwSignal<Option<String>>,
    on_open: Callback<String>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let KasmServer {
        id,
        name,
        url,
        added_ms,
    } = server;
    let is_selected = {
        let id = id.clone();
        Signal::derive(move || selected.get().as_deref() == Some(id.as_str()))
    };
    let select_id = id.clone();
    let title = url.clone();
    let added = added_ms.map(|ms| format!("Added {}", format_saved_date(ms)));

    view! {
        <div class="kasm-server" role="listitem">
            <Button
                variant=ButtonVariant::Quiet
                selected=is_selected
                title=title
                on_click=Callback::new(move |_| selected.set(Some(select_id.clone())))
            >
                <Icon icon=IconName::Display />
                <span class="kasm-server-name">{name}</span>
                {added.map(|added| view! { <Text role=TextRole::Caption tone=TextTone::Secondary>{added}</Text> })}
            </Button>
            <IconButton
                icon=IconName::Open
                aria_label="Open in new tab"
                title="Open in new tab"
                on_click=Callback::new(move |_| on_open.call(url.clone()))
            />
            <IconButton
                icon=IconName::Delete
                aria_label="Remove server"
                title="Remove server"
                on_click=Callback::new(move |_| on_remove.call(id.clone()))
            />
        </div>
    }
}
