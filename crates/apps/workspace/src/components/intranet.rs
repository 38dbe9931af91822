use desktop_app_assistant::format_saved_date;
use desktop_app_contract::StateService;
use desktop_app_explorer::format_file_size;
use leptos::*;
use platform_host::{keys, next_monotonic_timestamp_ms};
use system_ui::prelude::*;

use crate::browser;
use crate::files::{IntranetEntry, IntranetFiles, ROOT_ID, TEXT_MIME};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

#[component]
/// Intranet storage window contents.
pub fn IntranetApp(
    /// Persistence handle for the file list.
    state: StateService,
) -> impl IntoView {
    let mut stored = state.load::<IntranetFiles>(keys::INTRANET_FILES_KEY);
    stored.normalize();
    let files = create_rw_signal(stored);
    let current = create_rw_signal(ROOT_ID.to_string());
    let search = create_rw_signal(String::new());
    let new_name = create_rw_signal(String::new());
    let editing = create_rw_signal(None::<String>);
    let draft = create_rw_signal(String::new());
    let view_mode = create_rw_signal(ViewMode::Grid);
    let error = create_rw_signal(None::<String>);
    let state = store_value(state);

    let persist = move || {
        state.with_value(|state| {
            files.with_untracked(|files| state.save(keys::INTRANET_FILES_KEY, files))
        });
    };

    let visible = create_memo(move |_| {
        files.with(|files| files.children(&current.get(), &search.get()))
    });
    let breadcrumbs = create_memo(move |_| files.with(|files| files.breadcrumbs(&current.get())));
    let editing_name = create_memo(move |_| {
        editing
            .get()
            .and_then(|id| files.with(|files| files.entry(&id).map(|entry| entry.name.clone())))
    });

    let navigate = move |folder: String| {
        search.set(String::new());
        current.set(folder);
    };
    let open_editor = move |id: String| {
        let content = files.with_untracked(|files| {
            files
                .entry(&id)
                .filter(|entry| !entry.is_folder())
                .map(|entry| entry.content.clone().unwrap_or_default())
        });
        if let Some(content) = content {
            draft.set(content);
            editing.set(Some(id));
        }
    };
    let new_folder = move |_| {
        let (parent, name) = (current.get_untracked(), new_name.get_untracked());
        let now = next_monotonic_timestamp_ms();
        if files.try_update(|files| files.create_folder(&parent, &name, now)).flatten().is_some() {
            persist();
            new_name.set(String::new());
        }
    };
    let new_file = move |_| {
        let (parent, name) = (current.get_untracked(), new_name.get_untracked());
        let now = next_monotonic_timestamp_ms();
        if let Some(id) = files.try_update(|files| files.create_text_file(&parent, &name, now)).flatten() {
            persist();
            new_name.set(String::new());
            open_editor(id);
        }
    };
    let save = move |_| {
        let Some(id) = editing.get_untracked() else {
            return;
        };
        let content = draft.get_untracked();
        let now = next_monotonic_timestamp_ms();
        files.update(|files| {
            files.save_content(&id, &content, now);
        });
        persist();
        editing.set(None);
    };
    let delete = move |id: String| {
        files.update(|files| {
            files.delete(&id);
        });
        persist();
        let still_editing = editing
            .get_untracked()
            .is_some_and(|open| files.with_untracked(|files| files.entry(&open).is_some()));
        if !still_editing {
            editing.set(None);
        }
    };
    let download = move |id: String| {
        let Some(entry) = files.with_untracked(|files| files.entry(&id).cloned()) else {
            return;
        };
        let mime = entry.mime_type.as_deref().unwrap_or(TEXT_MIME);
        let text = entry.content.as_deref().unwrap_or_default();
        if let Err(err) = browser::download_text(&entry.name, mime, text) {
            logging::warn!("intranet download failed: {err}");
            error.set(Some(err));
        }
    };

    view! {
        <div class="app-intranet" data-app="Intranet">
            <ToolBar aria_label="Intranet">
                <Heading>"Intranet Storage"</Heading>
                <TextField
                    placeholder="New item name"
                    aria_label="New item name"
                    value=new_name
                    on_input=Callback::new(move |ev| new_name.set(event_target_value(&ev)))
                />
                <Button leading_icon=IconName::Folder on_click=Callback::new(new_folder)>
                    "New Folder"
                </Button>
                <Button leading_icon=IconName::DocumentText on_click=Callback::new(new_file)>
                    "New File"
                </Button>
                <Cluster justify=LayoutJustify::End>
                    <Button
                        size=ButtonSize::Sm
                        selected=Signal::derive(move || view_mode.get() == ViewMode::Grid)
                        on_click=Callback::new(move |_| view_mode.set(ViewMode::Grid))
                    >
                        "Grid"
                    </Button>
                    <Button
                        size=ButtonSize::Sm
                        selected=Signal::derive(move || view_mode.get() == ViewMode::List)
                        on_click=Callback::new(move |_| view_mode.set(ViewMode::List))
                    >
                        "List"
                    </Button>
                </Cluster>
            </ToolBar>

            <ToolBar aria_label="Navigation">
                <nav class="intranet-breadcrumbs" aria-label="Path">
                    <For
                        each=move || breadcrumbs.get()
                        key=|(id, name)| format!("{id}:{name}")
                        let:crumb
                    >
                        {
                            let (id, name) = crumb;
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    size=ButtonSize::Sm
                                    on_click=Callback::new(move |_| navigate(id.clone()))
                                >
                                    {name}
                                </Button>
                            }
                        }
                    </For>
                </nav>
                <TextField
                    input_type="search"
                    placeholder="Search files..."
                    aria_label="Search this folder"
                    value=search
                    on_input=Callback::new(move |ev| search.set(event_target_value(&ev)))
                />
            </ToolBar>

            <Show when=move || editing.get().is_some() fallback=|| ()>
                <Panel layout_class="intranet-editor">
                    <ToolBar aria_label="Editor">
                        <Heading>{move || format!("Editing {}", editing_name.get().unwrap_or_default())}</Heading>
                        <Cluster justify=LayoutJustify::End gap=LayoutGap::Sm>
                            <Button
                                variant=ButtonVariant::Primary
                                leading_icon=IconName::Save
                                on_click=Callback::new(save)
                            >
                                "Save"
                            </Button>
                            <IconButton
                                icon=IconName::Dismiss
                                aria_label="Close editor"
                                title="Close editor"
                                on_click=Callback::new(move |_| editing.set(None))
                            />
                        </Cluster>
                    </ToolBar>
                    <TextArea
                        aria_label="File content"
                        rows=16
                        value=draft
                        on_input=Callback::new(move |ev| draft.set(event_target_value(&ev)))
                    />
                </Panel>
            </Show>

            <div
                class="intranet-items"
                data-view-mode=move || match view_mode.get() {
                    ViewMode::Grid => "grid",
                    ViewMode::List => "list",
                }
            >
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=move || {
                        let title = if search.with(|search| search.trim().is_empty()) {
                            "Use the buttons above to add content"
                        } else {
                            "No files found"
                        };
                        view! { <EmptyState icon=IconName::Folder title /> }
                    }
                >
                    <For each=move || visible.get() key=|entry| entry.id.clone() let:entry>
                        <IntranetItem
                            entry
                            on_open=Callback::new(navigate)
                            on_edit=Callback::new(open_editor)
                            on_download=Callback::new(download)
                            on_delete=Callback::new(delete)
                        />
                    </For>
                </Show>
            </div>

            <Show when=move || error.get().is_some() fallback=|| ()>
                <div class="intranet-error" role="alert">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <StatusBar>
                <Text role=TextRole::Caption>{move || format!("{} item(s)", visible.get().len())}</Text>
            </StatusBar>
        </div>
    }
}

#[component]
fn IntranetItem(
    entry: IntranetEntry,
    on_open: Callback<String>,
    on_edit: Callback<String>,
    on_download: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let is_folder = entry.is_folder();
    let icon = if is_folder {
        IconName::Folder
    } else {
        IconName::DocumentText
    };
    let details = [
        entry.size.filter(|_| !is_folder).map(format_file_size),
        entry.modified_ms.map(format_saved_date),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");
    let id = store_value(entry.id);
    let activate = move |_| {
        let id = id.get_value();
        if is_folder {
            on_open.call(id);
        } else {
            on_edit.call(id);
        }
    };

    view! {
        <div class="intranet-item" role="listitem">
            <Button
                variant=ButtonVariant::Quiet
                title=entry.name.clone()
                on_dblclick=Callback::new(activate)
            >
                <Icon icon size=IconSize::Lg />
                <span class="intranet-item-name">{entry.name}</span>
                <Text role=TextRole::Caption tone=TextTone::Secondary>{details}</Text>
            </Button>
            <Cluster gap=LayoutGap::Sm layout_class="intranet-item-actions">
                {(!is_folder)
                    .then(|| {
                        view! {
                            <IconButton
                                icon=IconName::Edit
                                aria_label="Edit"
                                title="Edit"
                                on_click=Callback::new(move |_| on_edit.call(id.get_value()))
                            />
                            <IconButton
                                icon=IconName::ArrowDownload
                                aria_label="Download"
                                title="Download"
                                on_click=Callback::new(move |_| on_download.call(id.get_value()))
                            />
                        }
                    })}
                <IconButton
                    icon=IconName::Delete
                    aria_label="Delete"
                    title="Delete"
                    on_click=Callback::new(move |_| on_delete.call(id.get_value()))
                />
            </Cluster>
        </div>
    }
}
