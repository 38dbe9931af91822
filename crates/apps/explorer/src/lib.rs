//! File Explorer desktop app over a persisted in-memory file tree.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod tree;

use desktop_app_contract::{AppMountContext, StateService};
use leptos::*;
use platform_host::{keys, next_monotonic_timestamp_ms};
use system_ui::prelude::*;

pub use tree::{format_file_size, EntryKind, FileEntry, FileTree, ROOT_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

/// Mounts the File Explorer into a desktop window.
pub fn mount_explorer_app(context: AppMountContext) -> View {
    view! { <ExplorerApp state=context.services.state /> }.into_view()
}

#[component]
/// File Explorer window contents.
pub fn ExplorerApp(
    /// Persistence handle for the tree blob.
    state: StateService,
) -> impl IntoView {
    let tree = create_rw_signal(state.load::<FileTree>(keys::FILE_EXPLORER_TREE_KEY));
    let current = create_rw_signal(ROOT_ID.to_string());
    let search = create_rw_signal(String::new());
    let selected = create_rw_signal(None::<String>);
    let view_mode = create_rw_signal(ViewMode::Grid);
    let state = store_value(state);

    let mutate = move |change: &dyn Fn(&mut FileTree)| {
        tree.update(|tree| change(tree));
        state.with_value(|state| {
            tree.with_untracked(|tree| state.save(keys::FILE_EXPLORER_TREE_KEY, tree))
        });
    };

    let visible = create_memo(move |_| {
        tree.with(|tree| tree.children(&current.get(), &search.get()))
    });
    let breadcrumbs = create_memo(move |_| tree.with(|tree| tree.breadcrumbs(&current.get())));

    let navigate = move |folder: String| {
        selected.set(None);
        search.set(String::new());
        current.set(folder);
    };
    let go_up = move |_| {
        if let Some(parent) = tree.with_untracked(|tree| tree.parent_of(&current.get_untracked())) {
            navigate(parent);
        }
    };
    let new_folder = move |_| {
        let parent = current.get_untracked();
        let now = next_monotonic_timestamp_ms();
        mutate(&|tree: &mut FileTree| {
            tree.create_folder(&parent, now);
        });
    };
    let delete_selected = move |_| {
        if let Some(id) = selected.get_untracked() {
            mutate(&|tree: &mut FileTree| {
                tree.delete(&id);
            });
            selected.set(None);
        }
    };

    view! {
        <div class="app-explorer" data-app="File Explorer">
            <ToolBar aria_label="Navigation">
                <IconButton
                    icon=IconName::ArrowUp
                    aria_label="Up"
                    disabled=Signal::derive(move || current.get() == ROOT_ID)
                    on_click=Callback::new(go_up)
                />
                <nav class="explorer-breadcrumbs" aria-label="Path">
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
                    placeholder="Search"
                    aria_label="Search this folder"
                    value=search
                    on_input=Callback::new(move |ev| search.set(event_target_value(&ev)))
                />
            </ToolBar>

            <ToolBar aria_label="Actions">
                <Button leading_icon=IconName::Add on_click=Callback::new(new_folder)>"New"</Button>
                <Button
                    leading_icon=IconName::Delete
                    variant=ButtonVariant::Danger
                    disabled=Signal::derive(move || selected.get().is_none())
                    on_click=Callback::new(delete_selected)
                >
                    "Delete"
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

            <div
                class="explorer-items"
                data-view-mode=move || match view_mode.get() {
                    ViewMode::Grid => "grid",
                    ViewMode::List => "list",
                }
            >
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=|| view! { <EmptyState icon=IconName::Folder title="This folder is empty" /> }
                >
                    <For each=move || visible.get() key=|entry| entry.id.clone() let:entry>
                        <ExplorerItem
                            entry=entry
                            selected=selected
                            list_mode=Signal::derive(move || view_mode.get() == ViewMode::List)
                            on_open=Callback::new(navigate)
                        />
                    </For>
                </Show>
            </div>

            <StatusBar>
                <Text role=TextRole::Caption>{move || format!("{} item(s)", visible.get().len())}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || {
                        selected
                            .get()
                            .and_then(|id| tree.with(|tree| tree.entry(&id).map(|e| e.name.clone())))
                            .map(|name| format!("Selected: {name}"))
                            .unwrap_or_else(|| "Ready".to_string())
                    }}
                </Text>
            </StatusBar>
        </div>
    }
}

#[component]
fn ExplorerItem(
    entry: FileEntry,
    selected: RwSignal<Option<String>>,
    list_mode: Signal<bool>,
    on_open: Callback<String>,
) -> impl IntoView {
    let id = entry.id.clone();
    let is_selected = {
        let id = id.clone();
        Signal::derive(move || selected.get().as_deref() == Some(id.as_str()))
    };
    let icon = if entry.is_folder() {
        IconName::Folder
    } else {
        IconName::DocumentText
    };
    let size = entry.size.map(format_file_size).unwrap_or_default();
    let is_folder = entry.is_folder();
    let select_id = id.clone();

    view! {
        <Button
            variant=ButtonVariant::Quiet
            selected=is_selected
            title=entry.name.clone()
            on_click=Callback::new(move |_| selected.set(Some(select_id.clone())))
            on_dblclick=Callback::new(move |_| {
                if is_folder {
                    on_open.call(id.clone());
                }
            })
        >
            <Icon icon size=IconSize::Lg />
            <span class="explorer-item-name">{entry.name.clone()}</span>
            {entry.cloud.then(|| view! { <Text role=TextRole::Caption tone=TextTone::Accent>"Cloud"</Text> })}
            <Show when=move || list_mode.get() fallback=|| ()>
                <span class="explorer-item-size">{size.clone()}</span>
            </Show>
        </Button>
    }
}
