//! Built-in App Store pane: a static catalog with local install toggles.

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct CatalogEntry {
    name: &'static str,
    description: &'static str,
    developer: &'static str,
    category: &'static str,
    rating: f32,
}

const CATALOG: [CatalogEntry; 3] = [
    CatalogEntry {
        name: "VS Code Web",
        description: "Code editing. Redefined.",
        developer: "Microsoft",
        category: "Development",
        rating: 4.8,
    },
    CatalogEntry {
        name: "Figma Web",
        description: "Design and prototype together",
        developer: "Figma",
        category: "Design",
        rating: 4.9,
    },
    CatalogEntry {
        name: "Spotify Web",
        description: "Music for everyone",
        developer: "Spotify",
        category: "Entertainment",
        rating: 4.7,
    },
];

const CATEGORIES: [&str; 6] = [
    "All",
    "Development",
    "Design",
    "Entertainment",
    "Productivity",
    "Games",
];

fn filter_catalog(query: &str, category: &str) -> Vec<CatalogEntry> {
    let needle = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|entry| category == "All" || entry.category == category)
        .filter(|entry| {
            needle.is_empty()
                || entry.name.to_lowercase().contains(&needle)
                || entry.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub(super) fn mount_app_store_app(_: AppMountContext) -> View {
    view! { <AppStorePane /> }.into_view()
}

#[component]
fn AppStorePane() -> impl IntoView {
    let query = create_rw_signal(String::new());
    let category = create_rw_signal("All".to_string());
    let installed = create_rw_signal(vec!["Spotify Web"]);
    let entries = Signal::derive(move || filter_catalog(&query.get(), &category.get()));

    view! {
        <Stack padding=LayoutPadding::Md layout_class="app-store">
            <ToolBar aria_label="App Store filters">
                <TextField
                    placeholder="Search apps"
                    value=query
                    on_input=Callback::new(move |ev| query.set(event_target_value(&ev)))
                />
                <SelectField
                    aria_label="Category"
                    value=category
                    on_change=Callback::new(move |ev| category.set(event_target_value(&ev)))
                >
                    {CATEGORIES
                        .iter()
                        .map(|name| view! { <option value=*name>{*name}</option> })
                        .collect_view()}
                </SelectField>
            </ToolBar>
            <Show
                when=move || !entries.get().is_empty()
                fallback=|| view! { <EmptyState icon=IconName::Store title="No apps match" /> }
            >
                <Grid>
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let name = entry.name;
                                let is_installed = move || installed.get().contains(&name);
                                view! {
                                    <Panel title=entry.name>
                                        <Text>{entry.description}</Text>
                                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                                            {format!(
                                                "{} · {} · ★ {:.1}",
                                                entry.developer,
                                                entry.category,
                                                entry.rating,
                                            )}
                                        </Text>
                                        <Button
                                            variant=ButtonVariant::Primary
                                            on_click=Callback::new(move |_| {
                                                installed
                                                    .update(|list| {
                                                        if let Some(pos) = list.iter().position(|n| *n == name) {
                                                            list.remove(pos);
                                                        } else {
                                                            list.push(name);
                                                        }
                                                    })
                                            })
                                        >
                                            {move || if is_installed() { "Uninstall" } else { "Install" }}
                                        </Button>
                                    </Panel>
                                }
                            })
                            .collect_view()
                    }}
                </Grid>
            </Show>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_filter_combines_query_and_category() {
        let names = |entries: Vec<CatalogEntry>| -> Vec<&str> {
            entries.into_iter().map(|e| e.name).collect()
        };
        assert_eq!(filter_catalog("", "All").len(), CATALOG.len());
        assert_eq!(names(filter_catalog("design", "All")), vec!["Figma Web"]);
        assert_eq!(names(filter_catalog("", "Entertainment")), vec!["Spotify Web"]);
        assert!(filter_catalog("figma", "Games").is_empty());
    }
}
