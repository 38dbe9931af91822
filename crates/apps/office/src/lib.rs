//! Office desktop apps: Word (single plain-text document) and Excel (formula grid).
//!
//! Both persist through the injected [`StateService`] on every edit.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod sheet;

use desktop_app_contract::{AppMountContext, StateService};
use leptos::*;
use platform_host::keys;
use system_ui::prelude::*;

pub use document::WordDocument;
pub use sheet::{CellRef, FormulaError, Sheet};

/// Mounts Word into a desktop window.
pub fn mount_word_app(context: AppMountContext) -> View {
    view! { <WordApp state=context.services.state /> }.into_view()
}

/// Mounts Excel into a desktop window.
pub fn mount_excel_app(context: AppMountContext) -> View {
    view! { <ExcelApp state=context.services.state /> }.into_view()
}

#[component]
/// Word window contents.
pub fn WordApp(
    /// Persistence handle for the document blob.
    state: StateService,
) -> impl IntoView {
    let document = create_rw_signal(state.load::<WordDocument>(keys::WORD_DOCUMENT_KEY));
    let state = store_value(state);

    let edit = move |change: &dyn Fn(&mut WordDocument)| {
        document.update(|doc| change(doc));
        state.with_value(|state| {
            document.with_untracked(|doc| state.save(keys::WORD_DOCUMENT_KEY, doc))
        });
    };

    view! {
        <div class="app-word" data-app="Word">
            <ToolBar aria_label="Document">
                <TextField
                    variant=FieldVariant::Inset
                    aria_label="Document title"
                    value=Signal::derive(move || document.with(|doc| doc.title.clone()))
                    on_input=Callback::new(move |ev| {
                        let title = event_target_value(&ev);
                        edit(&|doc: &mut WordDocument| doc.title = title.clone());
                    })
                />
                <IconButton
                    icon=IconName::Save
                    aria_label="Save"
                    title="Save"
                    on_click=Callback::new(move |_| edit(&|_: &mut WordDocument| {}))
                />
            </ToolBar>

            <div class="word-page">
                <TextArea
                    placeholder="Start typing..."
                    aria_label="Document body"
                    value=Signal::derive(move || document.with(|doc| doc.body.clone()))
                    on_input=Callback::new(move |ev| {
                        let body = event_target_value(&ev);
                        edit(&|doc: &mut WordDocument| doc.body = body.clone());
                    })
                />
            </div>

            <StatusBar>
                <Text role=TextRole::Caption>
                    {move || format!("Words: {}", document.with(WordDocument::word_count))}
                </Text>
                <Text role=TextRole::Caption>
                    {move || format!("Characters: {}", document.with(WordDocument::char_count))}
                </Text>
            </StatusBar>
        </div>
    }
}

#[component]
/// Excel window contents.
pub fn ExcelApp(
    /// Persistence handle for the cell map.
    state: StateService,
) -> impl IntoView {
    let sheet = create_rw_signal(state.load::<Sheet>(keys::EXCEL_CELLS_KEY));
    let selected = create_rw_signal(None::<CellRef>);
    let state = store_value(state);

    let write_cell = move |cell: CellRef, input: String| {
        sheet.update(|sheet| sheet.set(cell, &input));
        state.with_value(|state| sheet.with_untracked(|sheet| state.save(keys::EXCEL_CELLS_KEY, sheet)));
    };

    let formula_value = Signal::derive(move || {
        selected
            .get()
            .map(|cell| sheet.with(|sheet| sheet.raw(cell).to_string()))
            .unwrap_or_default()
    });

    view! {
        <div class="app-excel" data-app="Excel">
            <ToolBar aria_label="Formula bar">
                <Text role=TextRole::Code tone=TextTone::Secondary>
                    {move || selected.get().map(CellRef::label).unwrap_or_else(|| "fx".to_string())}
                </Text>
                <TextField
                    variant=FieldVariant::Inset
                    placeholder="Enter formula"
                    aria_label="Formula"
                    disabled=Signal::derive(move || selected.get().is_none())
                    value=formula_value
                    on_input=Callback::new(move |ev| {
                        if let Some(cell) = selected.get_untracked() {
                            write_cell(cell, event_target_value(&ev));
                        }
                    })
                />
            </ToolBar>

            <div class="excel-grid-wrap">
                <table class="excel-grid" role="grid" aria-label="Spreadsheet">
                    <thead>
                        <tr>
                            <th></th>
                            {sheet::column_letters().map(|letter| view! { <th>{letter.to_string()}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {(1..=sheet::ROWS)
                            .map(|row| {
                                view! {
                                    <tr>
                                        <th>{row}</th>
                                        {(0..sheet::COLUMNS)
                                            .filter_map(|column| CellRef::new(column, row))
                                            .map(|cell| {
                                                view! {
                                                    <SheetCell
                                                        cell=cell
                                                        sheet=sheet
                                                        selected=selected
                                                        on_edit=Callback::new(move |input| write_cell(cell, input))
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <StatusBar>
                <Text role=TextRole::Caption>
                    {move || {
                        selected
                            .get()
                            .filter(|cell| sheet.with(|sheet| sheet.raw(*cell).starts_with('=')))
                            .and_then(|cell| sheet.with(|sheet| sheet.evaluate(cell).err()))
                            .map(|err| err.to_string())
                            .unwrap_or_else(|| "Ready".to_string())
                    }}
                </Text>
            </StatusBar>
        </div>
    }
}

#[component]
fn SheetCell(
    cell: CellRef,
    sheet: RwSignal<Sheet>,
    selected: RwSignal<Option<CellRef>>,
    on_edit: Callback<String>,
) -> impl IntoView {
    let is_selected = create_memo(move |_| selected.get() == Some(cell));
    // The selected cell shows its raw input, every other cell its evaluated text.
    let text = Signal::derive(move || {
        sheet.with(|sheet| {
            if is_selected.get() {
                sheet.raw(cell).to_string()
            } else {
                sheet.display(cell)
            }
        })
    });

    view! {
        <td data-cell=cell.label() data-ui-selected=move || if is_selected.get() { "true" } else { "false" }>
            <input
                class="excel-cell"
                aria-label=cell.label()
                prop:value=move || text.get()
                on:focus=move |_| selected.set(Some(cell))
                on:input=move |ev| on_edit.call(event_target_value(&ev))
            />
        </td>
    }
}
