use super::*;

#[component]
/// Floating menu surface.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            node_ref=node_ref
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-elevation="overlay"
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu row with an optional leading icon.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] data_app: MaybeSignal<String>,
    #[prop(optional, into)] danger: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="menuitem"
            class=merge_layout_class("ui-menu-item", layout_class)
            data-app=move || data_app.get()
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-variant=move || if danger.get() { "danger" } else { "standard" }
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            <span data-ui-slot="label">{children()}</span>
        </button>
    }
}
