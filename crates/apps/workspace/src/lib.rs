//! Workspace desktop apps: the AI Employees roster, Kasm Workspaces and the Intranet file store.
//!
//! Each app keeps its state in one JSON blob read through
//! [`desktop_app_contract::StateService`] when the window
//! opens and written back after every change.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod browser;
mod components;
pub mod files;
pub mod roster;
pub mod servers;

use desktop_app_contract::AppMountContext;
use leptos::*;

pub use components::{AiEmployeesApp, IntranetApp, KasmApp};
pub use files::{IntranetEntry, IntranetFiles, IntranetKind};
pub use roster::{ChatLog, Employee, Roster};
pub use servers::{KasmServer, ServerList};

/// Mounts the AI Employees window.
pub fn mount_ai_employees_app(context: AppMountContext) -> View {
    view! {
        <AiEmployeesApp
            state=context.services.state
            assistants=context.services.assistants
            lifetime=context.lifetime
        />
    }
    .into_view()
}

/// Mounts the Kasm Workspaces window.
pub fn mount_kasm_app(context: AppMountContext) -> View {
    view! { <KasmApp state=context.services.state /> }.into_view()
}

/// Mounts the Intranet window.
pub fn mount_intranet_app(context: AppMountContext) -> View {
    view! { <IntranetApp state=context.services.state /> }.into_view()
}
