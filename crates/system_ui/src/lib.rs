//! Shared UI primitive library for the desktop shell and its built-in apps.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the desktop stylesheet. Apps
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, CheckboxField, ClockButton, Cluster, DesktopBackdrop,
    DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, EmptyState, FieldGroup,
    FieldVariant, Grid, Heading, IconButton, LauncherMenu, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, ListSurface, MenuItem, MenuSurface, Panel, RangeField, SelectField, Stack,
    StatusBar, Tab, TabList, Taskbar, TaskbarButton, TaskbarSection, Text, TextArea, TextField,
    TextRole, TextTone, ToolBar, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, CheckboxField, Cluster, EmptyState, FieldGroup,
        FieldVariant, Grid, Heading, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, ListSurface, MenuItem, MenuSurface, Panel, RangeField,
        SelectField, Stack, StatusBar, Tab, TabList, Text, TextArea, TextField, TextRole,
        TextTone, ToolBar,
    };
}
