//! Window-manager transitions over the open-window set.
//!
//! Every function here is pure over [`DesktopState`] and returns `true` when it changed
//! something. Unknown identifiers are no-ops.

use crate::model::{AppId, DesktopState, WindowRecord};

fn window_mut(state: &mut DesktopState, app_id: AppId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.app_id == app_id)
}

/// Opens `app_id`, or activates it in place when it is already open.
///
/// Returns `true` when a new record was appended.
pub fn open_window(state: &mut DesktopState, app_id: AppId) -> bool {
    if state.is_open(app_id) {
        activate_window(state, app_id);
        return false;
    }
    state.windows.push(WindowRecord::new(app_id));
    state.focused = Some(app_id);
    true
}

/// Focuses an open window without reordering it or clearing `minimized`.
pub fn focus_window(state: &mut DesktopState, app_id: AppId) -> bool {
    if !state.is_open(app_id) || state.focused == Some(app_id) {
        return false;
    }
    state.focused = Some(app_id);
    true
}

/// Focuses an open window and brings it back from the minimized state.
pub fn activate_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let Some(window) = window_mut(state, app_id) else {
        return false;
    };
    let was_minimized = std::mem::replace(&mut window.minimized, false);
    let refocused = focus_window(state, app_id);
    was_minimized || refocused
}

/// Removes a window. Focus is cleared when it pointed at `app_id`; no other window is promoted.
pub fn close_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.app_id != app_id);
    if state.windows.len() == before {
        return false;
    }
    if state.focused == Some(app_id) {
        state.focused = None;
    }
    true
}

/// Flips the maximized flag of an open window.
pub fn toggle_maximize(state: &mut DesktopState, app_id: AppId) -> bool {
    match window_mut(state, app_id) {
        Some(window) => {
            window.maximized = !window.maximized;
            true
        }
        None => false,
    }
}

/// Flips the minimized flag of an open window. Focus is left untouched.
pub fn toggle_minimize(state: &mut DesktopState, app_id: AppId) -> bool {
    match window_mut(state, app_id) {
        Some(window) => {
            window.minimized = !window.minimized;
            true
        }
        None => false,
    }
}

/// Drops every window, focus, and the launcher overlay.
pub fn reset_windows(state: &mut DesktopState) {
    state.windows.clear();
    state.focused = None;
    state.start_menu_open = false;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Open(AppId),
        Close(AppId),
        Focus(AppId),
        Activate(AppId),
        Minimize(AppId),
        Maximize(AppId),
    }

    fn apply(state: &mut DesktopState, op: Op) {
        match op {
            Op::Open(id) => {
                open_window(state, id);
            }
            Op::Close(id) => {
                close_window(state, id);
            }
            Op::Focus(id) => {
                focus_window(state, id);
            }
            Op::Activate(id) => {
                activate_window(state, id);
            }
            Op::Minimize(id) => {
                toggle_minimize(state, id);
            }
            Op::Maximize(id) => {
                toggle_maximize(state, id);
            }
        }
    }

    fn app_id() -> impl Strategy<Value = AppId> {
        prop::sample::select(AppId::ALL.to_vec())
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            app_id().prop_map(Op::Open),
            app_id().prop_map(Op::Close),
            app_id().prop_map(Op::Focus),
            app_id().prop_map(Op::Activate),
            app_id().prop_map(Op::Minimize),
            app_id().prop_map(Op::Maximize),
        ]
    }

    proptest! {
        #[test]
        fn open_set_never_holds_duplicates(ops in prop::collection::vec(op(), 0..64)) {
            let mut state = DesktopState::default();
            for op in ops {
                apply(&mut state, op);
                let unique: HashSet<AppId> = state.open_ids().into_iter().collect();
                prop_assert_eq!(unique.len(), state.windows.len());
                if let Some(focused) = state.focused {
                    prop_assert!(state.is_open(focused));
                }
            }
        }

        #[test]
        fn closing_the_focused_window_leaves_no_focus(
            ops in prop::collection::vec(op(), 0..32),
            target in app_id(),
        ) {
            let mut state = DesktopState::default();
            for op in ops {
                apply(&mut state, op);
            }
            open_window(&mut state, target);
            prop_assert_eq!(state.focused, Some(target));

            close_window(&mut state, target);
            prop_assert_eq!(state.focused, None);
            prop_assert!(!state.is_open(target));
        }

        #[test]
        fn opening_twice_equals_opening_once(
            ops in prop::collection::vec(op(), 0..32),
            target in app_id(),
        ) {
            let mut once = DesktopState::default();
            for op in ops {
                apply(&mut once, op);
            }
            let mut twice = once.clone();

            open_window(&mut once, target);
            open_window(&mut twice, target);
            open_window(&mut twice, target);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn open_focus_close_scenario_leaves_excel_unfocused() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Word);
        open_window(&mut state, AppId::Excel);
        focus_window(&mut state, AppId::Word);
        close_window(&mut state, AppId::Word);

        assert_eq!(state.open_ids(), vec![AppId::Excel]);
        assert_eq!(state.focused, None);
    }

    #[test]
    fn reopening_keeps_position_and_clears_minimized() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Word);
        open_window(&mut state, AppId::Excel);
        toggle_minimize(&mut state, AppId::Word);

        assert!(!open_window(&mut state, AppId::Word));
        assert_eq!(state.open_ids(), vec![AppId::Word, AppId::Excel]);
        assert_eq!(state.focused, Some(AppId::Word));
        assert_eq!(state.window(AppId::Word).map(|w| w.minimized), Some(false));
    }

    #[test]
    fn focus_does_not_restore_minimized_window() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Word);
        open_window(&mut state, AppId::Excel);
        toggle_minimize(&mut state, AppId::Word);

        assert!(focus_window(&mut state, AppId::Word));
        assert_eq!(state.window(AppId::Word).map(|w| w.minimized), Some(true));
        assert!(activate_window(&mut state, AppId::Word));
        assert_eq!(state.window(AppId::Word).map(|w| w.minimized), Some(false));
    }

    #[test]
    fn minimize_keeps_record_in_open_set() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Word);
        toggle_maximize(&mut state, AppId::Word);
        toggle_minimize(&mut state, AppId::Word);

        assert_eq!(state.rendered_windows().count(), 0);
        let record = state.window(AppId::Word).copied();
        assert_eq!(
            record,
            Some(WindowRecord {
                app_id: AppId::Word,
                minimized: true,
                maximized: true,
            })
        );

        toggle_minimize(&mut state, AppId::Word);
        assert_eq!(state.rendered_windows().count(), 1);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let mut state = DesktopState::default();
        open_window(&mut state, AppId::Word);
        let before = state.clone();

        assert!(!focus_window(&mut state, AppId::Kasm));
        assert!(!close_window(&mut state, AppId::Kasm));
        assert!(!toggle_minimize(&mut state, AppId::Kasm));
        assert!(!toggle_maximize(&mut state, AppId::Kasm));
        assert_eq!(state, before);
    }
}
