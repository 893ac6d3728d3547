//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{AppId, DesktopState};

/// Focuses and raises `app_id`, restoring it if minimized.
///
/// Returns `false` (and changes nothing) when the window is closed or not registered.
pub fn focus_window_internal(state: &mut DesktopState, app_id: AppId) -> bool {
    let top_z = state.windows.iter().map(|w| w.z_index).max().unwrap_or(0);
    let Some(index) = state
        .windows
        .iter()
        .position(|w| w.app_id == app_id && w.is_open)
    else {
        return false;
    };

    let already_focused_top = state.windows[index].is_focused
        && !state.windows[index].minimized
        && state.windows[index].z_index == top_z;
    if already_focused_top {
        return true;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let window = &mut state.windows[index];
    window.is_focused = true;
    window.minimized = false;
    window.z_index = top_z + 1;
    normalize_window_stack(state);
    true
}

/// Hands focus to the most recently opened window that is open and not minimized.
///
/// Used after a minimize: other minimized windows stay in the taskbar. Returns the newly
/// focused app, or `None` when no visible window remains.
pub fn focus_successor(state: &mut DesktopState) -> Option<AppId> {
    let successor = state
        .windows
        .iter()
        .filter(|w| w.is_visible())
        .max_by_key(|w| w.opened_seq)
        .map(|w| w.app_id)?;
    focus_window_internal(state, successor).then_some(successor)
}

/// Hands focus to the most recently opened window still open, restoring it if minimized.
///
/// Used after a close. Returns `None` only when no window remains open.
pub fn focus_open_successor(state: &mut DesktopState) -> Option<AppId> {
    let successor = state
        .windows
        .iter()
        .filter(|w| w.is_open)
        .max_by_key(|w| w.opened_seq)
        .map(|w| w.app_id)?;
    focus_window_internal(state, successor).then_some(successor)
}

/// Normalizes z-index ordering and focus invariants for all managed windows.
///
/// Closed windows carry no stack position, focus, or minimized flag. Minimized windows cannot hold
/// focus. Open windows get compact z-indexes `1..=n` preserving their relative order, and at most
/// one window (the topmost focused) stays focused.
pub fn normalize_window_stack(state: &mut DesktopState) {
    for window in &mut state.windows {
        if !window.is_open {
            window.z_index = 0;
            window.is_focused = false;
            window.minimized = false;
        }
        if window.minimized {
            window.is_focused = false;
        }
    }

    let mut stack: Vec<usize> = state
        .windows
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_open)
        .map(|(idx, _)| idx)
        .collect();
    stack.sort_by_key(|&idx| state.windows[idx].z_index);

    let mut has_focused = false;
    for (position, &idx) in stack.iter().enumerate().rev() {
        let window = &mut state.windows[idx];
        window.z_index = (position + 1) as u32;
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }
}
