//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use serde_json::json;
use thiserror::Error;

use crate::{
    model::{
        AppId, DeepLinkOpenTarget, DeepLinkState, DesktopState, DragSession, InteractionState,
        OpenAppRequest, PointerPosition, WindowRecord, WindowRect,
    },
    window_manager::{
        focus_open_successor, focus_successor, focus_window_internal, normalize_window_stack,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app window, or focus it when it is already open.
    OpenApp(OpenAppRequest),
    /// Close an app window. Closing a closed window does nothing.
    CloseApp {
        /// App whose window closes.
        app_id: AppId,
    },
    /// Focus (and raise) an open window. Focusing a closed window does nothing.
    FocusApp {
        /// App to focus.
        app_id: AppId,
    },
    /// Minimize an open window, handing focus on if it had it.
    MinimizeApp {
        /// App to minimize.
        app_id: AppId,
    },
    /// Taskbar button behavior: minimize when focused, otherwise restore and focus.
    ToggleTaskbarWindow {
        /// App associated with the taskbar button.
        app_id: AppId,
    },
    /// Flip the session-wide "show hidden entries" preference.
    ToggleShowHidden,
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag, keeping the title bar inside `viewport`.
    EndMove {
        /// Current desktop viewport rectangle.
        viewport: WindowRect,
    },
    /// Replace a window's title; `None` restores the app's default title.
    SetWindowTitle {
        /// Window to retitle.
        app_id: AppId,
        /// New title.
        title: Option<String>,
    },
    /// Open every target of a parsed deep link, in order.
    ApplyDeepLink {
        /// Parsed deep-link payload.
        deep_link: DeepLinkState,
    },
    /// Ask the host to open a URL outside the desktop.
    OpenExternalUrl {
        /// Absolute URL.
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move focus into the newly focused window's primary input.
    FocusWindowInput(AppId),
    /// Open an external URL through the host.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference apps the desktop does not know.
pub enum ReducerError {
    /// The app has no window record in this desktop.
    #[error("app `{0}` is not registered")]
    UnregisteredApp(AppId),
    /// A deep link or launcher named an app slug that does not exist.
    #[error("unknown app slug `{0}`")]
    UnknownAppSlug(String),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for window management and the
/// shared desktop preferences.
///
/// # Errors
///
/// Returns [`ReducerError::UnregisteredApp`] when an action names an app without a window record.
/// State is left unchanged in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp(req) => {
            let seq = state.next_open_seq;
            let window = find_window_mut(state, req.app_id)?;
            if !window.is_open {
                window.is_open = true;
                window.minimized = false;
                window.opened_seq = seq;
                window.launch_params = req.launch_params;
                window.title = req.app_id.title().to_string();
                state.next_open_seq = seq.saturating_add(1);
            }
            focus_window_internal(state, req.app_id);
            effects.push(RuntimeEffect::FocusWindowInput(req.app_id));
        }
        DesktopAction::CloseApp { app_id } => {
            let window = find_window_mut(state, app_id)?;
            if window.is_open {
                let was_focused = window.is_focused;
                window.is_open = false;
                window.is_focused = false;
                window.minimized = false;
                window.title = app_id.title().to_string();
                window.launch_params = serde_json::Value::Null;
                if interaction
                    .dragging
                    .as_ref()
                    .is_some_and(|drag| drag.app_id == app_id)
                {
                    interaction.dragging = None;
                }
                if was_focused {
                    if let Some(successor) = focus_open_successor(state) {
                        effects.push(RuntimeEffect::FocusWindowInput(successor));
                    }
                }
            }
        }
        DesktopAction::FocusApp { app_id } => {
            find_window_mut(state, app_id)?;
            if focus_window_internal(state, app_id) {
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::MinimizeApp { app_id } => {
            let window = find_window_mut(state, app_id)?;
            if window.is_open && !window.minimized {
                let was_focused = window.is_focused;
                window.minimized = true;
                window.is_focused = false;
                if was_focused {
                    focus_successor(state);
                }
            }
        }
        DesktopAction::ToggleTaskbarWindow { app_id } => {
            let window = find_window_mut(state, app_id)?;
            if window.is_open {
                let next = if window.is_focused && !window.minimized {
                    DesktopAction::MinimizeApp { app_id }
                } else {
                    DesktopAction::FocusApp { app_id }
                };
                effects.extend(reduce_desktop(state, interaction, next)?);
            }
        }
        DesktopAction::ToggleShowHidden => {
            state.show_hidden = !state.show_hidden;
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let window = find_window_mut(state, app_id)?;
            if window.is_open {
                let rect_start = window.rect;
                focus_window_internal(state, app_id);
                interaction.dragging = Some(DragSession {
                    app_id,
                    pointer_start: pointer,
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.app_id)?;
                window.rect = session.rect_start.offset(dx, dy);
            }
        }
        DesktopAction::EndMove { viewport } => {
            if let Some(session) = interaction.dragging.take() {
                let window = find_window_mut(state, session.app_id)?;
                window.rect = window.rect.with_title_bar_inside(viewport);
            }
        }
        DesktopAction::SetWindowTitle { app_id, title } => {
            let window = find_window_mut(state, app_id)?;
            if window.is_open {
                window.title = title.unwrap_or_else(|| app_id.title().to_string());
            }
        }
        DesktopAction::ApplyDeepLink { deep_link } => {
            for target in deep_link.open {
                let req = build_open_request_from_deep_link(target);
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::OpenApp(req),
                )?);
            }
        }
        DesktopAction::OpenExternalUrl { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
    }

    normalize_window_stack(state);
    Ok(effects)
}

/// Converts a parsed deep-link target into an [`OpenAppRequest`].
pub fn build_open_request_from_deep_link(target: DeepLinkOpenTarget) -> OpenAppRequest {
    match target {
        DeepLinkOpenTarget::App(app_id) => OpenAppRequest::new(app_id),
        DeepLinkOpenTarget::ProjectSlug(slug) => OpenAppRequest {
            app_id: AppId::Projects,
            launch_params: json!({ "project_slug": slug }),
        },
    }
}

fn find_window_mut(
    state: &mut DesktopState,
    app_id: AppId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.app_id == app_id)
        .ok_or(ReducerError::UnregisteredApp(app_id))
}
