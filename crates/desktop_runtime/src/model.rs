use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::reducer::ReducerError;

pub const DEFAULT_WINDOW_WIDTH: i32 = 760;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 520;
/// Height of a window title bar; dragging keeps this strip inside the desktop.
pub const TITLE_BAR_HEIGHT_PX: i32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    Projects,
    Trash,
    Pet,
}

impl AppId {
    /// Every app in registration order.
    pub const ALL: [Self; 3] = [Self::Projects, Self::Trash, Self::Pet];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Trash => "Trash",
            Self::Pet => "Pet",
        }
    }

    /// Stable token used in deep links and DOM ids.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Trash => "trash",
            Self::Pet => "pet",
        }
    }

    pub const fn icon_id(self) -> &'static str {
        match self {
            Self::Projects => "folder",
            Self::Trash => "trash",
            Self::Pet => "egg",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AppId {
    type Err = ReducerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|app| app.slug().eq_ignore_ascii_case(raw))
            .ok_or_else(|| ReducerError::UnknownAppSlug(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Moves the rect so its title bar lies inside `viewport`.
    ///
    /// Windows wider than the viewport are pinned to its left edge.
    pub fn with_title_bar_inside(self, viewport: WindowRect) -> Self {
        let max_x = (viewport.x + viewport.w - self.w).max(viewport.x);
        let max_y = (viewport.y + viewport.h - TITLE_BAR_HEIGHT_PX).max(viewport.y);
        Self {
            x: self.x.clamp(viewport.x, max_x),
            y: self.y.clamp(viewport.y, max_y),
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 96,
            y: 56,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Window state for one registered app.
///
/// Records exist for every registered app from startup on; opening and closing only flip
/// `is_open`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub is_open: bool,
    pub is_focused: bool,
    pub minimized: bool,
    /// Sequence number of the most recent closed-to-open transition. Zero while never opened.
    pub opened_seq: u64,
    pub launch_params: Value,
}

impl WindowRecord {
    pub fn closed(app_id: AppId, rect: WindowRect) -> Self {
        Self {
            app_id,
            title: app_id.title().to_string(),
            rect,
            z_index: 0,
            is_open: false,
            is_focused: false,
            minimized: false,
            opened_seq: 0,
            launch_params: Value::Null,
        }
    }

    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.minimized
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    /// One record per registered app, in registration order.
    pub windows: Vec<WindowRecord>,
    pub next_open_seq: u64,
    /// Session-only preference; hidden case-study entries are listed when set.
    pub show_hidden: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_apps(AppId::ALL.iter().map(|&app_id| (app_id, WindowRect::default())))
    }
}

impl DesktopState {
    /// Builds a desktop with a closed window for each registered app.
    pub fn with_apps(apps: impl IntoIterator<Item = (AppId, WindowRect)>) -> Self {
        Self {
            windows: apps
                .into_iter()
                .map(|(app_id, rect)| WindowRecord::closed(app_id, rect))
                .collect(),
            next_open_seq: 1,
            show_hidden: false,
        }
    }

    pub fn window(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    pub fn focused_app(&self) -> Option<AppId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.app_id)
    }

    /// Open windows in registration order, as the taskbar lists them.
    pub fn open_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.is_open)
    }

    pub fn is_open(&self, app_id: AppId) -> bool {
        self.window(app_id).is_some_and(|w| w.is_open)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAppRequest {
    pub app_id: AppId,
    pub launch_params: Value,
}

impl OpenAppRequest {
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            launch_params: Value::Null,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeepLinkOpenTarget {
    App(AppId),
    ProjectSlug(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeepLinkState {
    pub open: Vec<DeepLinkOpenTarget>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_slugs_round_trip_and_reject_unknowns() {
        for app in AppId::ALL {
            assert_eq!(app.slug().parse::<AppId>(), Ok(app));
        }
        assert_eq!(" Projects ".parse::<AppId>(), Ok(AppId::Projects));
        assert_eq!(
            "paint".parse::<AppId>(),
            Err(ReducerError::UnknownAppSlug("paint".to_string()))
        );
    }

    #[test]
    fn title_bar_clamp_keeps_strip_reachable() {
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1000,
            h: 700,
        };
        let rect = WindowRect {
            x: 900,
            y: 690,
            w: 400,
            h: 300,
        };
        assert_eq!(
            rect.with_title_bar_inside(viewport),
            WindowRect {
                x: 600,
                y: 700 - TITLE_BAR_HEIGHT_PX,
                w: 400,
                h: 300
            }
        );

        let wide = WindowRect {
            x: -50,
            y: -10,
            w: 1400,
            h: 300,
        };
        let clamped = wide.with_title_bar_inside(viewport);
        assert_eq!((clamped.x, clamped.y), (0, 0));
    }

    #[test]
    fn every_registered_app_starts_closed() {
        let state = DesktopState::default();
        assert_eq!(state.windows.len(), AppId::ALL.len());
        assert!(state.windows.iter().all(|w| !w.is_open && !w.is_focused));
        assert_eq!(state.open_windows().count(), 0);
        assert_eq!(state.focused_app(), None);
    }
}
