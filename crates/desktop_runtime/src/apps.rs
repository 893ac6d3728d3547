use desktop_app_contract::AppModule;
use desktop_app_pet::mount_pet_app;
use desktop_app_projects::{mount_projects_app, mount_trash_app};

use crate::model::{AppId, DesktopState, WindowRect, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub desktop_icon_label: &'static str,
    pub show_on_desktop: bool,
    pub default_rect: WindowRect,
}

const APP_REGISTRY: [AppDescriptor; 3] = [
    AppDescriptor {
        app_id: AppId::Projects,
        desktop_icon_label: "Projects",
        show_on_desktop: true,
        default_rect: WindowRect {
            x: 96,
            y: 56,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        },
    },
    AppDescriptor {
        app_id: AppId::Trash,
        desktop_icon_label: "Trash",
        show_on_desktop: true,
        default_rect: WindowRect {
            x: 160,
            y: 96,
            w: 640,
            h: 440,
        },
    },
    AppDescriptor {
        app_id: AppId::Pet,
        desktop_icon_label: "Tamagotchi",
        show_on_desktop: true,
        default_rect: WindowRect {
            x: 240,
            y: 72,
            w: 360,
            h: 480,
        },
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Initial desktop: one closed window per registered app at its default position.
pub fn initial_desktop_state() -> DesktopState {
    DesktopState::with_apps(
        app_registry()
            .iter()
            .map(|entry| (entry.app_id, entry.default_rect)),
    )
}

pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::Projects => AppModule::new(mount_projects_app),
        AppId::Trash => AppModule::new(mount_trash_app),
        AppId::Pet => AppModule::new(mount_pet_app),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_covers_every_app_once_in_order() {
        let ids: Vec<AppId> = app_registry().iter().map(|entry| entry.app_id).collect();
        assert_eq!(ids, AppId::ALL.to_vec());
    }

    #[test]
    fn initial_state_uses_registry_rects() {
        let state = initial_desktop_state();
        let pet = state.window(AppId::Pet).unwrap();
        assert_eq!(pet.rect, app_registry()[2].default_rect);
        assert!(!pet.is_open);
    }
}
