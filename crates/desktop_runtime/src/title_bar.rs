//! Per-window title-bar affordances registered by hosted apps.

use std::collections::HashMap;

use desktop_app_contract::TitleBarExtension;

use crate::model::AppId;

#[derive(Debug, Clone, Default)]
/// Title-bar extensions keyed by the window that registered them.
///
/// Any open window may register, focused or not: an app that restores its view while in the
/// background keeps its affordances, and each window only ever renders its own entry.
/// A window holds at most one registration; registering again replaces it. Closing a window
/// clears its entry so a reopened window starts with plain chrome.
pub struct TitleBarRegistry {
    extensions: HashMap<AppId, TitleBarExtension>,
}

impl TitleBarRegistry {
    pub fn register(&mut self, app_id: AppId, extension: TitleBarExtension) {
        if extension.is_empty() {
            self.extensions.remove(&app_id);
        } else {
            self.extensions.insert(app_id, extension);
        }
    }

    /// Removes `app_id`'s registration. Returns whether one existed.
    pub fn clear(&mut self, app_id: AppId) -> bool {
        self.extensions.remove(&app_id).is_some()
    }

    pub fn get(&self, app_id: AppId) -> Option<&TitleBarExtension> {
        self.extensions.get(&app_id)
    }

    /// Drops registrations for windows that are no longer open.
    pub fn retain_open(&mut self, is_open: impl Fn(AppId) -> bool) {
        self.extensions.retain(|app_id, _| is_open(*app_id));
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::TitleExtra;
    use leptos::{create_runtime, Callback};

    use super::*;

    fn back_only() -> TitleBarExtension {
        TitleBarExtension {
            on_title_click: Some(Callback::new(|_| {})),
            title_extra: None,
        }
    }

    #[test]
    fn registration_replaces_and_clears_per_window() {
        let runtime = create_runtime();
        let mut registry = TitleBarRegistry::default();

        registry.register(AppId::Projects, back_only());
        registry.register(AppId::Trash, back_only());
        registry.register(
            AppId::Projects,
            TitleBarExtension {
                on_title_click: None,
                title_extra: Some(TitleExtra {
                    label: "Contents".to_string(),
                    on_select: Callback::new(|_| {}),
                }),
            },
        );

        let projects = registry.get(AppId::Projects).unwrap();
        assert!(projects.on_title_click.is_none());
        assert_eq!(
            projects.title_extra.as_ref().map(|extra| extra.label.as_str()),
            Some("Contents")
        );

        assert!(registry.clear(AppId::Projects));
        assert!(!registry.clear(AppId::Projects));
        assert!(registry.get(AppId::Trash).is_some());
        runtime.dispose();
    }

    #[test]
    fn empty_registration_removes_entry() {
        let runtime = create_runtime();
        let mut registry = TitleBarRegistry::default();
        registry.register(AppId::Projects, back_only());
        registry.register(AppId::Projects, TitleBarExtension::default());
        assert!(registry.get(AppId::Projects).is_none());
        runtime.dispose();
    }

    #[test]
    fn closed_windows_lose_their_registration() {
        let runtime = create_runtime();
        let mut registry = TitleBarRegistry::default();
        registry.register(AppId::Projects, back_only());
        registry.register(AppId::Trash, back_only());
        registry.retain_open(|app_id| app_id == AppId::Trash);
        assert!(registry.get(AppId::Projects).is_none());
        assert!(registry.get(AppId::Trash).is_some());
        runtime.dispose();
    }
}
