//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer stays pure; everything that touches the DOM or a host service runs through
//! [`DesktopHostContext`], built from the [`HostServices`] bundle the entry layer injects.

mod host_ui;

use std::rc::Rc;

use platform_host::{BatteryService, ClipboardService, ExternalUrlService, HostServices};

use crate::{
    model::{AppId, WindowRect},
    reducer::RuntimeEffect,
};

pub use host_ui::TASKBAR_HEIGHT_PX;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::in_memory())
    }
}

impl DesktopHostContext {
    /// Wraps an injected service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the full service bundle, as handed to mounted apps.
    pub fn services(&self) -> HostServices {
        self.services.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Returns the configured clipboard service.
    pub fn clipboard_service(&self) -> Rc<dyn ClipboardService> {
        self.services.clipboard.clone()
    }

    /// Returns the configured battery status service.
    pub fn battery_service(&self) -> Rc<dyn BatteryService> {
        self.services.battery.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(app_id) => self.focus_window_input(app_id),
            RuntimeEffect::OpenExternalUrl(url) => self.open_external_url(&url),
        }
    }

    /// Handles a request to focus the active window's primary input.
    ///
    /// Apps opt in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on their
    /// primary text field.
    pub fn focus_window_input(&self, app_id: AppId) {
        host_ui::focus_window_input(app_id);
    }

    /// Opens a URL outside the desktop shell, logging failures.
    pub fn open_external_url(&self, url: &str) {
        host_ui::open_external_url(self.external_url_service(), url);
    }

    /// Copies `text` to the clipboard. Resolves to whether the write succeeded.
    pub async fn copy_text(&self, text: &str) -> bool {
        host_ui::copy_text(self.clipboard_service(), text).await
    }

    /// Returns the current desktop viewport rect available to the shell window manager.
    pub fn desktop_viewport_rect(&self) -> WindowRect {
        host_ui::desktop_viewport_rect(TASKBAR_HEIGHT_PX)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryClipboard, NoopClipboardService};

    use super::*;

    #[test]
    fn copy_text_reports_clipboard_outcome() {
        let clipboard = Rc::new(MemoryClipboard::default());
        let host = DesktopHostContext::new(HostServices {
            clipboard: clipboard.clone(),
            ..HostServices::in_memory()
        });
        assert!(block_on(host.copy_text("hello@example.com")));
        assert_eq!(clipboard.contents().as_deref(), Some("hello@example.com"));

        let failing = DesktopHostContext::new(HostServices {
            clipboard: Rc::new(NoopClipboardService),
            ..HostServices::in_memory()
        });
        assert!(!block_on(failing.copy_text("hello@example.com")));
    }

    #[test]
    fn native_viewport_falls_back_below_taskbar() {
        let rect = DesktopHostContext::default().desktop_viewport_rect();
        assert_eq!((rect.w, rect.h), (1024, 768 - TASKBAR_HEIGHT_PX));
    }
}
