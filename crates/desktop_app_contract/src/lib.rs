//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! Apps never reach into runtime state. They receive an [`AppMountContext`] when their window
//! mounts and talk back through [`AppServices`], which turns every request into an
//! [`AppCommand`] delivered to the runtime's dispatcher.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use leptos::{Callable, Callback, Signal, View};
use platform_host::HostServices;
use serde_json::Value;

/// Returns the DOM id an app should give its primary text input.
///
/// The runtime focuses this element when the window opens or is focused.
pub fn window_primary_input_dom_id(window_key: &str) -> String {
    format!("window-primary-input-{window_key}")
}

#[derive(Clone)]
/// Clickable label rendered beside the window title.
pub struct TitleExtra {
    /// Button text.
    pub label: String,
    /// Invoked when the label is activated.
    pub on_select: Callback<()>,
}

#[derive(Clone, Default)]
/// Window-chrome affordances an app registers while it is showing something navigable.
///
/// The shell renders these without knowing what they do.
pub struct TitleBarExtension {
    /// Invoked when the window title itself is clicked.
    pub on_title_click: Option<Callback<()>>,
    /// Optional extra label after the title.
    pub title_extra: Option<TitleExtra>,
}

impl TitleBarExtension {
    /// Returns `true` when neither affordance is set.
    pub fn is_empty(&self) -> bool {
        self.on_title_click.is_none() && self.title_extra.is_none()
    }
}

impl fmt::Debug for TitleBarExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TitleBarExtension")
            .field("on_title_click", &self.on_title_click.is_some())
            .field(
                "title_extra",
                &self.title_extra.as_ref().map(|extra| extra.label.as_str()),
            )
            .finish()
    }
}

#[derive(Clone, Debug)]
/// Requests sent from an app to the desktop runtime.
pub enum AppCommand {
    /// Replace the window title; `None` restores the registered app title.
    SetWindowTitle {
        /// New title text.
        title: Option<String>,
    },
    /// Register title-bar affordances for this window, replacing any previous registration.
    SetTitleBarExtension(TitleBarExtension),
    /// Remove this window's title-bar affordances.
    ClearTitleBarExtension,
    /// Open a URL outside the desktop shell.
    OpenExternalUrl {
        /// Target URL.
        url: String,
    },
}

#[derive(Clone, Copy)]
/// Window-scoped service for title and title-bar integration.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Requests a title change for the current window.
    pub fn set_title(&self, title: impl Into<String>) {
        self.sender.call(AppCommand::SetWindowTitle {
            title: Some(title.into()),
        });
    }

    /// Restores the app's registered title.
    pub fn reset_title(&self) {
        self.sender.call(AppCommand::SetWindowTitle { title: None });
    }

    /// Registers title-bar affordances, replacing any previous registration.
    pub fn set_title_bar_extension(&self, extension: TitleBarExtension) {
        if extension.is_empty() {
            self.clear_title_bar_extension();
        } else {
            self.sender
                .call(AppCommand::SetTitleBarExtension(extension));
        }
    }

    /// Removes this window's title-bar affordances.
    pub fn clear_title_bar_extension(&self) {
        self.sender.call(AppCommand::ClearTitleBarExtension);
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Window integration service.
    pub window: WindowService,
    /// Host adapters (storage, clipboard, password verification, ...).
    pub host: HostServices,
    /// Desktop-wide "show hidden entries" preference.
    pub show_hidden: Signal<bool>,
    sender: Callback<AppCommand>,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(sender: Callback<AppCommand>, host: HostServices, show_hidden: Signal<bool>) -> Self {
        Self {
            window: WindowService { sender },
            host,
            show_hidden,
            sender,
        }
    }

    /// Requests opening `url` outside the shell.
    pub fn open_external_url(&self, url: impl Into<String>) {
        self.sender
            .call(AppCommand::OpenExternalUrl { url: url.into() });
    }

    /// Low-level transport send for exceptional app/runtime flows.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime when a window opens.
pub struct AppMountContext {
    /// Stable key of the hosted app (for example `projects`).
    pub window_key: &'static str,
    /// Launch params supplied at window-open time.
    pub launch_params: Value,
    /// Runtime service bundle.
    pub services: AppServices,
}

impl AppMountContext {
    /// DOM id for this window's primary text input.
    pub fn primary_input_dom_id(&self) -> String {
        window_primary_input_dom_id(self.window_key)
    }

    /// Reads a string launch parameter.
    pub fn launch_param_str(&self, key: &str) -> Option<&str> {
        self.launch_params.get(key).and_then(Value::as_str)
    }
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use leptos::{create_runtime, Callback};
    use serde_json::json;

    use super::*;

    #[test]
    fn primary_input_ids_are_keyed_by_window() {
        assert_eq!(
            window_primary_input_dom_id("projects"),
            "window-primary-input-projects"
        );
    }

    #[test]
    fn empty_extension_is_reported() {
        let runtime = create_runtime();
        assert!(TitleBarExtension::default().is_empty());
        let extension = TitleBarExtension {
            on_title_click: Some(Callback::new(|_| {})),
            title_extra: None,
        };
        assert!(!extension.is_empty());
        assert_eq!(
            format!("{extension:?}"),
            "TitleBarExtension { on_title_click: true, title_extra: None }"
        );
        runtime.dispose();
    }

    #[test]
    fn launch_param_lookup_reads_strings_only() {
        let runtime = create_runtime();
        let context = AppMountContext {
            window_key: "projects",
            launch_params: json!({ "project_slug": "atlas", "count": 3 }),
            services: AppServices::new(
                Callback::new(|_| {}),
                HostServices::in_memory(),
                Signal::derive(|| false),
            ),
        };
        assert_eq!(context.launch_param_str("project_slug"), Some("atlas"));
        assert_eq!(context.launch_param_str("count"), None);
        assert_eq!(context.launch_param_str("missing"), None);
        runtime.dispose();
    }
}
