//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    BatteryService, ClipboardService, ExternalUrlService, FixedBatteryService, MemoryClipboard,
    MemoryPrefsStore, PasswordVerifier, PrefsStore, RecordingExternalUrlService,
    StaticPasswordVerifier,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed services.
    Browser,
    /// In-memory services for tests and non-browser builds.
    InMemory,
}

impl HostStrategy {
    /// Stable token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::InMemory => "in-memory",
        }
    }
}

/// Runtime-selected service bundle handed to the desktop provider.
///
/// Environment-specific adapter selection happens before this bundle crosses into
/// `desktop_runtime`, so the runtime and app crates never name a browser type.
#[derive(Clone)]
pub struct HostServices {
    /// Small durable key/value documents.
    pub prefs: Rc<dyn PrefsStore>,
    /// Outbound link opening.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// System clipboard writes.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Battery status for the taskbar.
    pub battery: Rc<dyn BatteryService>,
    /// Password check for locked entries.
    pub password_verifier: Rc<dyn PasswordVerifier>,
    /// Strategy the bundle was built for.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle of in-memory services with the build-configured password.
    pub fn in_memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            external_urls: Rc::new(RecordingExternalUrlService::default()),
            clipboard: Rc::new(MemoryClipboard::default()),
            battery: Rc::new(FixedBatteryService(None)),
            password_verifier: Rc::new(StaticPasswordVerifier::from_build_env()),
            host_strategy: HostStrategy::InMemory,
        }
    }
}
