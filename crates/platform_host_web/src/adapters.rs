use std::rc::Rc;

use platform_host::{
    FixedBatteryService, HostServices, HostStrategy, MemoryClipboard, MemoryPrefsStore,
    NoopExternalUrlService, StaticPasswordVerifier,
};

use crate::{WebBatteryService, WebClipboardService, WebExternalUrlService, WebPrefsStore};

/// Returns the host strategy selected by cargo features.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-in-memory")]
    {
        HostStrategy::InMemory
    }

    #[cfg(not(feature = "host-in-memory"))]
    {
        HostStrategy::Browser
    }
}

/// Stable token for the selected strategy.
pub const fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Assembles the service bundle for the selected host strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            prefs: Rc::new(WebPrefsStore),
            external_urls: Rc::new(WebExternalUrlService),
            clipboard: Rc::new(WebClipboardService),
            battery: Rc::new(WebBatteryService),
            password_verifier: Rc::new(StaticPasswordVerifier::from_build_env()),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::InMemory => HostServices {
            prefs: Rc::new(MemoryPrefsStore::default()),
            external_urls: Rc::new(NoopExternalUrlService),
            clipboard: Rc::new(MemoryClipboard::default()),
            battery: Rc::new(FixedBatteryService(None)),
            password_verifier: Rc::new(StaticPasswordVerifier::from_build_env()),
            host_strategy: HostStrategy::InMemory,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_matches_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert_eq!(host_strategy_name(), services.host_strategy.as_str());
    }
}
