//! Browser (`wasm32`) implementations of the [`platform_host`] service contracts.
//!
//! Every adapter compiles natively as well; off-wasm the browser calls are replaced by
//! "unsupported" results so the runtime and its tests link without a JS environment.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the [`platform_host::HostServices`] factory.
pub mod adapters;
pub mod battery;
pub mod clipboard;
pub mod external_url;
mod interop;
pub mod storage;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use battery::WebBatteryService;
pub use clipboard::WebClipboardService;
pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;
