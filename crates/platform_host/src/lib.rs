//! Typed host-service contracts shared by the desktop runtime, apps, and browser adapters.
//!
//! This crate is the API boundary for everything the portfolio desktop needs from its environment:
//! lightweight preference storage, external link opening, the system clipboard, battery status,
//! and the password check guarding locked case studies. Concrete browser adapters live in
//! `platform_host_web`; the in-memory and no-op adapters here keep the runtime and apps testable
//! without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod battery;
pub mod clipboard;
pub mod external_url;
pub mod host;
pub mod storage;
pub mod time;
pub mod verify;

pub use battery::{BatteryFuture, BatteryService, BatteryStatus, FixedBatteryService};
pub use clipboard::{ClipboardFuture, ClipboardService, MemoryClipboard, NoopClipboardService};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{elapsed_ms_between, unix_time_ms_now};
pub use verify::{
    PasswordVerifier, ScriptedPasswordVerifier, StaticPasswordVerifier, VerifyFuture,
    DEFAULT_UNLOCK_PASSWORD,
};
