//! Target-routed browser calls.
//!
//! Adapter modules call these functions; on `wasm32` they reach the browser APIs, elsewhere they
//! report the capability as unsupported.

use platform_host::BatteryStatus;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn local_storage_get(key: &str) -> Result<Option<String>, String> {
    imp::local_storage_get(key)
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    imp::local_storage_set(key, value)
}

pub fn local_storage_remove(key: &str) -> Result<(), String> {
    imp::local_storage_remove(key)
}

pub fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url)
}

pub async fn write_clipboard_text(text: &str) -> Result<(), String> {
    imp::write_clipboard_text(text).await
}

pub async fn battery_status() -> Option<BatteryStatus> {
    imp::battery_status().await
}
