use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::*;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .ok()
        .flatten()
        .ok_or_else(|| "localStorage unavailable".to_string())
}

fn property(target: &JsValue, name: &str) -> Result<JsValue, String> {
    let value = Reflect::get(target, &JsValue::from_str(name))
        .map_err(|e| format!("reading `{name}` failed: {e:?}"))?;
    if value.is_undefined() || value.is_null() {
        return Err(format!("`{name}` unavailable"));
    }
    Ok(value)
}

fn method(target: &JsValue, name: &str) -> Result<Function, String> {
    property(target, name)?
        .dyn_into::<Function>()
        .map_err(|_| format!("`{name}` is not callable"))
}

pub fn local_storage_get(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(key)
        .map_err(|e| format!("localStorage get_item failed: {e:?}"))
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| format!("localStorage set_item failed: {e:?}"))
}

pub fn local_storage_remove(key: &str) -> Result<(), String> {
    local_storage()?
        .remove_item(key)
        .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
}

pub fn open_external_url(url: &str) -> Result<(), String> {
    window()?
        .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
        .map(|_| ())
        .map_err(|e| format!("window.open failed: {e:?}"))
}

pub async fn write_clipboard_text(text: &str) -> Result<(), String> {
    let navigator: JsValue = window()?.navigator().into();
    let clipboard = property(&navigator, "clipboard")?;
    let promise = method(&clipboard, "writeText")?
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("clipboard.writeText failed: {e:?}"))?
        .dyn_into::<Promise>()
        .map_err(|_| "clipboard.writeText did not return a promise".to_string())?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard.writeText rejected: {e:?}"))
}

pub async fn battery_status() -> Option<BatteryStatus> {
    let navigator: JsValue = window().ok()?.navigator().into();
    let promise = method(&navigator, "getBattery")
        .ok()?
        .call0(&navigator)
        .ok()?
        .dyn_into::<Promise>()
        .ok()?;
    let manager = JsFuture::from(promise).await.ok()?;
    let level = property(&manager, "level").ok()?.as_f64()?;
    let charging = property(&manager, "charging")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    Some(BatteryStatus { level, charging })
}
