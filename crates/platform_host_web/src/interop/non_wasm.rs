use super::*;

fn unsupported(api: &str) -> String {
    format!("{api} is only available when compiled for wasm32")
}

pub fn local_storage_get(_key: &str) -> Result<Option<String>, String> {
    Ok(None)
}

pub fn local_storage_set(_key: &str, _value: &str) -> Result<(), String> {
    Err(unsupported("localStorage"))
}

pub fn local_storage_remove(_key: &str) -> Result<(), String> {
    Ok(())
}

pub fn open_external_url(_url: &str) -> Result<(), String> {
    Err(unsupported("window.open"))
}

pub async fn write_clipboard_text(_text: &str) -> Result<(), String> {
    Err(unsupported("navigator.clipboard"))
}

pub async fn battery_status() -> Option<BatteryStatus> {
    None
}
