//! `navigator.getBattery()` adapter.

use platform_host::{BatteryFuture, BatteryService, BatteryStatus};

use crate::interop;

#[derive(Debug, Clone, Copy, Default)]
/// Reads the Battery Status API where the browser still exposes it.
pub struct WebBatteryService;

impl BatteryService for WebBatteryService {
    fn status(&self) -> BatteryFuture<'_, Option<BatteryStatus>> {
        Box::pin(interop::battery_status())
    }
}
