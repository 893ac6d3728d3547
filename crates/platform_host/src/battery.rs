//! Battery status host-service contracts.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by [`BatteryService`].
pub type BatteryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Snapshot of the device battery.
pub struct BatteryStatus {
    /// Charge level in `[0.0, 1.0]`.
    pub level: f64,
    /// Whether the device is plugged in.
    pub charging: bool,
}

impl BatteryStatus {
    /// Charge level as a whole percentage in `[0, 100]`.
    pub fn percent(self) -> u8 {
        (self.level.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Host service reporting battery status.
pub trait BatteryService {
    /// Reads the current status; `None` when the host exposes no battery information.
    fn status(&self) -> BatteryFuture<'_, Option<BatteryStatus>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Battery service returning a fixed value.
pub struct FixedBatteryService(pub Option<BatteryStatus>);

impl BatteryService for FixedBatteryService {
    fn status(&self) -> BatteryFuture<'_, Option<BatteryStatus>> {
        let status = self.0;
        Box::pin(async move { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_and_clamps() {
        let status = |level| BatteryStatus {
            level,
            charging: false,
        };
        assert_eq!(status(0.456).percent(), 46);
        assert_eq!(status(1.7).percent(), 100);
        assert_eq!(status(-0.2).percent(), 0);
    }
}
