//! Container-width driven layout mode.
//!
//! The slideshow measures its own container, not the viewport, so the same deck lays out
//! correctly in a small window or maximized. A mode change is only committed after the measured
//! width has stayed on the new side of the threshold for [`LAYOUT_SETTLE_OBSERVATIONS`]
//! consecutive observations, which keeps resize drags that hover on the boundary from thrashing.

/// Widest container (in CSS px) that still uses the stacked narrow layout.
pub const NARROW_LAYOUT_MAX_WIDTH_PX: f64 = 720.0;

/// Consecutive observations required before switching modes.
pub const LAYOUT_SETTLE_OBSERVATIONS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Side-by-side media and copy.
    #[default]
    Wide,
    /// Stacked single column.
    Narrow,
}

impl LayoutMode {
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Wide => "slideshow-wide",
            Self::Narrow => "slideshow-narrow",
        }
    }
}

/// Maps a measured container width to a layout mode.
pub fn width_to_layout_mode(width_px: f64) -> LayoutMode {
    if width_px <= NARROW_LAYOUT_MAX_WIDTH_PX {
        LayoutMode::Narrow
    } else {
        LayoutMode::Wide
    }
}

/// Applies [`width_to_layout_mode`] with settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutTracker {
    mode: Option<LayoutMode>,
    pending: Option<(LayoutMode, u8)>,
}

impl LayoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed mode; [`LayoutMode::Wide`] until the first measurement arrives.
    pub fn mode(&self) -> LayoutMode {
        self.mode.unwrap_or_default()
    }

    /// Feeds one width observation. Returns the new mode when it changed.
    ///
    /// The first observation commits immediately. Zero or non-finite widths (a detached or hidden
    /// container) are ignored.
    pub fn observe(&mut self, width_px: f64) -> Option<LayoutMode> {
        if !width_px.is_finite() || width_px <= 0.0 {
            return None;
        }

        let observed = width_to_layout_mode(width_px);
        let Some(current) = self.mode else {
            self.mode = Some(observed);
            return Some(observed);
        };

        if observed == current {
            self.pending = None;
            return None;
        }

        let seen = match self.pending {
            Some((mode, count)) if mode == observed => count.saturating_add(1),
            _ => 1,
        };
        if seen >= LAYOUT_SETTLE_OBSERVATIONS {
            self.mode = Some(observed);
            self.pending = None;
            Some(observed)
        } else {
            self.pending = Some((observed, seen));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive_for_narrow() {
        assert_eq!(width_to_layout_mode(320.0), LayoutMode::Narrow);
        assert_eq!(width_to_layout_mode(720.0), LayoutMode::Narrow);
        assert_eq!(width_to_layout_mode(720.5), LayoutMode::Wide);
    }

    #[test]
    fn first_observation_commits_immediately() {
        let mut tracker = LayoutTracker::new();
        assert_eq!(tracker.mode(), LayoutMode::Wide);
        assert_eq!(tracker.observe(500.0), Some(LayoutMode::Narrow));
        assert_eq!(tracker.mode(), LayoutMode::Narrow);
    }

    #[test]
    fn change_requires_consecutive_observations() {
        let mut tracker = LayoutTracker::new();
        tracker.observe(1_000.0);
        assert_eq!(tracker.observe(600.0), None);
        assert_eq!(tracker.mode(), LayoutMode::Wide);
        assert_eq!(tracker.observe(610.0), Some(LayoutMode::Narrow));
    }

    #[test]
    fn jitter_across_the_boundary_does_not_flip() {
        let mut tracker = LayoutTracker::new();
        tracker.observe(900.0);
        for width in [719.0, 721.0, 719.0, 722.0, 718.0, 730.0] {
            assert_eq!(tracker.observe(width), None, "flipped at {width}");
        }
        assert_eq!(tracker.mode(), LayoutMode::Wide);
    }

    #[test]
    fn hidden_container_widths_are_ignored() {
        let mut tracker = LayoutTracker::new();
        assert_eq!(tracker.observe(0.0), None);
        assert_eq!(tracker.observe(f64::NAN), None);
        assert_eq!(tracker.observe(400.0), Some(LayoutMode::Narrow));
    }
}
