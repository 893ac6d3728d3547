//! Hover-preview placement.

/// Preview panel width in CSS px.
pub const PREVIEW_WIDTH_PX: f64 = 280.0;
/// Preview panel height in CSS px.
pub const PREVIEW_HEIGHT_PX: f64 = 180.0;
/// Gap between the cursor and the panel.
pub const PREVIEW_CURSOR_OFFSET_PX: f64 = 16.0;
/// Minimum distance kept from every viewport edge.
pub const PREVIEW_EDGE_MARGIN_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPlacement {
    pub left: f64,
    pub top: f64,
    /// The panel sits left of the cursor.
    pub flipped: bool,
}

impl PreviewPlacement {
    pub fn style(self) -> String {
        format!("left:{}px;top:{}px;", self.left.round(), self.top.round())
    }
}

/// Places a preview panel beside the pointer.
///
/// The panel goes right of and below the cursor, flips to the left when it would overflow the right
/// edge, and is then clamped so it stays fully inside the viewport. Viewports smaller than the
/// panel pin it to the top-left margin.
pub fn place_preview(pointer: (f64, f64), viewport: (f64, f64)) -> PreviewPlacement {
    let (x, y) = pointer;
    let (viewport_w, viewport_h) = viewport;

    let right_side = x + PREVIEW_CURSOR_OFFSET_PX;
    let flipped = right_side + PREVIEW_WIDTH_PX > viewport_w - PREVIEW_EDGE_MARGIN_PX;
    let left = if flipped {
        x - PREVIEW_CURSOR_OFFSET_PX - PREVIEW_WIDTH_PX
    } else {
        right_side
    };
    let top = y + PREVIEW_CURSOR_OFFSET_PX;

    PreviewPlacement {
        left: clamp_axis(left, PREVIEW_WIDTH_PX, viewport_w),
        top: clamp_axis(top, PREVIEW_HEIGHT_PX, viewport_h),
        flipped,
    }
}

fn clamp_axis(start: f64, size: f64, extent: f64) -> f64 {
    let max = (extent - size - PREVIEW_EDGE_MARGIN_PX).max(PREVIEW_EDGE_MARGIN_PX);
    start.clamp(PREVIEW_EDGE_MARGIN_PX, max)
}

/// Currently hovered row and last pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverPreview {
    pub slug: Option<&'static str>,
    pub pointer: (f64, f64),
}

impl HoverPreview {
    pub fn enter(&mut self, slug: &'static str, pointer: (f64, f64)) {
        self.slug = Some(slug);
        self.pointer = pointer;
    }

    /// Tracks the pointer while a row is hovered.
    pub fn track(&mut self, pointer: (f64, f64)) {
        if self.slug.is_some() {
            self.pointer = pointer;
        }
    }

    /// Clears the preview if `slug` is still the hovered row.
    pub fn leave(&mut self, slug: &str) {
        if self.slug == Some(slug) {
            self.slug = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: (f64, f64) = (1280.0, 800.0);

    #[test]
    fn sits_below_right_of_cursor_when_there_is_room() {
        let placement = place_preview((100.0, 100.0), VIEWPORT);
        assert_eq!(placement.left, 116.0);
        assert_eq!(placement.top, 116.0);
        assert!(!placement.flipped);
    }

    #[test]
    fn flips_left_near_the_right_edge() {
        let placement = place_preview((1100.0, 100.0), VIEWPORT);
        assert!(placement.flipped);
        assert_eq!(placement.left, 1100.0 - 16.0 - 280.0);
    }

    #[test]
    fn stays_inside_the_bottom_edge() {
        let placement = place_preview((100.0, 790.0), VIEWPORT);
        assert_eq!(placement.top, 800.0 - 180.0 - 8.0);
    }

    #[test]
    fn always_fully_inside_the_viewport() {
        for x in (0..=1280).step_by(37) {
            for y in (0..=800).step_by(41) {
                let p = place_preview((x as f64, y as f64), VIEWPORT);
                assert!(p.left >= PREVIEW_EDGE_MARGIN_PX, "left {p:?}");
                assert!(p.top >= PREVIEW_EDGE_MARGIN_PX, "top {p:?}");
                assert!(p.left + PREVIEW_WIDTH_PX <= VIEWPORT.0 - PREVIEW_EDGE_MARGIN_PX);
                assert!(p.top + PREVIEW_HEIGHT_PX <= VIEWPORT.1 - PREVIEW_EDGE_MARGIN_PX);
            }
        }
    }

    #[test]
    fn tiny_viewport_pins_to_margin() {
        let placement = place_preview((50.0, 50.0), (200.0, 150.0));
        assert_eq!(placement.left, PREVIEW_EDGE_MARGIN_PX);
        assert_eq!(placement.top, PREVIEW_EDGE_MARGIN_PX);
    }

    #[test]
    fn leaving_a_stale_row_keeps_the_current_one() {
        let mut hover = HoverPreview::default();
        hover.enter("atlas", (1.0, 1.0));
        hover.enter("ledger", (2.0, 2.0));
        hover.leave("atlas");
        assert_eq!(hover.slug, Some("ledger"));
        hover.track((5.0, 6.0));
        assert_eq!(hover.pointer, (5.0, 6.0));
        hover.leave("ledger");
        assert_eq!(hover.slug, None);
    }
}
