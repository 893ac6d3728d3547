//! Slide cursor for one mounted slideshow.
//!
//! Every operation clamps into `[0, len - 1]`; nothing here fails. Rapid repeated input and stale
//! callbacks are expected and simply land on the boundary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    len: usize,
}

impl NavigationState {
    /// Cursor at the first of `len` slides.
    ///
    /// A deck is never empty; a zero `len` is treated as one slide.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "navigation over an empty deck");
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last_index()
    }

    /// Advances one slide. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current.saturating_add(1))
    }

    /// Steps back one slide. Returns whether the cursor moved.
    pub fn prev(&mut self) -> bool {
        self.go_to(self.current.saturating_sub(1))
    }

    /// Jumps to `index`, clamped to the last slide. Returns whether the cursor moved.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.last_index());
        let moved = target != self.current;
        self.current = target;
        moved
    }

    /// Jumps to the table of contents, or does nothing when the deck has none.
    pub fn jump_to_contents(&mut self, contents_index: Option<usize>) -> bool {
        match contents_index {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// "3 / 12" style position label.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}
