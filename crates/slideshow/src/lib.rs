//! Slide decks for case-study presentations.
//!
//! A deck is an ordered, fixed list of [`SlideDescriptor`] values resolved against a
//! [`ContentMap`] when the [`Slideshow`] mounts. Navigation, layout-mode selection, and content
//! resolution are plain Rust types so they can be tested without a DOM; the component layer only
//! wires them to signals and events.

mod component;
mod content_map;
mod deck;
mod layout;
mod model;
mod navigation;
mod resize;

pub use component::{SlideContent, SlideNavigator, Slideshow};
pub use content_map::ContentMap;
pub use deck::{unresolved_keys, ResolvedSlide, SlideDeck, SlideshowError};
pub use layout::{
    width_to_layout_mode, LayoutMode, LayoutTracker, LAYOUT_SETTLE_OBSERVATIONS,
    NARROW_LAYOUT_MAX_WIDTH_PX,
};
pub use model::{ContentKey, SlideDescriptor, SlideKind};
pub use navigation::NavigationState;
