//! Slide descriptors shared by case-study data and the slideshow engine.

/// Symbolic key naming a slide-content component in a [`crate::ContentMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentKey(pub &'static str);

impl ContentKey {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Per-type slide payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    /// Opening slide with a subtitle line.
    Title { subtitle: &'static str },
    /// Table of contents built from the deck's slide titles; target of the "Contents" jump.
    Toc,
    /// Rendered content component with optional body copy.
    Content {
        key: ContentKey,
        body: &'static str,
    },
    /// Full-bleed image.
    Image {
        src: &'static str,
        alt: &'static str,
    },
    /// Muted looping video.
    Video {
        src: &'static str,
        poster: Option<&'static str>,
    },
    /// Content component beside an image, with body copy under the component.
    SplitSlideImage {
        key: ContentKey,
        src: &'static str,
        body: &'static str,
    },
}

impl SlideKind {
    /// Stable type token, matching the `data-slide-type` attribute.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Toc => "toc",
            Self::Content { .. } => "content",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::SplitSlideImage { .. } => "split-slide-image",
        }
    }
}

/// One screen of a case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDescriptor {
    pub title: &'static str,
    pub kind: SlideKind,
}

impl SlideDescriptor {
    pub const fn new(title: &'static str, kind: SlideKind) -> Self {
        Self { title, kind }
    }

    /// Content key when this slide needs a rendered component.
    pub const fn content_key(&self) -> Option<ContentKey> {
        match self.kind {
            SlideKind::Content { key, .. } | SlideKind::SplitSlideImage { key, .. } => Some(key),
            _ => None,
        }
    }

    pub const fn is_toc(&self) -> bool {
        matches!(self.kind, SlideKind::Toc)
    }
}
