//! Validated slide sequences.
//!
//! A [`SlideDeck`] is built once per mounted slideshow. Construction resolves every content key
//! against the supplied [`ContentMap`], so a missing component is reported before anything renders.

use thiserror::Error;

use crate::{
    content_map::ContentMap,
    model::{ContentKey, SlideDescriptor},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Configuration errors detected while building a deck.
pub enum SlideshowError {
    /// The slide list was empty.
    #[error("slide deck is empty")]
    EmptyDeck,
    /// A slide references a content key that the content map does not provide.
    #[error("slide {index} references unknown content `{key}`")]
    MissingContent { index: usize, key: ContentKey },
}

/// A slide paired with its resolved content component.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSlide<C> {
    pub descriptor: SlideDescriptor,
    pub content: Option<C>,
}

/// Non-empty, fully resolved slide sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideDeck<C> {
    slides: Vec<ResolvedSlide<C>>,
}

impl<C: Clone> SlideDeck<C> {
    /// Resolves `slides` against `content_map`.
    ///
    /// # Errors
    ///
    /// [`SlideshowError::EmptyDeck`] for an empty list, or [`SlideshowError::MissingContent`] for
    /// the first slide whose key is not registered.
    pub fn new(
        slides: &[SlideDescriptor],
        content_map: &ContentMap<C>,
    ) -> Result<Self, SlideshowError> {
        if slides.is_empty() {
            return Err(SlideshowError::EmptyDeck);
        }

        let slides = slides
            .iter()
            .enumerate()
            .map(|(index, descriptor)| -> Result<ResolvedSlide<C>, SlideshowError> {
                let content = match descriptor.content_key() {
                    Some(key) => Some(
                        content_map
                            .get(key)
                            .cloned()
                            .ok_or(SlideshowError::MissingContent { index, key })?,
                    ),
                    None => None,
                };
                Ok(ResolvedSlide {
                    descriptor: *descriptor,
                    content,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slides })
    }
}

impl<C> SlideDeck<C> {
    /// Number of slides; always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&ResolvedSlide<C>> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[ResolvedSlide<C>] {
        &self.slides
    }

    /// Index of the first table-of-contents slide.
    pub fn contents_index(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.descriptor.is_toc())
    }

    /// `(index, title)` for every slide except tables of contents.
    pub fn outline(&self) -> Vec<(usize, &'static str)> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.descriptor.is_toc())
            .map(|(index, s)| (index, s.descriptor.title))
            .collect()
    }
}

/// Checks `slides` against `content_map` without building a deck.
///
/// Used by data-consistency tests over the static case-study tables.
pub fn unresolved_keys<C>(
    slides: &[SlideDescriptor],
    content_map: &ContentMap<C>,
) -> Vec<ContentKey> {
    slides
        .iter()
        .filter_map(SlideDescriptor::content_key)
        .filter(|key| !content_map.contains(*key))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::SlideKind;

    const SLIDES: [SlideDescriptor; 3] = [
        SlideDescriptor::new("Contents", SlideKind::Toc),
        SlideDescriptor::new(
            "Problem",
            SlideKind::Content {
                key: ContentKey("a"),
                body: "",
            },
        ),
        SlideDescriptor::new(
            "Outcome",
            SlideKind::Content {
                key: ContentKey("b"),
                body: "",
            },
        ),
    ];

    fn map() -> ContentMap<&'static str> {
        ContentMap::new()
            .with(ContentKey("a"), "component-a")
            .with(ContentKey("b"), "component-b")
    }

    #[test]
    fn resolves_components_by_key() {
        let deck = SlideDeck::new(&SLIDES, &map()).expect("deck");
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(0).unwrap().content, None);
        assert_eq!(deck.get(2).unwrap().content, Some("component-b"));
        assert_eq!(deck.contents_index(), Some(0));
        assert_eq!(deck.outline(), vec![(1, "Problem"), (2, "Outcome")]);
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            SlideDeck::new(&[], &map()).unwrap_err(),
            SlideshowError::EmptyDeck
        );
    }

    #[test]
    fn first_missing_key_is_reported_with_its_index() {
        let partial = ContentMap::new().with(ContentKey("a"), "component-a");
        assert_eq!(
            SlideDeck::new(&SLIDES, &partial).unwrap_err(),
            SlideshowError::MissingContent {
                index: 2,
                key: ContentKey("b"),
            }
        );
        assert_eq!(unresolved_keys(&SLIDES, &partial), vec![ContentKey("b")]);
    }

    #[test]
    fn deck_without_toc_has_no_contents_index() {
        let deck = SlideDeck::new(&SLIDES[1..], &map()).expect("deck");
        assert_eq!(deck.contents_index(), None);
    }
}
