//! Image carousel state.
//!
//! A [`Carousel`] shows exactly one slide of a fixed, ordered [`SlideSet`].
//! The current index is the only mutable state; every navigation wraps
//! modulo the slide count. Timer ticks and manual clicks mutate the same
//! index with no coordination between them, so the last write wins.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::content::DEFAULT_SLIDES;
use crate::error::{LandingError, LandingResult};

/// One image reference in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slide(String);

impl Slide {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    /// Image source (URL or asset path)
    pub fn src(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Slide {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}

impl From<String> for Slide {
    fn from(src: String) -> Self {
        Self(src)
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, non-empty, immutable sequence of slides.
///
/// Cloning is cheap (shared slice), so a set can be passed around as a
/// component prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Arc<[Slide]>,
}

impl SlideSet {
    /// Build a slide set, rejecting an empty sequence.
    pub fn new<I, S>(slides: I) -> LandingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Slide>,
    {
        let slides: Arc<[Slide]> = slides.into_iter().map(Into::into).collect();
        if slides.is_empty() {
            return Err(LandingError::EmptySlideSet);
        }
        Ok(Self { slides })
    }

    /// Number of slides (always at least 1)
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Alt text for the slide at `index` (1-based for display)
    pub fn alt_text(index: usize) -> String {
        format!("Slide {}", index + 1)
    }
}

impl Default for SlideSet {
    /// The product screenshots shipped with the page
    fn default() -> Self {
        Self {
            slides: DEFAULT_SLIDES.iter().map(|src| Slide::from(*src)).collect(),
        }
    }
}

/// Carousel state: a slide set plus the current index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slides: SlideSet,
    index: usize,
}

impl Carousel {
    /// Create a carousel showing the first slide.
    pub fn new(slides: SlideSet) -> Self {
        Self { slides, index: 0 }
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the slide currently displayed
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_slide(&self) -> &Slide {
        // index < len is maintained by every mutation
        &self.slides.slides[self.index]
    }

    /// Move forward one slide, wrapping from the last back to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len();
        tracing::trace!(index = self.index, "carousel next");
    }

    /// Move back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.len();
        self.index = (self.index + len - 1) % len;
        tracing::trace!(index = self.index, "carousel previous");
    }

    /// Timer tick. Same arithmetic as [`Carousel::next`].
    pub fn advance(&mut self) {
        self.next();
    }

    /// Jump straight to slide `index`.
    pub fn select(&mut self, index: usize) -> LandingResult<()> {
        if index >= self.len() {
            return Err(LandingError::SlideOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.index = index;
        tracing::trace!(index, "carousel select");
        Ok(())
    }

    /// Whether indicator `index` should render as active
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Horizontal offset of the slide strip, in percent of the viewport width.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }

    /// CSS transform that slides the strip to the current slide.
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> Carousel {
        Carousel::new(SlideSet::new(["a", "b", "c", "d"]).unwrap())
    }

    #[test]
    fn test_empty_slide_set_rejected() {
        let result = SlideSet::new(Vec::<String>::new());
        assert!(matches!(result, Err(LandingError::EmptySlideSet)));
    }

    #[test]
    fn test_starts_at_first_slide() {
        let carousel = four();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.current_slide().src(), "a");
        assert_eq!(carousel.len(), 4);
    }

    #[test]
    fn test_next_wraps_after_last() {
        let mut carousel = four();
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.current_index(), 3);

        carousel.next();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps_from_first() {
        let mut carousel = four();
        carousel.previous();
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.current_slide().src(), "d");
    }

    #[test]
    fn test_advance_matches_next() {
        let mut ticked = four();
        let mut clicked = four();
        ticked.advance();
        clicked.next();
        assert_eq!(ticked, clicked);
    }

    #[test]
    fn test_select_in_range() {
        let mut carousel = four();
        carousel.next();
        carousel.select(2).unwrap();
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(1));
    }

    #[test]
    fn test_select_out_of_range_keeps_index() {
        let mut carousel = four();
        carousel.next();
        let err = carousel.select(4).unwrap_err();
        assert!(matches!(
            err,
            LandingError::SlideOutOfRange { index: 4, len: 4 }
        ));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut carousel = Carousel::new(SlideSet::new(["only"]).unwrap());
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        carousel.previous();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_offset_and_transform() {
        let mut carousel = four();
        assert_eq!(carousel.transform(), "translateX(-0%)");
        carousel.select(3).unwrap();
        assert_eq!(carousel.offset_percent(), 300);
        assert_eq!(carousel.transform(), "translateX(-300%)");
    }

    #[test]
    fn test_default_set_has_shipped_screenshots() {
        let slides = SlideSet::default();
        assert_eq!(slides.len(), 11);
        assert_eq!(slides.get(0).map(Slide::src), Some(DEFAULT_SLIDES[0]));
    }

    #[test]
    fn test_alt_text_is_one_based() {
        assert_eq!(SlideSet::alt_text(0), "Slide 1");
        assert_eq!(SlideSet::alt_text(10), "Slide 11");
    }
}
