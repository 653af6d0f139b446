//! Demo carousel controller.
//!
//! Tracks which slide is active over a fixed, ordered slide list and computes
//! the horizontal offset the rendering layer needs to keep the active slide
//! visually centered. The controller never touches layout itself; it only
//! reports pixel math derived from the slide metrics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One item in the demo carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u32,
    /// Static asset path of the screenshot
    pub image: String,
    /// Accessible label for the image
    pub alt: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel requires at least one slide")]
    Empty,
}

/// Pixel geometry of the carousel track.
///
/// The reference design renders exactly two width classes: the active slide
/// is enlarged, every other slide shares the inactive width. Values are
/// design constants, not measured from live layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideMetrics {
    pub active_width: f64,
    pub inactive_width: f64,
    pub gap: f64,
}

impl Default for SlideMetrics {
    fn default() -> Self {
        Self {
            active_width: 800.0,
            inactive_width: 716.0,
            gap: 24.0,
        }
    }
}

/// Active-slide state for the demo carousel.
///
/// Navigation wraps around at both ends, so `active_index` is always a valid
/// index into the slide list.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slides: Vec<Slide>,
    active_index: usize,
    metrics: SlideMetrics,
}

impl Carousel {
    /// Creates a carousel over a non-empty slide list, starting at slide 0.
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        Self::with_metrics(slides, SlideMetrics::default())
    }

    pub fn with_metrics(slides: Vec<Slide>, metrics: SlideMetrics) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            slides,
            active_index: 0,
            metrics,
        })
    }

    /// Infallible constructor for call sites that hold the first slide
    /// separately, so the non-empty invariant is a fact of the signature.
    pub fn from_first(first: Slide, rest: Vec<Slide>) -> Self {
        let mut slides = Vec::with_capacity(rest.len() + 1);
        slides.push(first);
        slides.extend(rest);
        Self {
            slides,
            active_index: 0,
            metrics: SlideMetrics::default(),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.active_index]
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_index
    }

    /// Advances to the next slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.slides.len();
    }

    /// Steps back to the previous slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        let len = self.slides.len();
        self.active_index = (self.active_index + len - 1) % len;
    }

    /// Jumps directly to a slide (pagination dots). Out-of-range input is a
    /// caller bug; it is clamped to the last slide rather than trusted.
    pub fn jump_to(&mut self, index: usize) {
        self.active_index = index.min(self.slides.len() - 1);
    }

    /// Width each slide renders at, in track order.
    fn slide_widths(&self) -> Vec<f64> {
        (0..self.slides.len())
            .map(|i| {
                if i == self.active_index {
                    self.metrics.active_width
                } else {
                    self.metrics.inactive_width
                }
            })
            .collect()
    }

    /// Distance in pixels from the start of the track to the center of the
    /// active slide. The rendering layer subtracts this from 50% of the
    /// viewport width (`translateX(calc(50% - <offset>px))`) to center it.
    pub fn center_offset_px(&self) -> f64 {
        center_offset(&self.slide_widths(), self.metrics.gap, self.active_index)
    }

    /// Total track width: every slide at its rendered width plus the gaps.
    pub fn track_width_px(&self) -> f64 {
        let widths: f64 = self.slide_widths().iter().sum();
        widths + self.metrics.gap * (self.slides.len() as f64 - 1.0)
    }
}

/// Center offset over an arbitrary per-slide width sequence.
///
/// Prefix-sums the widths (plus one gap each) of the slides before `index`,
/// then adds half of slide `index` itself. Kept general so heterogeneous
/// slide widths do not silently break the math.
pub fn center_offset(widths: &[f64], gap: f64, index: usize) -> f64 {
    let before: f64 = widths[..index].iter().map(|w| w + gap).sum();
    before + widths[index] / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: u32) -> Vec<Slide> {
        (1..=n)
            .map(|id| Slide {
                id,
                image: format!("/images/demo-{id}.png"),
                alt: format!("Demo {id}"),
            })
            .collect()
    }

    #[test]
    fn construction_rejects_empty_slide_list() {
        assert_eq!(Carousel::new(Vec::new()), Err(CarouselError::Empty));
    }

    #[test]
    fn from_first_is_non_empty_by_construction() {
        let only = Carousel::from_first(slides(1).remove(0), Vec::new());
        assert_eq!(only.len(), 1);

        let mut full = slides(5);
        let first = full.remove(0);
        let carousel = Carousel::from_first(first, full);
        assert_eq!(carousel.len(), 5);
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.active_slide().id, 1);
        assert_eq!(carousel.center_offset_px(), 400.0);
    }

    #[test]
    fn starts_at_first_slide() {
        let carousel = Carousel::new(slides(5)).unwrap();
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.active_slide().id, 1);
    }

    #[test]
    fn next_wraps_after_last_slide() {
        let mut carousel = Carousel::new(slides(5)).unwrap();
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.active_index(), 4);
        carousel.next();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn previous_wraps_before_first_slide() {
        let mut carousel = Carousel::new(slides(3)).unwrap();
        carousel.previous();
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn next_then_previous_round_trips() {
        let mut carousel = Carousel::new(slides(5)).unwrap();
        carousel.jump_to(3);
        carousel.next();
        carousel.previous();
        assert_eq!(carousel.active_index(), 3);
        carousel.previous();
        carousel.next();
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn index_stays_in_bounds_over_arbitrary_walks() {
        let mut carousel = Carousel::new(slides(4)).unwrap();
        for step in 0..100 {
            if step % 3 == 0 {
                carousel.previous();
            } else {
                carousel.next();
            }
            assert!(carousel.active_index() < carousel.len());
        }
    }

    #[test]
    fn jump_to_clamps_out_of_range_input() {
        let mut carousel = Carousel::new(slides(5)).unwrap();
        carousel.jump_to(2);
        assert_eq!(carousel.active_index(), 2);
        carousel.jump_to(99);
        assert_eq!(carousel.active_index(), 4);
    }

    #[test]
    fn single_slide_carousel_never_moves() {
        let mut carousel = Carousel::new(slides(1)).unwrap();
        carousel.next();
        carousel.previous();
        carousel.jump_to(7);
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn center_offset_matches_reference_design() {
        let mut carousel = Carousel::new(slides(5)).unwrap();
        // First slide active: half of the 800px active width.
        assert_eq!(carousel.center_offset_px(), 400.0);

        // Third slide active: two inactive slides plus gaps, then half the
        // active width: (716 + 24) * 2 + 400 = 1880.
        carousel.jump_to(2);
        assert_eq!(carousel.center_offset_px(), 1880.0);
    }

    #[test]
    fn center_offset_handles_heterogeneous_widths() {
        let widths = [100.0, 250.0, 80.0];
        assert_eq!(center_offset(&widths, 10.0, 0), 50.0);
        assert_eq!(center_offset(&widths, 10.0, 1), 110.0 + 125.0);
        assert_eq!(center_offset(&widths, 10.0, 2), 110.0 + 260.0 + 40.0);
    }

    #[test]
    fn track_width_covers_all_slides_and_gaps() {
        let carousel = Carousel::new(slides(5)).unwrap();
        // 4 * 716 + 800 + 4 * 24
        assert_eq!(carousel.track_width_px(), 3760.0);
    }
}
