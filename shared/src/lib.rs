//! Pure widget logic shared by the landing page frontend.
//!
//! Nothing in this crate touches the DOM. The Yew components own the
//! rendering and event wiring; the state that drives them (which demo slide
//! is centered, what number a stat currently shows) lives here so it can be
//! tested natively with `cargo test`.

pub mod carousel;
pub mod countup;

pub use carousel::{Carousel, CarouselError, Slide, SlideMetrics};
pub use countup::{format_stat_number, parse_stat, CountUp, CountUpPhase, StatParseError, StatValue};
