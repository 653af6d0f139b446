mod cta;
mod demo;
mod hero;
mod stats;

pub use cta::CtaSection;
pub use demo::DemoSection;
pub use hero::HeroSection;
pub use stats::StatsSection;
