mod badge;
mod button;
mod container;
mod description;
mod gradient_headline;

pub use badge::Badge;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use container::Container;
pub use description::Description;
pub use gradient_headline::GradientHeadline;
