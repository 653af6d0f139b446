pub mod use_count_up;
pub mod use_in_view;

pub use use_count_up::{use_count_up, CountUpConfig};
pub use use_in_view::{use_in_view, InViewConfig};
