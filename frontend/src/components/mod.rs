pub mod common;
mod footer;
mod header;
pub mod sections;

pub use footer::Footer;
pub use header::Header;
