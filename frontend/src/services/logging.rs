use gloo::console;

/// Component-tagged console logger.
///
/// Thin facade over the browser console so call sites carry a component
/// label and the backend can change in one place.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(format!("[{component}] {message}"));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(format!("[{component}] {message}"));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(format!("[{component}] {message}"));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(format!("[{component}] {message}"));
    }
}
