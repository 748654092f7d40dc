pub mod badge;
pub mod footer;
pub mod loader;
pub mod navbar;
pub mod toasts;
