pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{filter_form, results_panel};
pub use layouts::desktop::desktop_layout;
