//! Reusable Dioxus RSX components for the housing dashboard.

mod block_view;
mod chart_container;
mod error_display;
mod loading_spinner;
mod sample_size_selector;

pub use block_view::BlockView;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use sample_size_selector::SampleSizeSelector;
