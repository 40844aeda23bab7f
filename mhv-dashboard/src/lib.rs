//! The housing dashboard as data.
//!
//! [`Dashboard::build`] turns a sampled [`mhv_data::Dataset`] into four
//! sections of prose, code listings and Vega-Lite specs. The same model is
//! rendered to a standalone HTML page by [`page`] and to Dioxus components
//! by the web app.

pub mod charts;
pub mod content;
pub mod markup;
pub mod page;
pub mod sections;

pub use charts::ChartName;
pub use content::{Block, Dashboard, Section};
