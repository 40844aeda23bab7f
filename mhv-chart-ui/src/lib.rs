//! Shared Dioxus components and vega-embed bridge for the housing dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that load vega-embed and hand it chart specs via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (blocks, containers, selectors, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
