//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use mhv_data::DEFAULT_N_SAMPLE;

/// Shared application state for the housing dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Rows to sample from the filtered dataset
    pub n_sample: Signal<usize>,
    /// Rows that pass the price/landsize filter (upper bound for `n_sample`)
    pub available_rows: Signal<usize>,
    /// Fixed RNG seed; `None` draws a new sample per distinct size
    pub seed: Signal<Option<u64>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            n_sample: Signal::new(DEFAULT_N_SAMPLE),
            available_rows: Signal::new(0),
            seed: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
