//! Interactive plots over the Melbourne housing dataset.
//!
//! Data flow:
//! 1. `build.rs` projects `melb_data.csv` down to the five charted columns.
//! 2. `include_str!` embeds the projected CSV into the WASM binary.
//! 3. On mount: count the listings that pass the price/landsize filter (through
//!    the loader cache, which keeps the parsed rows for step 4) so the
//!    sample size input has an upper bound, and load vega-embed.
//! 4. Whenever the sample size or seed changes: fetch the sample through the
//!    memoized loader, rebuild the four sections and hand each spec to vega.
//!    Selections, brushing and legend toggling then run entirely inside vega.

use dioxus::prelude::*;
use mhv_chart_ui::components::{BlockView, ErrorDisplay, LoadingSpinner, SampleSizeSelector};
use mhv_chart_ui::js_bridge;
use mhv_chart_ui::state::AppState;
use mhv_dashboard::{Dashboard, Section};
use mhv_data::{available_rows, get_data, DataSource, LoadRequest};

// Projected CSV (Price,Landsize,Distance,Type,Regionname) embedded at compile time.
const MELB_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/melb_data.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("housing-root"))
        .launch(App);
}

fn source() -> DataSource {
    DataSource::embedded("melb_data.csv", MELB_CSV)
}

/// Number of listings inside the price/landsize thresholds. Reads through the
/// loader cache, so the sampling effect reuses the parsed rows.
fn count_qualifying() -> Result<usize, String> {
    available_rows(&LoadRequest::new(source())).map_err(|e| e.to_string())
}

fn build_dashboard(n_sample: usize, seed: Option<u64>) -> Result<Dashboard, String> {
    let request = LoadRequest::new(source())
        .with_n_sample(n_sample)
        .with_seed(seed);
    let dataset = get_data(&request).map_err(|e| e.to_string())?;
    Dashboard::build(&dataset).map_err(|e| e.to_string())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut sections: Signal<Vec<Section>> = use_signal(Vec::new);

    // ─── Effect 1: bound the sample size and load vega once on mount ───
    use_effect(move || {
        match count_qualifying() {
            Ok(0) => {
                state
                    .error_msg
                    .set(Some("No listings pass the price/landsize filter.".to_string()));
                state.loading.set(false);
                return;
            }
            Ok(available) => {
                state.available_rows.set(available);
                let requested = *state.n_sample.peek();
                state.n_sample.set(requested.min(available));
            }
            Err(e) => {
                state.error_msg.set(Some(e));
                state.loading.set(false);
                return;
            }
        }
        js_bridge::init_vega();
    });

    // ─── Effect 2: rebuild the page from the memoized sample ───
    // Re-runs whenever available_rows, n_sample or seed change.
    use_effect(move || {
        let available = (state.available_rows)();
        let n_sample = (state.n_sample)();
        let seed = (state.seed)();

        if available == 0 {
            return;
        }

        match build_dashboard(n_sample, seed) {
            Ok(dashboard) => {
                state.error_msg.set(None);
                for (name, spec) in dashboard.charts() {
                    js_bridge::destroy_chart(name.slug());
                    js_bridge::render_vega_chart(name.slug(), spec);
                }
                log::info!("rendered dashboard with {} sampled listings", n_sample);
                sections.set(dashboard.sections);
            }
            Err(e) => {
                state.error_msg.set(Some(e));
                sections.set(Vec::new());
            }
        }
        state.loading.set(false);
    });

    let error = state.error_msg.read().clone();
    let loading = *state.loading.read();
    let sections = sections.read().clone();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; color: #262730;",

            if let Some(err) = error {
                ErrorDisplay {
                    message: err,
                    hint: "Lower the sample size or check the embedded dataset.".to_string(),
                }
            }

            SampleSizeSelector {}

            if loading {
                LoadingSpinner {}
            } else {
                for sec in sections {
                    section {
                        key: "{sec.id}",
                        id: "{sec.id}",
                        for (i, block) in sec.blocks.into_iter().enumerate() {
                            BlockView { key: "{i}", block }
                        }
                    }
                }
            }
        }
    }
}
