//! Sample size and seed inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Number input for the sample size, plus an optional fixed seed.
///
/// Every distinct (size, seed) pair is a separate entry in the loader cache,
/// so going back to an earlier size shows the same sample again.
#[component]
pub fn SampleSizeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.n_sample)();
    let available = (state.available_rows)();
    let seed_text = (state.seed)().map(|s| s.to_string()).unwrap_or_default();

    let on_size_change = move |evt: Event<FormData>| {
        if let Ok(n) = evt.value().trim().parse::<usize>() {
            let max = (state.available_rows)().max(1);
            state.n_sample.set(n.clamp(1, max));
        }
    };

    let on_seed_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let value = value.trim();
        if value.is_empty() {
            state.seed.set(None);
        } else if let Ok(seed) = value.parse::<u64>() {
            state.seed.set(Some(seed));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; font-size: 13px;",
            label {
                style: "font-weight: bold;",
                "Sample: "
                input {
                    r#type: "number",
                    value: "{current}",
                    min: "1",
                    max: "{available}",
                    style: "width: 80px;",
                    onchange: on_size_change,
                }
                " of {available} listings"
            }
            label {
                style: "font-weight: bold;",
                "Seed: "
                input {
                    r#type: "text",
                    value: "{seed_text}",
                    placeholder: "random",
                    style: "width: 80px;",
                    onchange: on_seed_change,
                }
            }
        }
    }
}
