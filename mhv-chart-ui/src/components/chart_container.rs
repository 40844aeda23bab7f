//! Fixed-height container that vega-embed renders into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (vega-embed will render into this)
    pub id: String,
    /// Reserved height so the page does not jump while vega loads
    #[props(default = 380)]
    pub min_height: u32,
}

/// A container div for a vega-embed chart.
///
/// The inner element has no Dioxus-managed children: vega-embed owns its content.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; margin: 12px 0; width: 100%; overflow-x: auto;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
            }
        }
    }
}
