//! Prose and chart order of the four dashboard sections.

use crate::charts::ChartName;
use crate::content::{Block, Section};
use mhv_vega::{InlineData, VegaError};
use std::sync::Arc;

pub fn head_title() -> Section {
    Section::new("intro")
        .push(Block::Title("Interactive plots with Vega-Lite".into()))
        .push(Block::text(
            "Vega-Lite is a powerful grammar in terms of data transformations and creating interactive plots. \
             We will test **Vega-Lite selections** with the dataset available on Kaggle about the *Melbourne housing info*.",
        ))
        .push(Block::bullets(
            Some("Three components of an interactive Vega-Lite chart:"),
            &[
                "**Selection:** Captures interactions from the user. In other words, it selects a part of the visualization",
                "**Condition:** Changes or customizes the elements based on the selection. In order to see an action, we need to attach a selection to a condition",
                "**Bind:** It is a property of the selection and creates a two-way binding between a selection and input",
            ],
        ))
}

pub fn exploratory_analysis(data: &Arc<InlineData>) -> Result<Section, VegaError> {
    let spec = ChartName::StaticScatter.build(Arc::clone(data))?;
    Ok(Section::new("static")
        .push(Block::Header("Static visualization".into()))
        .push(Block::text(
            "Before starting on the interactive plots, it is better to briefly show the code with the basic **chart builder syntax**:",
        ))
        .echo_chart(ChartName::StaticScatter, spec)
        .push(Block::text(
            "The data is an inlined table of sampled listings, then we describe the type of visualization (e.g. circle, bar, and so on). \
             The encoding specifies what to plot from that table, in our example (x=Price, y=Distance, color=Type). \
             Finally, we specify certain *properties* like **height** and **width**.",
        )))
}

pub fn interactive_plots(data: &Arc<InlineData>) -> Result<Section, VegaError> {
    let legend = ChartName::LegendScatter.build(Arc::clone(data))?;
    let brush = ChartName::BrushScatterHist.build(Arc::clone(data))?;
    Ok(Section::new("dynamic")
        .push(Block::Header("Dynamic visualization in plots".into()))
        .push(Block::text(
            "Some part of the plot seems too overlapped in terms of the dots. \
             It would look better if we can also view data points that belong to a specific type.",
        ))
        .echo_chart(ChartName::LegendScatter, legend)
        .push(Block::text(
            "The second example will create a scatter plot and a histogram using the *Distance*, *Landsize* and *Price* features. \
             The histogram will be updated based on the selected area on the scatter plot.",
        ))
        .echo_chart(ChartName::BrushScatterHist, brush)
        .push(Block::bullets(
            Some(
                "The histogram is updated based on the data points of the **selected area** on the scatter plot \
                 (try to select different areas). Thus, we are able to see the Price distribution of the selected area. **Remember**:",
            ),
            &[
                "We can use other plots besides the histogram, the applications are endless and what is important is the *transform_filter* used in the **hist_graph**.",
                "Other **selection types** can be used in this application, like the point selection used above",
                "This is done through the selection (an interval or others) and the filter transform attached to the other view",
            ],
        )))
}

pub fn final_analysis(data: &Arc<InlineData>) -> Result<Section, VegaError> {
    let switched = ChartName::BrushHistScatter.build(Arc::clone(data))?;
    Ok(Section::new("final")
        .push(Block::Header("Alternative interaction on the plots".into()))
        .push(Block::text(
            "Final example that switches the roles on the two plots above, \
             in order to better understand the concepts of the selection and condition properties:",
        ))
        .echo_chart(ChartName::BrushHistScatter, switched)
        .push(Block::Title("Takeaway messages".into()))
        .push(Block::bullets(
            None,
            &[
                "Endless applications with the *selection* and *condition* properties",
                "**Vega-Lite** is quite flexible in terms of adding interactive components to the visualization",
                "Example plots could be functions where some properties change depending on input parameters for an **agile implementation**",
                "As with any other subject, practice makes perfect!!!",
            ],
        )))
}
