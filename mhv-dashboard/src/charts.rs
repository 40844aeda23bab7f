//! The four charts shown on the dashboard.
//!
//! The code echoed under each chart is cut out of this file at compile time,
//! between the `// echo:` markers inside each builder, so the page always
//! shows the code that produced the chart.

use mhv_data::Dataset;
use mhv_vega::{
    Chart, Condition, Encoding, FieldDef, FieldType, HConcat, InlineData, Mark, Selection,
    ToVegaLite, VegaError,
};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Name under which the sampled rows are inlined in every spec.
pub const DATASET_NAME: &str = "melb_housing";

const CHARTS_RS: &str = include_str!("charts.rs");

/// Inline the sampled rows, declaring every loaded column so that charts
/// still build when the sample is empty or a column has no values.
pub fn housing_data(dataset: &Dataset) -> Result<Arc<InlineData>, VegaError> {
    let schema = dataset.columns().iter().map(|c| {
        let field_type = if c.is_numeric() {
            FieldType::Quantitative
        } else {
            FieldType::Nominal
        };
        (c.header(), field_type)
    });
    InlineData::from_records_with_schema(DATASET_NAME, dataset.rows(), schema)
}

/// Lines between `// echo: <slug>` and `// echo: end`, dedented.
fn echoed_lines(slug: &str) -> String {
    let open = format!("// echo: {}", slug);
    let lines: Vec<&str> = CHARTS_RS
        .lines()
        .skip_while(|line| line.trim() != open)
        .skip(1)
        .take_while(|line| line.trim() != "// echo: end")
        .collect();
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or("").trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn static_scatter(data: Arc<InlineData>) -> Chart {
    // echo: static-scatter
    let scatter_fig = Chart::new(data)
        .mark(Mark::circle().size(50.0))
        .encode(Encoding::new().x("Price").y("Distance").color("Type"))
        .properties(500, 350);
    // echo: end
    scatter_fig
}

pub fn legend_scatter(data: Arc<InlineData>) -> Chart {
    // echo: legend-scatter
    // Point selection on Type, driven by clicks on the legend
    let sel_option = Selection::point("type_legend").fields(["Type"]).bind_legend();
    let scatter_fig = Chart::new(data)
        .mark(Mark::circle().size(50.0))
        .encode(
            Encoding::new()
                .x("Price")
                .y("Distance")
                .color("Type")
                // Fade out every type that is not selected
                .opacity(Condition::param(&sel_option, 1.0, 0.1)),
        )
        .properties(500, 350)
        .add_selection(&sel_option);
    // echo: end
    scatter_fig
}

pub fn brush_scatter_hist(data: Arc<InlineData>) -> HConcat {
    // echo: brush-scatter-hist
    // An interval lets the user brush an area of the plot
    let sel_option = Selection::interval("brush");
    // Landsize vs Distance scatter plot that owns the selection
    let scatter_graph = Chart::new(Arc::clone(&data))
        .mark(Mark::circle().size(50.0))
        .encode(Encoding::new().x("Landsize").y("Distance").color("Type"))
        .properties(400, 350)
        .add_selection(&sel_option);
    // Price histogram restricted to the brushed points
    let hist_graph = Chart::new(data)
        .mark(Mark::bar())
        .encode(Encoding::new().x(FieldDef::from("Price:Q").bin(true)).y("count()"))
        .properties(250, 350)
        .transform_filter(&sel_option);
    let fig = scatter_graph | hist_graph;
    // echo: end
    fig
}

pub fn brush_hist_scatter(data: Arc<InlineData>) -> HConcat {
    // echo: brush-hist-scatter
    // Same interval selection, roles swapped
    let sel_option = Selection::interval("brush");
    let scatter_graph = Chart::new(Arc::clone(&data))
        .mark(Mark::circle().size(50.0))
        .encode(Encoding::new().x("Landsize").y("Distance").color("Type"))
        .properties(400, 350)
        .transform_filter(&sel_option);
    let hist_graph = Chart::new(data)
        .mark(Mark::bar())
        .encode(Encoding::new().x(FieldDef::from("Price:Q").bin(true)).y("count()"))
        .properties(250, 350)
        .add_selection(&sel_option);
    let fig = hist_graph | scatter_graph;
    // echo: end
    fig
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartName {
    StaticScatter,
    LegendScatter,
    BrushScatterHist,
    BrushHistScatter,
}

impl ChartName {
    pub const ALL: [ChartName; 4] = [
        ChartName::StaticScatter,
        ChartName::LegendScatter,
        ChartName::BrushScatterHist,
        ChartName::BrushHistScatter,
    ];

    /// URL/CLI identifier, also used as the DOM id of the chart container.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartName::StaticScatter => "static-scatter",
            ChartName::LegendScatter => "legend-scatter",
            ChartName::BrushScatterHist => "brush-scatter-hist",
            ChartName::BrushHistScatter => "brush-hist-scatter",
        }
    }

    /// Body of the builder function, as echoed under the chart.
    pub fn source(&self) -> String {
        echoed_lines(self.slug())
    }

    pub fn build(&self, data: Arc<InlineData>) -> Result<Value, VegaError> {
        match self {
            ChartName::StaticScatter => static_scatter(data).to_vega_lite(),
            ChartName::LegendScatter => legend_scatter(data).to_vega_lite(),
            ChartName::BrushScatterHist => brush_scatter_hist(data).to_vega_lite(),
            ChartName::BrushHistScatter => brush_hist_scatter(data).to_vega_lite(),
        }
    }
}

impl fmt::Display for ChartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartName::ALL
            .iter()
            .copied()
            .find(|c| c.slug() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ChartName::ALL.iter().map(ChartName::slug).collect();
                format!("unknown chart '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhv_core::{Listing, DEFAULT_COLUMNS};

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec![
                Listing::new(1_480_000.0, 202.0)
                    .with_distance(2.5)
                    .with_type("h")
                    .with_region("Northern Metropolitan"),
                Listing::new(640_000.0, 0.0)
                    .with_distance(7.8)
                    .with_type("u")
                    .with_region("Southern Metropolitan"),
            ],
            DEFAULT_COLUMNS.to_vec(),
        )
    }

    #[test]
    fn test_every_chart_builds() {
        let data = housing_data(&sample_dataset()).unwrap();
        for name in ChartName::ALL {
            let spec = name.build(Arc::clone(&data)).unwrap();
            assert!(spec["datasets"][DATASET_NAME].is_array(), "{}", name);
        }
    }

    #[test]
    fn test_brush_roles_switch() {
        let data = housing_data(&sample_dataset()).unwrap();
        let forward = ChartName::BrushScatterHist.build(Arc::clone(&data)).unwrap();
        let switched = ChartName::BrushHistScatter.build(data).unwrap();

        assert_eq!(forward["hconcat"][0]["mark"]["type"], "circle");
        assert_eq!(forward["hconcat"][0]["params"][0]["name"], "brush");
        assert_eq!(forward["hconcat"][1]["mark"]["type"], "bar");
        assert!(forward["hconcat"][1]["transform"].is_array());

        assert_eq!(switched["hconcat"][0]["mark"]["type"], "bar");
        assert_eq!(switched["hconcat"][0]["params"][0]["select"], "interval");
        assert_eq!(switched["hconcat"][1]["mark"]["type"], "circle");
        assert!(switched["hconcat"][1]["transform"].is_array());
    }

    #[test]
    fn test_chart_dimensions() {
        let data = housing_data(&sample_dataset()).unwrap();
        let spec = ChartName::BrushScatterHist.build(data).unwrap();
        assert_eq!(spec["hconcat"][0]["width"], 400);
        assert_eq!(spec["hconcat"][1]["width"], 250);
        assert_eq!(spec["hconcat"][1]["height"], 350);
    }

    #[test]
    fn test_source_is_the_builder_body() {
        let source = ChartName::StaticScatter.source();
        assert!(source.starts_with("let scatter_fig = Chart::new(data)"));
        assert!(source.ends_with(".properties(500, 350);"));
        assert!(!source.contains("// echo:"));
        // Dedented to the builder's own indentation
        assert!(source.contains("\n    .mark(Mark::circle().size(50.0))"));

        for name in ChartName::ALL {
            assert!(!name.source().is_empty(), "{}", name);
        }
    }

    #[test]
    fn test_source_matches_built_sizes_and_roles() {
        let data = housing_data(&sample_dataset()).unwrap();
        for name in [ChartName::BrushScatterHist, ChartName::BrushHistScatter] {
            let source = name.source();
            let spec = name.build(Arc::clone(&data)).unwrap();
            for view in spec["hconcat"].as_array().unwrap() {
                let size = format!(".properties({}, {})", view["width"], view["height"]);
                assert!(source.contains(&size), "{} missing {}", name, size);
            }
        }
        let forward = ChartName::BrushScatterHist.source();
        assert!(forward.contains(".add_selection(&sel_option);\n// Price histogram"));
        assert!(forward.ends_with("let fig = scatter_graph | hist_graph;"));
        let switched = ChartName::BrushHistScatter.source();
        assert!(switched.ends_with("let fig = hist_graph | scatter_graph;"));
        assert!(ChartName::LegendScatter.source().contains(".bind_legend()"));
    }

    #[test]
    fn test_charts_build_on_empty_sample() {
        let empty = Dataset::new(Vec::new(), DEFAULT_COLUMNS.to_vec());
        let data = housing_data(&empty).unwrap();
        for name in ChartName::ALL {
            let spec = name.build(Arc::clone(&data)).unwrap();
            assert_eq!(spec["datasets"][DATASET_NAME], serde_json::json!([]), "{}", name);
        }
        let spec = ChartName::StaticScatter.build(data).unwrap();
        assert_eq!(spec["encoding"]["y"]["type"], "quantitative");
        assert_eq!(spec["encoding"]["color"]["type"], "nominal");
    }

    #[test]
    fn test_charts_build_without_distance_values() {
        let dataset = Dataset::new(
            vec![Listing::new(910_000.0, 350.0).with_type("t")],
            DEFAULT_COLUMNS.to_vec(),
        );
        let spec = ChartName::LegendScatter
            .build(housing_data(&dataset).unwrap())
            .unwrap();
        assert_eq!(spec["encoding"]["y"], serde_json::json!({"field": "Distance", "type": "quantitative"}));
        assert!(spec["datasets"][DATASET_NAME][0].get("Distance").is_none());
    }

    #[test]
    fn test_slug_round_trip_and_unknown() {
        assert_eq!("legend-scatter".parse::<ChartName>(), Ok(ChartName::LegendScatter));
        assert!("pie".parse::<ChartName>().unwrap_err().contains("static-scatter"));
    }
}
