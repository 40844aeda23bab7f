//! Single views and horizontal concatenation.
//!
//! A figure is serialized in one pass that also validates it: every field
//! must exist in the view's data (bare fields get their type inferred from
//! it), and every selection used by a filter or condition must be declared
//! by exactly one view of the figure.

use crate::data::InlineData;
use crate::encoding::{Encoding, ValueChannel};
use crate::error::VegaError;
use crate::mark::Mark;
use crate::selection::Selection;
use crate::VEGA_LITE_SCHEMA;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;
use std::ops::BitOr;
use std::sync::Arc;

/// Anything that can be handed to the renderer as a complete spec.
pub trait ToVegaLite {
    fn to_vega_lite(&self) -> Result<Value, VegaError>;

    fn to_vega_lite_string(&self) -> Result<String, VegaError> {
        Ok(serde_json::to_string(&self.to_vega_lite()?)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    data: Arc<InlineData>,
    mark: Mark,
    encoding: Encoding,
    width: Option<u32>,
    height: Option<u32>,
    selections: Vec<Selection>,
    filters: Vec<String>,
}

impl Chart {
    pub fn new(data: Arc<InlineData>) -> Self {
        Self {
            data,
            mark: Mark::default(),
            encoding: Encoding::new(),
            width: None,
            height: None,
            selections: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn mark(mut self, mark: Mark) -> Self {
        self.mark = mark;
        self
    }

    pub fn encode(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn properties(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Declare a selection on this view: interacting with it drives the selection.
    pub fn add_selection(mut self, selection: &Selection) -> Self {
        self.selections.push(selection.clone());
        self
    }

    /// Only draw data inside `selection`.
    pub fn transform_filter(mut self, selection: &Selection) -> Self {
        self.filters.push(selection.name().to_string());
        self
    }

    pub fn data(&self) -> &Arc<InlineData> {
        &self.data
    }

    fn referenced_params(&self) -> impl Iterator<Item = &str> {
        self.filters
            .iter()
            .map(String::as_str)
            .chain(self.encoding.opacity.as_ref().and_then(ValueChannel::param))
    }

    fn view_json(&self) -> Result<Value, VegaError> {
        let mut encoding = Map::new();
        for (channel, def) in self.encoding.field_channels() {
            let field_type = match (&def.field, def.field_type) {
                (Some(field), explicit) => {
                    let inferred = self.data.infer_type(field).ok_or_else(|| {
                        VegaError::UnknownField {
                            field: field.clone(),
                            dataset: self.data.name().to_string(),
                        }
                    })?;
                    explicit.unwrap_or(inferred)
                }
                (None, Some(explicit)) => explicit,
                (None, None) => {
                    return Err(VegaError::InvalidShorthand(format!("{} channel without a field", channel)))
                }
            };
            encoding.insert(channel.into(), def.to_json(field_type));
        }
        if let Some(opacity) = &self.encoding.opacity {
            encoding.insert("opacity".into(), opacity.to_json());
        }

        for selection in &self.selections {
            for field in selection.field_names() {
                if !self.data.has_field(field) {
                    return Err(VegaError::UnknownField {
                        field: field.clone(),
                        dataset: self.data.name().to_string(),
                    });
                }
            }
        }

        let mut view = Map::new();
        view.insert("data".into(), json!({ "name": self.data.name() }));
        view.insert("mark".into(), self.mark.to_json());
        view.insert("encoding".into(), Value::Object(encoding));
        if let Some(width) = self.width {
            view.insert("width".into(), json!(width));
        }
        if let Some(height) = self.height {
            view.insert("height".into(), json!(height));
        }
        if !self.selections.is_empty() {
            let params: Vec<Value> = self.selections.iter().map(Selection::to_param_json).collect();
            view.insert("params".into(), Value::Array(params));
        }
        if !self.filters.is_empty() {
            let transforms: Vec<Value> = self
                .filters
                .iter()
                .map(|name| json!({ "filter": { "param": name } }))
                .collect();
            view.insert("transform".into(), Value::Array(transforms));
        }
        Ok(Value::Object(view))
    }
}

/// Side-by-side views, built with `left | right`.
#[derive(Debug, Clone, PartialEq)]
pub struct HConcat {
    charts: Vec<Chart>,
}

impl HConcat {
    pub fn new(charts: Vec<Chart>) -> Self {
        Self { charts }
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }
}

impl BitOr for Chart {
    type Output = HConcat;

    fn bitor(self, rhs: Chart) -> HConcat {
        HConcat::new(vec![self, rhs])
    }
}

impl BitOr<Chart> for HConcat {
    type Output = HConcat;

    fn bitor(mut self, rhs: Chart) -> HConcat {
        self.charts.push(rhs);
        self
    }
}

/// Check selection declarations and references across all views of a figure.
fn validate_params(charts: &[Chart]) -> Result<(), VegaError> {
    let mut declared = BTreeSet::new();
    for chart in charts {
        for selection in &chart.selections {
            if !declared.insert(selection.name()) {
                return Err(VegaError::DuplicateSelection(selection.name().to_string()));
            }
        }
    }
    for chart in charts {
        for param in chart.referenced_params() {
            if !declared.contains(param) {
                return Err(VegaError::UndeclaredSelection(param.to_string()));
            }
        }
    }
    Ok(())
}

/// Top-level `datasets`, one entry per distinct data name.
fn datasets_json(charts: &[Chart]) -> Value {
    let mut datasets = Map::new();
    for chart in charts {
        let name = chart.data.name();
        if !datasets.contains_key(name) {
            datasets.insert(name.to_string(), Value::Array(chart.data.values().to_vec()));
        }
    }
    Value::Object(datasets)
}

fn top_level(charts: &[Chart], body: Map<String, Value>) -> Value {
    let mut spec = Map::new();
    spec.insert("$schema".into(), json!(VEGA_LITE_SCHEMA));
    spec.insert("datasets".into(), datasets_json(charts));
    spec.extend(body);
    Value::Object(spec)
}

impl ToVegaLite for Chart {
    fn to_vega_lite(&self) -> Result<Value, VegaError> {
        let charts = std::slice::from_ref(self);
        validate_params(charts)?;
        let body = match self.view_json()? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Ok(top_level(charts, body))
    }
}

impl ToVegaLite for HConcat {
    fn to_vega_lite(&self) -> Result<Value, VegaError> {
        validate_params(&self.charts)?;
        let views = self
            .charts
            .iter()
            .map(Chart::view_json)
            .collect::<Result<Vec<_>, _>>()?;
        let mut body = Map::new();
        body.insert("hconcat".into(), Value::Array(views));
        log::debug!("vega: built hconcat spec with {} views", self.charts.len());
        Ok(top_level(&self.charts, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Condition;
    use crate::field::FieldDef;
    use serde_json::json;

    fn housing() -> Arc<InlineData> {
        InlineData::from_values(
            "housing",
            vec![
                json!({"Price": 850000.0, "Landsize": 120.0, "Distance": 4.2, "Type": "u"}),
                json!({"Price": 1250000.0, "Landsize": 560.0, "Distance": 11.0, "Type": "h"}),
            ],
        )
    }

    #[test]
    fn test_static_scatter_spec() {
        let chart = Chart::new(housing())
            .mark(Mark::circle().size(50.0))
            .encode(Encoding::new().x("Price").y("Distance").color("Type"))
            .properties(500, 350);
        let spec = chart.to_vega_lite().unwrap();

        assert_eq!(spec["$schema"], VEGA_LITE_SCHEMA);
        assert_eq!(spec["data"], json!({"name": "housing"}));
        assert_eq!(spec["datasets"]["housing"].as_array().unwrap().len(), 2);
        assert_eq!(spec["mark"], json!({"type": "circle", "size": 50.0}));
        assert_eq!(spec["encoding"]["x"], json!({"field": "Price", "type": "quantitative"}));
        assert_eq!(spec["encoding"]["color"], json!({"field": "Type", "type": "nominal"}));
        assert_eq!(spec["width"], 500);
        assert_eq!(spec["height"], 350);
        assert!(spec.get("params").is_none());
    }

    #[test]
    fn test_legend_selection_drives_opacity() {
        let legend = Selection::point("type_legend").fields(["Type"]).bind_legend();
        let chart = Chart::new(housing())
            .encode(
                Encoding::new()
                    .x("Price")
                    .y("Distance")
                    .color("Type")
                    .opacity(Condition::param(&legend, 1.0, 0.1)),
            )
            .add_selection(&legend);
        let spec = chart.to_vega_lite().unwrap();
        assert_eq!(spec["params"][0]["bind"], "legend");
        assert_eq!(spec["encoding"]["opacity"]["condition"]["param"], "type_legend");
        assert_eq!(spec["encoding"]["opacity"]["value"], 0.1);
    }

    #[test]
    fn test_hconcat_shares_one_dataset() {
        let brush = Selection::interval("brush");
        let scatter = Chart::new(housing())
            .mark(Mark::circle())
            .encode(Encoding::new().x("Landsize").y("Distance"))
            .add_selection(&brush);
        let hist = Chart::new(housing())
            .mark(Mark::bar())
            .encode(
                Encoding::new()
                    .x(FieldDef::parse("Price:Q").unwrap().bin(true))
                    .y("count()"),
            )
            .transform_filter(&brush);
        let spec = (scatter | hist).to_vega_lite().unwrap();

        assert_eq!(spec["datasets"].as_object().unwrap().len(), 1);
        let views = spec["hconcat"].as_array().unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0]["params"][0]["name"], "brush");
        assert_eq!(views[1]["transform"], json!([{"filter": {"param": "brush"}}]));
        assert_eq!(views[1]["encoding"]["x"]["bin"], true);
        assert_eq!(views[1]["encoding"]["y"]["aggregate"], "count");
    }

    #[test]
    fn test_filter_on_undeclared_selection_fails() {
        let brush = Selection::interval("brush");
        let chart = Chart::new(housing())
            .encode(Encoding::new().x("Price"))
            .transform_filter(&brush);
        assert!(matches!(
            chart.to_vega_lite(),
            Err(VegaError::UndeclaredSelection(name)) if name == "brush"
        ));
    }

    #[test]
    fn test_selection_declared_twice_fails() {
        let brush = Selection::interval("brush");
        let a = Chart::new(housing()).encode(Encoding::new().x("Price")).add_selection(&brush);
        let b = Chart::new(housing()).encode(Encoding::new().x("Price")).add_selection(&brush);
        assert!(matches!(
            (a | b).to_vega_lite(),
            Err(VegaError::DuplicateSelection(_))
        ));
    }

    #[test]
    fn test_unknown_field_fails() {
        let chart = Chart::new(housing()).encode(Encoding::new().x("Rooms"));
        assert!(matches!(
            chart.to_vega_lite(),
            Err(VegaError::UnknownField { field, .. }) if field == "Rooms"
        ));
    }

    #[test]
    fn test_explicit_type_overrides_inference() {
        let chart = Chart::new(housing()).encode(Encoding::new().x("Price:O"));
        let spec = chart.to_vega_lite().unwrap();
        assert_eq!(spec["encoding"]["x"]["type"], "ordinal");
    }
}
