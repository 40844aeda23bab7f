//! Encoding field definitions and their shorthand syntax.
//!
//! Shorthand forms accepted by [`FieldDef::parse`]:
//! - `Price`: field with type inferred from the data
//! - `Price:Q`: explicit type (`Q`, `N`, `O`, `T`)
//! - `count()`: record count aggregate, no field

use crate::error::VegaError;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Quantitative,
    Nominal,
    Ordinal,
    Temporal,
}

impl FieldType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "Q" | "QUANTITATIVE" => Some(FieldType::Quantitative),
            "N" | "NOMINAL" => Some(FieldType::Nominal),
            "O" | "ORDINAL" => Some(FieldType::Ordinal),
            "T" | "TEMPORAL" => Some(FieldType::Temporal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Quantitative => "quantitative",
            FieldType::Nominal => "nominal",
            FieldType::Ordinal => "ordinal",
            FieldType::Temporal => "temporal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
}

/// One positional or color channel definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub field: Option<String>,
    pub field_type: Option<FieldType>,
    pub aggregate: Option<Aggregate>,
    pub bin: bool,
    pub title: Option<String>,
}

impl FieldDef {
    pub fn field(name: &str) -> Self {
        Self {
            field: Some(name.to_string()),
            field_type: None,
            aggregate: None,
            bin: false,
            title: None,
        }
    }

    pub fn count() -> Self {
        Self {
            field: None,
            field_type: Some(FieldType::Quantitative),
            aggregate: Some(Aggregate::Count),
            bin: false,
            title: None,
        }
    }

    pub fn parse(shorthand: &str) -> Result<Self, VegaError> {
        let s = shorthand.trim();
        if s.is_empty() {
            return Err(VegaError::InvalidShorthand(shorthand.to_string()));
        }
        if s.ends_with(')') {
            return match s {
                "count()" => Ok(Self::count()),
                _ => Err(VegaError::InvalidShorthand(shorthand.to_string())),
            };
        }
        match s.rsplit_once(':') {
            Some((name, code)) => {
                let field_type = FieldType::from_code(code)
                    .ok_or_else(|| VegaError::InvalidShorthand(shorthand.to_string()))?;
                if name.trim().is_empty() {
                    return Err(VegaError::InvalidShorthand(shorthand.to_string()));
                }
                Ok(Self::field(name.trim()).with_type(field_type))
            }
            None => Ok(Self::field(s)),
        }
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn bin(mut self, bin: bool) -> Self {
        self.bin = bin;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Emit the channel JSON. `field_type` must already be resolved.
    pub(crate) fn to_json(&self, field_type: FieldType) -> Value {
        let mut obj = Map::new();
        if let Some(field) = &self.field {
            obj.insert("field".into(), json!(field));
        }
        if let Some(Aggregate::Count) = self.aggregate {
            obj.insert("aggregate".into(), json!("count"));
        }
        obj.insert("type".into(), json!(field_type.as_str()));
        if self.bin {
            obj.insert("bin".into(), json!(true));
        }
        if let Some(title) = &self.title {
            obj.insert("title".into(), json!(title));
        }
        Value::Object(obj)
    }
}

/// Bare strings are shorthand. Invalid shorthand falls back to a plain field
/// name so that the unknown-field check reports it when the spec is built.
impl From<&str> for FieldDef {
    fn from(shorthand: &str) -> Self {
        Self::parse(shorthand).unwrap_or_else(|_| Self::field(shorthand))
    }
}
