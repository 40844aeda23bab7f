//! Inline datasets attached to charts.

use crate::error::VegaError;
use crate::field::FieldType;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named table of JSON records, inlined into the spec's top-level `datasets`.
///
/// Several views of one figure usually share the same table; it is held
/// behind `Arc` and emitted once per spec under its name.
///
/// Fields can be declared up front with a type. A declared field exists even
/// when no record carries it, e.g. an empty table or an all-missing column.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineData {
    name: String,
    values: Vec<Value>,
    schema: BTreeMap<String, FieldType>,
}

impl InlineData {
    pub fn from_values(name: &str, values: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            values,
            schema: BTreeMap::new(),
        })
    }

    /// Like [`InlineData::from_records`], with declared field types.
    pub fn from_records_with_schema<T, I, S>(
        name: &str,
        records: &[T],
        schema: I,
    ) -> Result<Arc<Self>, VegaError>
    where
        T: Serialize,
        I: IntoIterator<Item = (S, FieldType)>,
        S: Into<String>,
    {
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Arc::new(Self {
            name: name.to_string(),
            values,
            schema: schema.into_iter().map(|(f, t)| (f.into(), t)).collect(),
        }))
    }

    /// Serialize each record (anything `Serialize` that maps to a JSON object).
    pub fn from_records<T: Serialize>(name: &str, records: &[T]) -> Result<Arc<Self>, VegaError> {
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_values(name, values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn declared_type(&self, field: &str) -> Option<FieldType> {
        self.schema.get(field).copied()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.schema.contains_key(field) || self.values.iter().any(|v| v.get(field).is_some())
    }

    /// Type of `field`: the declared one if any, else inferred from the
    /// first non-null value.
    ///
    /// Numbers are quantitative, everything else nominal. A field that is
    /// present but null everywhere is treated as nominal; one that is neither
    /// declared nor ever present yields `None`.
    pub fn infer_type(&self, field: &str) -> Option<FieldType> {
        if let Some(declared) = self.declared_type(field) {
            return Some(declared);
        }
        if !self.has_field(field) {
            return None;
        }
        let first = self
            .values
            .iter()
            .filter_map(|v| v.get(field))
            .find(|v| !v.is_null());
        Some(match first {
            Some(Value::Number(_)) => FieldType::Quantitative,
            _ => FieldType::Nominal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_type() {
        let data = InlineData::from_values(
            "t",
            vec![
                json!({"Price": 1.0, "Type": "h", "Note": null}),
                json!({"Price": 2.0, "Type": "u", "Flag": true}),
            ],
        );
        assert_eq!(data.infer_type("Price"), Some(FieldType::Quantitative));
        assert_eq!(data.infer_type("Type"), Some(FieldType::Nominal));
        assert_eq!(data.infer_type("Flag"), Some(FieldType::Nominal));
        assert_eq!(data.infer_type("Note"), Some(FieldType::Nominal));
        assert_eq!(data.infer_type("Missing"), None);
    }

    #[test]
    fn test_infer_skips_leading_nulls() {
        let data = InlineData::from_values(
            "t",
            vec![json!({"Distance": null}), json!({"Distance": 3.5})],
        );
        assert_eq!(data.infer_type("Distance"), Some(FieldType::Quantitative));
    }

    #[test]
    fn test_declared_fields_exist_without_records() {
        let data = InlineData::from_records_with_schema::<Value, _, _>(
            "empty",
            &[],
            [("Price", FieldType::Quantitative), ("Type", FieldType::Nominal)],
        )
        .unwrap();
        assert!(data.is_empty());
        assert!(data.has_field("Price"));
        assert_eq!(data.infer_type("Price"), Some(FieldType::Quantitative));
        assert_eq!(data.infer_type("Type"), Some(FieldType::Nominal));
        assert_eq!(data.infer_type("Rooms"), None);
    }

    #[test]
    fn test_declared_type_wins_over_values() {
        let data = InlineData::from_records_with_schema(
            "t",
            &[json!({"Postcode": 3067})],
            [("Postcode", FieldType::Nominal)],
        )
        .unwrap();
        assert_eq!(data.infer_type("Postcode"), Some(FieldType::Nominal));
    }

    #[test]
    fn test_from_records() {
        #[derive(Serialize)]
        struct Row {
            a: u32,
        }
        let data = InlineData::from_records("rows", &[Row { a: 1 }, Row { a: 2 }]).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.values()[1]["a"], 2);
    }
}
