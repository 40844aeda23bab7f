//! Selection parameters.
//!
//! A selection only declares what the user can pick; Vega keeps the actual
//! selection state. A `point` selection toggles discrete values (optionally
//! through the legend), an `interval` selection is a brushed rectangle.

use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Point,
    Interval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionBind {
    Legend,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    name: String,
    kind: SelectionKind,
    fields: Vec<String>,
    bind: Option<SelectionBind>,
}

impl Selection {
    /// Multi-value selection; shift-click adds values.
    pub fn point(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SelectionKind::Point,
            fields: Vec::new(),
            bind: None,
        }
    }

    pub fn interval(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SelectionKind::Interval,
            fields: Vec::new(),
            bind: None,
        }
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Drive the selection by clicking legend entries instead of marks.
    pub fn bind_legend(mut self) -> Self {
        self.bind = Some(SelectionBind::Legend);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    pub fn field_names(&self) -> &[String] {
        &self.fields
    }

    pub(crate) fn to_param_json(&self) -> Value {
        let kind = match self.kind {
            SelectionKind::Point => "point",
            SelectionKind::Interval => "interval",
        };
        let select = if self.fields.is_empty() {
            json!(kind)
        } else {
            json!({ "type": kind, "fields": self.fields })
        };

        let mut obj = Map::new();
        obj.insert("name".into(), json!(self.name));
        obj.insert("select".into(), select);
        if let Some(SelectionBind::Legend) = self.bind {
            obj.insert("bind".into(), json!("legend"));
        }
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_point_param() {
        let sel = Selection::point("type_legend").fields(["Type"]).bind_legend();
        assert_eq!(
            sel.to_param_json(),
            json!({
                "name": "type_legend",
                "select": {"type": "point", "fields": ["Type"]},
                "bind": "legend"
            })
        );
    }

    #[test]
    fn test_interval_param() {
        let sel = Selection::interval("brush");
        assert_eq!(sel.kind(), SelectionKind::Interval);
        assert_eq!(
            sel.to_param_json(),
            json!({"name": "brush", "select": "interval"})
        );
    }
}
