use crate::field::FieldDef;
use crate::selection::Selection;
use serde_json::{json, Value};

/// A value picked according to whether a datum is inside a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub param: String,
    pub if_true: f64,
    pub if_false: f64,
}

impl Condition {
    pub fn param(selection: &Selection, if_true: f64, if_false: f64) -> Self {
        Self {
            param: selection.name().to_string(),
            if_true,
            if_false,
        }
    }
}

/// A channel set to a constant or to a selection-driven condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueChannel {
    Value(f64),
    Condition(Condition),
}

impl ValueChannel {
    pub(crate) fn to_json(&self) -> Value {
        match self {
            ValueChannel::Value(v) => json!({ "value": v }),
            ValueChannel::Condition(c) => json!({
                "condition": { "param": c.param, "value": c.if_true },
                "value": c.if_false,
            }),
        }
    }

    pub(crate) fn param(&self) -> Option<&str> {
        match self {
            ValueChannel::Condition(c) => Some(&c.param),
            ValueChannel::Value(_) => None,
        }
    }
}

impl From<Condition> for ValueChannel {
    fn from(c: Condition) -> Self {
        ValueChannel::Condition(c)
    }
}

impl From<f64> for ValueChannel {
    fn from(v: f64) -> Self {
        ValueChannel::Value(v)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encoding {
    pub x: Option<FieldDef>,
    pub y: Option<FieldDef>,
    pub color: Option<FieldDef>,
    pub opacity: Option<ValueChannel>,
}

impl Encoding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, def: impl Into<FieldDef>) -> Self {
        self.x = Some(def.into());
        self
    }

    pub fn y(mut self, def: impl Into<FieldDef>) -> Self {
        self.y = Some(def.into());
        self
    }

    pub fn color(mut self, def: impl Into<FieldDef>) -> Self {
        self.color = Some(def.into());
        self
    }

    pub fn opacity(mut self, channel: impl Into<ValueChannel>) -> Self {
        self.opacity = Some(channel.into());
        self
    }

    /// Field channels in emission order.
    pub(crate) fn field_channels(&self) -> impl Iterator<Item = (&'static str, &FieldDef)> {
        [("x", &self.x), ("y", &self.y), ("color", &self.color)]
            .into_iter()
            .filter_map(|(name, def)| def.as_ref().map(|d| (name, d)))
    }
}
