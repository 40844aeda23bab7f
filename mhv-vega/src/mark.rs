use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Circle,
    Point,
    Bar,
    Line,
    Tick,
}

impl MarkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkKind::Circle => "circle",
            MarkKind::Point => "point",
            MarkKind::Bar => "bar",
            MarkKind::Line => "line",
            MarkKind::Tick => "tick",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub kind: MarkKind,
    pub size: Option<f64>,
    pub tooltip: bool,
}

impl Mark {
    pub fn new(kind: MarkKind) -> Self {
        Self {
            kind,
            size: None,
            tooltip: false,
        }
    }

    pub fn circle() -> Self {
        Self::new(MarkKind::Circle)
    }

    pub fn bar() -> Self {
        Self::new(MarkKind::Bar)
    }

    /// Area of the mark in square pixels.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".into(), json!(self.kind.as_str()));
        if let Some(size) = self.size {
            obj.insert("size".into(), json!(size));
        }
        if self.tooltip {
            obj.insert("tooltip".into(), json!(true));
        }
        Value::Object(obj)
    }
}

impl Default for Mark {
    fn default() -> Self {
        Self::new(MarkKind::Point)
    }
}
