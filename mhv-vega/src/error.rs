use std::fmt;

/// Problems found while assembling a spec.
#[derive(Debug)]
pub enum VegaError {
    /// An encoding or selection names a field no record in the data has.
    UnknownField { field: String, dataset: String },
    /// A filter or condition references a selection that no view declares.
    UndeclaredSelection(String),
    /// Two views declare a selection with the same name.
    DuplicateSelection(String),
    /// Field shorthand such as `Price:X` or `sum(Price)` could not be parsed.
    InvalidShorthand(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for VegaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VegaError::UnknownField { field, dataset } => {
                write!(f, "field '{}' not found in dataset '{}'", field, dataset)
            }
            VegaError::UndeclaredSelection(name) => {
                write!(f, "selection '{}' is used but never added to a chart", name)
            }
            VegaError::DuplicateSelection(name) => {
                write!(f, "selection '{}' is added to more than one chart", name)
            }
            VegaError::InvalidShorthand(s) => write!(f, "invalid field shorthand '{}'", s),
            VegaError::Serialize(e) => write!(f, "failed to serialize chart data: {}", e),
        }
    }
}

impl std::error::Error for VegaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VegaError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for VegaError {
    fn from(e: serde_json::Error) -> Self {
        VegaError::Serialize(e)
    }
}
