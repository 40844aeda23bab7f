use crate::error::HousingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Columns of the Melbourne housing CSV that the dashboard knows how to read.
///
/// The raw Kaggle file has ~21 columns; only these are ever projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    Price,
    Landsize,
    Distance,
    Type,
    Regionname,
}

/// Column subset loaded by the dashboard.
pub const DEFAULT_COLUMNS: [Column; 5] = [
    Column::Price,
    Column::Landsize,
    Column::Distance,
    Column::Type,
    Column::Regionname,
];

impl Column {
    /// Header name exactly as it appears in the CSV.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Price => "Price",
            Column::Landsize => "Landsize",
            Column::Distance => "Distance",
            Column::Type => "Type",
            Column::Regionname => "Regionname",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Price | Column::Landsize | Column::Distance)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Column {
    type Err = HousingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DEFAULT_COLUMNS
            .iter()
            .copied()
            .find(|c| c.header().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HousingError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_names() {
        assert_eq!("Price".parse::<Column>().unwrap(), Column::Price);
        assert_eq!(" regionname ".parse::<Column>().unwrap(), Column::Regionname);
        assert!(matches!(
            "Suburb".parse::<Column>(),
            Err(HousingError::UnknownColumn(name)) if name == "Suburb"
        ));
    }

    #[test]
    fn test_numeric_columns() {
        let numeric: Vec<Column> = DEFAULT_COLUMNS.iter().copied().filter(Column::is_numeric).collect();
        assert_eq!(numeric, vec![Column::Price, Column::Landsize, Column::Distance]);
    }
}
