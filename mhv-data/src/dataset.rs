use mhv_core::{Column, HousingError, Listing};
use std::io::Write;

/// A filtered, sampled, re-indexed table of listings.
///
/// The row index is the position in `rows`, starting at 0. A dataset is
/// immutable once built and shared behind `Arc` by the loader cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Listing>,
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(rows: Vec<Listing>, columns: Vec<Column>) -> Self {
        Self { rows, columns }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, index: usize) -> Option<&Listing> {
        self.rows.get(index)
    }

    /// Write the table as CSV with a leading `index` column.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<(), HousingError> {
        let mut wtr = csv::Writer::from_writer(out);

        let mut header = vec!["index"];
        header.extend(self.columns.iter().map(|c| c.header()));
        wtr.write_record(&header)?;

        for (idx, row) in self.rows.iter().enumerate() {
            let mut record = vec![idx.to_string()];
            for column in &self.columns {
                record.push(cell(row, *column));
            }
            wtr.write_record(&record)?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

fn cell(row: &Listing, column: Column) -> String {
    match column {
        Column::Price => row.price.to_string(),
        Column::Landsize => row.landsize.to_string(),
        Column::Distance => row.distance.map(|d| d.to_string()).unwrap_or_default(),
        Column::Type => row.property_type.clone().unwrap_or_default(),
        Column::Regionname => row.region_name.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhv_core::DEFAULT_COLUMNS;

    #[test]
    fn test_write_csv_with_index() {
        let dataset = Dataset::new(
            vec![
                Listing::new(850000.0, 120.0)
                    .with_distance(4.2)
                    .with_type("u")
                    .with_region("Southern Metropolitan"),
                Listing::new(1200000.0, 400.0).with_type("h"),
            ],
            DEFAULT_COLUMNS.to_vec(),
        );
        let mut buf = Vec::new();
        dataset.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,Price,Landsize,Distance,Type,Regionname");
        assert_eq!(lines[1], "0,850000,120,4.2,u,Southern Metropolitan");
        assert_eq!(lines[2], "1,1200000,400,,h,");
    }

    #[test]
    fn test_get_by_index() {
        let dataset = Dataset::new(vec![Listing::new(1.0, 1.0)], vec![Column::Price, Column::Landsize]);
        assert_eq!(dataset.len(), 1);
        assert!(dataset.get(0).is_some());
        assert!(dataset.get(1).is_none());
    }
}
