//! CSV reader with column projection.
//!
//! The Kaggle export carries many columns the dashboard never looks at, so the
//! reader resolves the requested columns against the header once and only
//! parses those cells for each record.
//!
//! # CSV Format
//!
//! Has headers; columns may appear in any order:
//! ```text
//! Suburb,Rooms,Type,Price,Distance,Landsize,Regionname
//! Abbotsford,2,h,1480000.0,2.5,202.0,Northern Metropolitan
//! ```

use crate::column::Column;
use crate::error::HousingError;
use crate::listing::Listing;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column positions resolved against a concrete CSV header.
#[derive(Debug, Default)]
struct Projection {
    price: Option<usize>,
    landsize: Option<usize>,
    distance: Option<usize>,
    property_type: Option<usize>,
    region_name: Option<usize>,
}

impl Projection {
    fn resolve(headers: &StringRecord, columns: &[Column]) -> Result<Self, HousingError> {
        for required in [Column::Price, Column::Landsize] {
            if !columns.contains(&required) {
                return Err(HousingError::FilterColumnNotSelected(required));
            }
        }

        let mut projection = Projection::default();
        for column in columns {
            let idx = headers
                .iter()
                .position(|h| h.trim() == column.header())
                .ok_or_else(|| HousingError::MissingColumn(column.header().to_string()))?;
            match column {
                Column::Price => projection.price = Some(idx),
                Column::Landsize => projection.landsize = Some(idx),
                Column::Distance => projection.distance = Some(idx),
                Column::Type => projection.property_type = Some(idx),
                Column::Regionname => projection.region_name = Some(idx),
            }
        }
        Ok(projection)
    }

    fn listing(&self, record: &StringRecord) -> Listing {
        Listing {
            price: numeric_cell(record, self.price).unwrap_or(f64::NAN),
            landsize: numeric_cell(record, self.landsize).unwrap_or(f64::NAN),
            distance: numeric_cell(record, self.distance),
            property_type: text_cell(record, self.property_type),
            region_name: text_cell(record, self.region_name),
        }
    }
}

fn numeric_cell(record: &StringRecord, idx: Option<usize>) -> Option<f64> {
    idx.and_then(|i| record.get(i))
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

fn text_cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Read listings from any CSV source, keeping only `columns`.
///
/// `columns` must include `Price` and `Landsize`, and every entry must exist
/// in the header. Blank numeric cells become NaN (price/landsize) or `None`.
pub fn read_listings<R: Read>(source: R, columns: &[Column]) -> Result<Vec<Listing>, HousingError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = rdr.headers()?.clone();
    let projection = Projection::resolve(&headers, columns)?;

    let mut listings = Vec::new();
    for result in rdr.records() {
        let record = result?;
        listings.push(projection.listing(&record));
    }
    log::debug!("reader: parsed {} listings", listings.len());
    Ok(listings)
}

/// Read listings from an in-memory CSV string (e.g. data embedded with `include_str!`).
pub fn read_listings_str(csv_data: &str, columns: &[Column]) -> Result<Vec<Listing>, HousingError> {
    read_listings(csv_data.as_bytes(), columns)
}

/// Read listings from a CSV file on disk.
pub fn read_listings_path(path: &Path, columns: &[Column]) -> Result<Vec<Listing>, HousingError> {
    let file = File::open(path).map_err(|source| HousingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("reader: loading {}", path.display());
    read_listings(file, columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::DEFAULT_COLUMNS;

    const SAMPLE_CSV: &str = "\
Suburb,Rooms,Type,Price,Method,Distance,Landsize,Regionname
Abbotsford,2,h,1480000.0,S,2.5,202.0,Northern Metropolitan
Abbotsford,2,h,1035000.0,S,2.5,156.0,Northern Metropolitan
Airport West,3,t,840000.0,PI,13.5,,Western Metropolitan
Albert Park,2,u,,VB,3.3,0.0,Southern Metropolitan
";

    #[test]
    fn test_reads_projected_columns() {
        let listings = read_listings_str(SAMPLE_CSV, &DEFAULT_COLUMNS).unwrap();
        assert_eq!(listings.len(), 4);
        assert_eq!(listings[0].price, 1_480_000.0);
        assert_eq!(listings[0].landsize, 202.0);
        assert_eq!(listings[0].distance, Some(2.5));
        assert_eq!(listings[0].property_type.as_deref(), Some("h"));
        assert_eq!(listings[0].region_name.as_deref(), Some("Northern Metropolitan"));
    }

    #[test]
    fn test_blank_numeric_cells_are_nan() {
        let listings = read_listings_str(SAMPLE_CSV, &DEFAULT_COLUMNS).unwrap();
        assert!(listings[2].landsize.is_nan());
        assert!(listings[3].price.is_nan());
    }

    #[test]
    fn test_unrequested_columns_are_skipped() {
        let listings =
            read_listings_str(SAMPLE_CSV, &[Column::Price, Column::Landsize]).unwrap();
        assert!(listings.iter().all(|l| l.distance.is_none()));
        assert!(listings.iter().all(|l| l.property_type.is_none()));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv_data = "Price,Landsize,Type\n100,10,h\n";
        let err = read_listings_str(csv_data, &DEFAULT_COLUMNS).unwrap_err();
        assert!(matches!(err, HousingError::MissingColumn(name) if name == "Distance"));
    }

    #[test]
    fn test_filter_columns_must_be_selected() {
        let err = read_listings_str(SAMPLE_CSV, &[Column::Price, Column::Type]).unwrap_err();
        assert!(matches!(
            err,
            HousingError::FilterColumnNotSelected(Column::Landsize)
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("does/not/exist/melb_data.csv");
        let err = read_listings_path(path, &DEFAULT_COLUMNS).unwrap_err();
        match err {
            HousingError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
