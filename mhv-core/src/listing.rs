use serde::{Deserialize, Serialize};

/// One property sale from the Melbourne housing dataset.
///
/// Field names serialize with the CSV header spelling so that chart encodings
/// can refer to `Price`, `Type`, etc. directly. Optional columns that were not
/// loaded, or were blank in the file, are left out of the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Sale price in AUD. NaN when the cell was blank or unparseable.
    #[serde(rename = "Price")]
    pub price: f64,
    /// Land size in square metres. NaN when the cell was blank or unparseable.
    #[serde(rename = "Landsize")]
    pub landsize: f64,
    /// Distance from the Melbourne CBD in kilometres
    #[serde(rename = "Distance", default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Dwelling type: `h` house, `u` unit, `t` townhouse
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(rename = "Regionname", default, skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

impl Listing {
    pub fn new(price: f64, landsize: f64) -> Self {
        Self {
            price,
            landsize,
            distance: None,
            property_type: None,
            region_name: None,
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_type(mut self, property_type: &str) -> Self {
        self.property_type = Some(property_type.to_string());
        self
    }

    pub fn with_region(mut self, region_name: &str) -> Self {
        self.region_name = Some(region_name.to_string());
        self
    }
}
