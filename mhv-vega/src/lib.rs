//! Declarative Vega-Lite chart specifications.
//!
//! Charts are assembled from a mark, an encoding and optional selections,
//! then serialized to a Vega-Lite v5 JSON spec. Everything interactive
//! (legend toggling, interval brushing, cross-filtering) is described here
//! and executed by Vega in the browser.
//!
//! ```rust
//! use mhv_vega::{Chart, Encoding, InlineData, Mark, ToVegaLite};
//! use serde_json::json;
//!
//! let data = InlineData::from_values("cars", vec![json!({"hp": 130, "origin": "USA"})]);
//! let chart = Chart::new(data)
//!     .mark(Mark::circle().size(50.0))
//!     .encode(Encoding::new().x("hp").y("count()").color("origin"))
//!     .properties(500, 350);
//! let spec = chart.to_vega_lite().unwrap();
//! assert_eq!(spec["mark"]["type"], "circle");
//! ```

pub mod chart;
pub mod data;
pub mod encoding;
pub mod error;
pub mod field;
pub mod mark;
pub mod selection;

pub use chart::{Chart, HConcat, ToVegaLite};
pub use data::InlineData;
pub use encoding::{Condition, Encoding, ValueChannel};
pub use error::VegaError;
pub use field::{Aggregate, FieldDef, FieldType};
pub use mark::{Mark, MarkKind};
pub use selection::{Selection, SelectionKind};

/// Schema URL stamped on every top-level spec.
pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
