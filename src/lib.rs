pub mod bbox;
pub mod convert;
pub mod error;
pub mod wasm;
pub mod wkt;


pub use bbox::{bounding_box, BoundingBox};
pub use convert::{feature, geometry};
pub use error::WktError;
pub use wkt::{detect_kind, parse_wkt, WktGeometry, WktKind};
