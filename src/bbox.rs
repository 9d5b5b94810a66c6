use crate::wkt::{parse_wkt, WktGeometry};
use geo_types::Coord;

/// Axis-aligned bounds of a geometry in degrees: max/min latitude (north,
/// south) and max/min longitude (east, west).
///
/// Absence of a box (`None` from the constructors) is the "no geometry"
/// state; callers caching these fields must clear all four rather than keep
/// stale values. Whenever a box exists, `north >= south` and `east >= west`;
/// there is no wraparound handling across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

fn in_valid_range(c: Coord<f64>) -> bool {
    (-180.0..=180.0).contains(&c.x) && (-90.0..=90.0).contains(&c.y)
}

impl BoundingBox {
    /// Parses the WKT string and computes the union box over every valid
    /// coordinate pair in it. Total over arbitrary input.
    pub fn from_wkt(wkt: &str) -> Option<Self> {
        Self::from_geometry(&parse_wkt(wkt)?)
    }

    /// Union box over every coordinate pair anywhere in the tree, collection
    /// members included. Pairs outside lat [-90, 90] / lng [-180, 180] are
    /// excluded from the accumulation; `None` if no valid pair exists.
    pub fn from_geometry(geometry: &WktGeometry) -> Option<Self> {
        let mut bbox: Option<BoundingBox> = None;
        geometry.for_each_coord(&mut |c| {
            if !in_valid_range(c) {
                log::debug!("excluding out-of-range coordinate ({}, {}) from bbox", c.x, c.y);
                return;
            }
            bbox = Some(match bbox {
                None => BoundingBox {
                    north: c.y,
                    south: c.y,
                    east: c.x,
                    west: c.x,
                },
                Some(b) => BoundingBox {
                    north: b.north.max(c.y),
                    south: b.south.min(c.y),
                    east: b.east.max(c.x),
                    west: b.west.min(c.x),
                },
            });
        });
        bbox
    }

    /// Midpoint of the box as (lng, lat). Crude centroid stand-in for
    /// placing a marker or centering a map view.
    pub fn center(&self) -> Coord<f64> {
        Coord {
            x: (self.east + self.west) / 2.0,
            y: (self.north + self.south) / 2.0,
        }
    }

    /// Whether two boxes overlap, edges included. This is the test a caller
    /// runs against a map viewport to select records worth drawing.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.south <= other.north
            && self.north >= other.south
            && self.west <= other.east
            && self.east >= other.west
    }
}

/// Bounding box for a WKT string, or `None` when it holds no valid
/// coordinates. See [`BoundingBox::from_geometry`].
pub fn bounding_box(wkt: &str) -> Option<BoundingBox> {
    BoundingBox::from_wkt(wkt)
}
