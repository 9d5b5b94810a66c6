use crate::wkt::{parse_wkt, WktGeometry};
use geo_types::Coord;
use geojson::{Feature, Geometry, JsonObject, Value};

fn position(c: &Coord<f64>) -> Vec<f64> {
    vec![c.x, c.y]
}

fn positions(coords: &[Coord<f64>]) -> Vec<Vec<f64>> {
    coords.iter().map(position).collect()
}

fn rings(rings: &[Vec<Coord<f64>>]) -> Vec<Vec<Vec<f64>>> {
    rings
        .iter()
        .filter(|ring| !ring.is_empty())
        .map(|ring| positions(ring))
        .collect()
}

impl WktGeometry {
    /// Converts the tree into its GeoJSON structural equivalent.
    ///
    /// Coordinates pass through untouched, out-of-range values included; only
    /// the bounding box is defensive about ranges. Returns `None` when every
    /// sub-part of the geometry is empty (possible for hand-built trees; the
    /// parser never produces such a value).
    pub fn to_geojson(&self) -> Option<Geometry> {
        let value = match self {
            WktGeometry::Point(c) => Value::Point(position(c)),
            WktGeometry::LineString(coords) => {
                if coords.is_empty() {
                    return None;
                }
                Value::LineString(positions(coords))
            }
            WktGeometry::MultiPoint(coords) => {
                if coords.is_empty() {
                    return None;
                }
                Value::MultiPoint(positions(coords))
            }
            WktGeometry::Polygon(poly_rings) => {
                let kept = rings(poly_rings);
                if kept.is_empty() {
                    return None;
                }
                Value::Polygon(kept)
            }
            WktGeometry::MultiLineString(lines) => {
                let kept = rings(lines);
                if kept.is_empty() {
                    return None;
                }
                Value::MultiLineString(kept)
            }
            WktGeometry::MultiPolygon(polygons) => {
                let kept: Vec<_> = polygons
                    .iter()
                    .map(|poly| rings(poly))
                    .filter(|poly| !poly.is_empty())
                    .collect();
                if kept.is_empty() {
                    return None;
                }
                Value::MultiPolygon(kept)
            }
            WktGeometry::GeometryCollection(members) => {
                let geometries: Vec<Geometry> =
                    members.iter().filter_map(WktGeometry::to_geojson).collect();
                if geometries.is_empty() {
                    return None;
                }
                Value::GeometryCollection(geometries)
            }
        };
        Some(Geometry::new(value))
    }

    /// Wraps [`WktGeometry::to_geojson`] into a Feature carrying the given
    /// properties. `None` geometry means `None` feature; a Feature is never
    /// emitted with a null geometry field.
    pub fn to_feature(&self, properties: Option<JsonObject>) -> Option<Feature> {
        let geometry = self.to_geojson()?;
        Some(Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties,
            foreign_members: None,
        })
    }
}

/// GeoJSON geometry for a WKT string, or `None` when the string holds no
/// usable geometry. Total over arbitrary input.
pub fn geometry(wkt: &str) -> Option<Geometry> {
    parse_wkt(wkt)?.to_geojson()
}

/// GeoJSON Feature for a WKT string. Properties are passed through verbatim;
/// callers merge their own fields (titles, identifiers, URLs) into them.
pub fn feature(wkt: &str, properties: Option<JsonObject>) -> Option<Feature> {
    parse_wkt(wkt)?.to_feature(properties)
}
