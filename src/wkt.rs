use crate::error::WktError;
use geo_types::Coord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A geometry decoded from WKT text.
///
/// Positions are `geo_types::Coord` with `x` = longitude and `y` = latitude,
/// in the order they appear in the source text. Rings are kept exactly as
/// written: no forced closure, no winding-order correction.
#[derive(Debug, Clone, PartialEq)]
pub enum WktGeometry {
    Point(Coord<f64>),
    LineString(Vec<Coord<f64>>),
    Polygon(Vec<Vec<Coord<f64>>>),
    MultiPoint(Vec<Coord<f64>>),
    MultiLineString(Vec<Vec<Coord<f64>>>),
    MultiPolygon(Vec<Vec<Vec<Coord<f64>>>>),
    /// Members are any of the six non-collection kinds. A collection nested
    /// inside a collection is not recognized as a member; its inner
    /// geometries are picked up individually instead.
    GeometryCollection(Vec<WktGeometry>),
}

/// The seven WKT geometry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WktKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl WktKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            WktKind::Point => "POINT",
            WktKind::LineString => "LINESTRING",
            WktKind::Polygon => "POLYGON",
            WktKind::MultiPoint => "MULTIPOINT",
            WktKind::MultiLineString => "MULTILINESTRING",
            WktKind::MultiPolygon => "MULTIPOLYGON",
            WktKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl fmt::Display for WktKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// Longest keyword first, so POINT does not match inside MULTIPOINT.
const KIND_PREFIXES: [WktKind; 7] = [
    WktKind::GeometryCollection,
    WktKind::MultiPolygon,
    WktKind::MultiLineString,
    WktKind::MultiPoint,
    WktKind::Polygon,
    WktKind::LineString,
    WktKind::Point,
];

// Same order, minus GEOMETRYCOLLECTION: collections do not nest.
const MEMBER_PREFIXES: [WktKind; 6] = [
    WktKind::MultiPolygon,
    WktKind::MultiLineString,
    WktKind::MultiPoint,
    WktKind::Polygon,
    WktKind::LineString,
    WktKind::Point,
];

/// Detects the geometry kind from the leading keyword, case-insensitively.
pub fn detect_kind(wkt: &str) -> Option<WktKind> {
    let upper = wkt.trim().to_ascii_uppercase();
    KIND_PREFIXES
        .iter()
        .find(|kind| upper.starts_with(kind.keyword()))
        .copied()
}

/// Parses a WKT string into a geometry tree, best-effort.
///
/// Returns `None` when nothing usable can be extracted; sub-components of a
/// composite geometry that fail to parse are dropped while their siblings are
/// kept. Never panics on malformed input.
pub fn parse_wkt(wkt: &str) -> Option<WktGeometry> {
    let trimmed = wkt.trim();
    let kind = detect_kind(trimmed)?;
    let content = outer_content(trimmed)?;
    parse_body(kind, content)
}

impl FromStr for WktGeometry {
    type Err = WktError;

    /// Strict variant of [`parse_wkt`] for callers that validate user input
    /// and want to know why a string was rejected. The accepted inputs are
    /// identical to the lenient path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(WktError::Empty);
        }
        let kind = detect_kind(trimmed).ok_or(WktError::UnknownKeyword)?;
        let content = outer_content(trimmed).ok_or(WktError::MissingBody(kind))?;
        parse_body(kind, content).ok_or(WktError::NoCoordinates(kind))
    }
}

impl WktGeometry {
    pub fn kind(&self) -> WktKind {
        match self {
            WktGeometry::Point(_) => WktKind::Point,
            WktGeometry::LineString(_) => WktKind::LineString,
            WktGeometry::Polygon(_) => WktKind::Polygon,
            WktGeometry::MultiPoint(_) => WktKind::MultiPoint,
            WktGeometry::MultiLineString(_) => WktKind::MultiLineString,
            WktGeometry::MultiPolygon(_) => WktKind::MultiPolygon,
            WktGeometry::GeometryCollection(_) => WktKind::GeometryCollection,
        }
    }

    /// Visits every coordinate pair in the tree, in source order, including
    /// pairs inside collection members.
    pub fn for_each_coord<F: FnMut(Coord<f64>)>(&self, f: &mut F) {
        match self {
            WktGeometry::Point(c) => f(*c),
            WktGeometry::LineString(coords) | WktGeometry::MultiPoint(coords) => {
                for c in coords {
                    f(*c);
                }
            }
            WktGeometry::Polygon(rings) | WktGeometry::MultiLineString(rings) => {
                for ring in rings {
                    for c in ring {
                        f(*c);
                    }
                }
            }
            WktGeometry::MultiPolygon(polygons) => {
                for rings in polygons {
                    for ring in rings {
                        for c in ring {
                            f(*c);
                        }
                    }
                }
            }
            WktGeometry::GeometryCollection(members) => {
                for member in members {
                    member.for_each_coord(f);
                }
            }
        }
    }
}

fn parse_body(kind: WktKind, content: &str) -> Option<WktGeometry> {
    match kind {
        WktKind::Point => coord_pair(content).map(WktGeometry::Point),
        WktKind::LineString => {
            let coords = coord_sequence(content);
            (!coords.is_empty()).then_some(WktGeometry::LineString(coords))
        }
        WktKind::MultiPoint => {
            let coords = coord_sequence(content);
            (!coords.is_empty()).then_some(WktGeometry::MultiPoint(coords))
        }
        WktKind::Polygon => {
            let rings = ring_groups(content);
            (!rings.is_empty()).then_some(WktGeometry::Polygon(rings))
        }
        WktKind::MultiLineString => {
            let lines = ring_groups(content);
            (!lines.is_empty()).then_some(WktGeometry::MultiLineString(lines))
        }
        WktKind::MultiPolygon => {
            let mut polygons = Vec::new();
            for group in paren_groups(content) {
                let rings = ring_groups(group);
                if rings.is_empty() {
                    log::debug!("dropping polygon with no usable rings in MULTIPOLYGON");
                } else {
                    polygons.push(rings);
                }
            }
            (!polygons.is_empty()).then_some(WktGeometry::MultiPolygon(polygons))
        }
        WktKind::GeometryCollection => {
            let members = collection_members(content);
            (!members.is_empty()).then_some(WktGeometry::GeometryCollection(members))
        }
    }
}

/// Slice between the first `(` and the final `)` of a trimmed WKT string.
fn outer_content(trimmed: &str) -> Option<&str> {
    let open = trimmed.find('(')?;
    if !trimmed.ends_with(')') {
        return None;
    }
    let close = trimmed.len() - 1;
    (open < close).then(|| &trimmed[open + 1..close])
}

// Number shape for coordinate scanning: optional sign, digits, optional
// fractional part. Anything else is not a coordinate and gets skipped.
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("number pattern"));

fn numeric_token(token: &str) -> Option<f64> {
    if !NUMBER_RE.is_match(token) {
        return None;
    }
    token.parse().ok()
}

/// Two consecutive whitespace-separated numbers as (lng, lat).
fn coord_pair(segment: &str) -> Option<Coord<f64>> {
    let mut numbers = segment.split_whitespace().filter_map(numeric_token);
    let x = numbers.next()?;
    let y = numbers.next()?;
    Some(Coord { x, y })
}

/// Comma-separated coordinate pairs. Segments without two numeric tokens are
/// dropped, the rest of the sequence is kept.
fn coord_sequence(content: &str) -> Vec<Coord<f64>> {
    let mut coords = Vec::new();
    for segment in content.split(',') {
        match coord_pair(segment) {
            Some(c) => coords.push(c),
            None => log::debug!("dropping coordinate segment {segment:?}"),
        }
    }
    coords
}

/// Parenthesized groups parsed as rings. Rings with fewer than two valid
/// pairs cannot describe a line and are dropped.
fn ring_groups(content: &str) -> Vec<Vec<Coord<f64>>> {
    let mut rings = Vec::new();
    for group in paren_groups(content) {
        let ring = coord_sequence(group);
        if ring.len() < 2 {
            log::debug!("dropping ring with {} usable coordinates", ring.len());
        } else {
            rings.push(ring);
        }
    }
    rings
}

/// Byte offset of the `)` balancing the `(` at `open`.
fn matching_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &b) in bytes.iter().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Top-level balanced `(...)` spans of `content`, exclusive of the parens.
/// An unbalanced tail ends the scan; groups found before it are kept.
fn paren_groups(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut groups = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'(' {
            match matching_paren(bytes, i) {
                Some(close) => {
                    groups.push(&content[i + 1..close]);
                    i = close + 1;
                }
                None => break,
            }
        } else {
            i += 1;
        }
    }
    groups
}

fn member_keyword_at(upper: &[u8], at: usize) -> Option<WktKind> {
    MEMBER_PREFIXES
        .iter()
        .find(|kind| upper[at..].starts_with(kind.keyword().as_bytes()))
        .copied()
}

/// Scans a GEOMETRYCOLLECTION body for member keywords followed by a balanced
/// parenthesized body, in order of appearance. A member that fails to parse
/// is skipped without failing the collection.
fn collection_members(content: &str) -> Vec<WktGeometry> {
    let bytes = content.as_bytes();
    let upper = content.to_ascii_uppercase();
    let ubytes = upper.as_bytes();

    let mut members = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let Some(kind) = member_keyword_at(ubytes, i) else {
            i += 1;
            continue;
        };
        let mut body = i + kind.keyword().len();
        while body < bytes.len() && bytes[body].is_ascii_whitespace() {
            body += 1;
        }
        if body >= bytes.len() || bytes[body] != b'(' {
            // Keyword without a body; resume scanning right after it.
            i += kind.keyword().len();
            continue;
        }
        let Some(close) = matching_paren(bytes, body) else {
            break;
        };
        match parse_body(kind, &content[body + 1..close]) {
            Some(member) => members.push(member),
            None => log::debug!("skipping unparseable {kind} in GEOMETRYCOLLECTION"),
        }
        i = close + 1;
    }
    members
}
