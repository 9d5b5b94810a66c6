use geojson::Value;
use wkt_geojson::{bounding_box, feature, geometry, parse_wkt, WktGeometry, WktKind};

#[test]
fn test_hostile_inputs_never_panic() {
    let inputs = [
        "",
        " ",
        "\n\t",
        "NOT_VALID_WKT",
        "POINT",
        "POINT(",
        "POINT)",
        "POINT()",
        "POINT(abc def)",
        "POINT(1)",
        "POINT(1 2) trailing garbage",
        "LINESTRING()",
        "LINESTRING(,,,)",
        "POLYGON",
        "POLYGON()",
        "POLYGON(())",
        "POLYGON((0 0, 1 1",
        "POLYGON((0 0, 1 1)",
        "MULTIPOLYGON((()))",
        "GEOMETRYCOLLECTION",
        "GEOMETRYCOLLECTION()",
        "GEOMETRYCOLLECTION(POINT)",
        "GEOMETRYCOLLECTION(POINT())",
        "((((((((((",
        "))))))))))",
        "POLYGON((𝟙 𝟚, 1 1))",
        "POINT(999999999999999999999999 2)",
        "POINT(-- 2)",
        "POINT(1.2.3 4)",
    ];
    for wkt in inputs {
        // All three contracts are total; absence is None, never a panic.
        let _ = parse_wkt(wkt);
        let _ = geometry(wkt);
        let _ = feature(wkt, None);
        let _ = bounding_box(wkt);
    }
}

#[test]
fn test_unbalanced_polygon_is_unparseable() {
    // The ring scanner stops at the unbalanced tail and finds no ring.
    assert_eq!(parse_wkt("POLYGON((0 0, 1 1)"), None);
    assert_eq!(parse_wkt("POLYGON((0 0, 1 1"), None);
}

#[test]
fn test_trailing_text_after_body_rejected() {
    assert_eq!(parse_wkt("POINT(1 2) and some prose"), None);
}

#[test]
fn test_huge_coordinate_sequence() {
    let pairs: Vec<String> = (0..5000).map(|i| format!("{} {}", i % 180, i % 90)).collect();
    let wkt = format!("LINESTRING({})", pairs.join(", "));

    let WktGeometry::LineString(coords) = parse_wkt(&wkt).unwrap() else {
        panic!("expected LineString");
    };
    assert_eq!(coords.len(), 5000);

    let bbox = bounding_box(&wkt).unwrap();
    assert_eq!(bbox.north, 89.0);
    assert_eq!(bbox.south, 0.0);
    assert_eq!(bbox.east, 179.0);
    assert_eq!(bbox.west, 0.0);
}

#[test]
fn test_nested_collection_members_are_flattened() {
    // A collection nested inside a collection is not recognized as a member;
    // the scanner picks up its inner geometries individually instead. Known
    // limitation carried over from the reference behavior.
    let wkt = "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION(POINT(1 2)), POINT(3 4))";
    let WktGeometry::GeometryCollection(members) = parse_wkt(wkt).unwrap() else {
        panic!("expected GeometryCollection");
    };
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|m| m.kind() == WktKind::Point));
}

#[test]
fn test_parenthesized_multipoint_form_unsupported() {
    // Only the bare `MULTIPOINT(x y, x y)` form is accepted; the variant
    // wrapping each point in parentheses yields no usable coordinates.
    assert_eq!(parse_wkt("MULTIPOINT((1 2), (3 4))"), None);
    assert_eq!(parse_wkt("MULTIPOINT(1 2, 3 4)").map(|g| g.kind()), Some(WktKind::MultiPoint));
}

#[test]
fn test_multipolygon_drops_empty_polygon_keeps_rest() {
    let wkt = "MULTIPOLYGON((()), ((0 0, 1 0, 1 1, 0 0)))";
    let geom = geometry(wkt).unwrap();
    let Value::MultiPolygon(polygons) = geom.value else {
        panic!("expected MultiPolygon, got {:?}", geom.value);
    };
    assert_eq!(polygons.len(), 1);
}

#[test]
fn test_wkt_embedded_in_noise_inside_collection() {
    // Pattern scanning tolerates stray text between members.
    let wkt = "GEOMETRYCOLLECTION(POINT(1 2), ???, LINESTRING(0 0, 9 9))";
    let WktGeometry::GeometryCollection(members) = parse_wkt(wkt).unwrap() else {
        panic!("expected GeometryCollection");
    };
    assert_eq!(members.len(), 2);
}
