// Integration tests for zone comparison and crop legends built from lot files on disk.

use std::io::Write;

use agrovisor::{
    compare_zones, CropLegend, CropSurfaces, FeatureLayer, FieldSet, ProjectionTable, Trend, ZoneId,
    ZoneTally,
};
use tempfile::NamedTempFile;

fn lot(zone: &str, hectares: f64, crop: &str, x: f64) -> String {
    format!(
        r#"{{ "type": "Feature",
              "properties": {{ "ZONA": "{zone}", "HECTAREAS": {hectares}, "CULTIVO": "{crop}" }},
              "geometry": {{ "type": "Polygon", "coordinates": [[[{x},0.0],[{x1},0.0],[{x1},1.0],[{x},0.0]]] }} }}"#,
        x1 = x + 1.0,
    )
}

fn write_lots(lots: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "type": "FeatureCollection", "features": [{}] }}"#, lots.join(",")).unwrap();
    file
}

fn write_projections(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn observed_hectares_are_compared_to_the_campaign() {
    let file = write_lots(&[
        lot("1", 90000.0, "Soja", 0.0),
        lot("2", 150000.0, "Maiz", 2.0),
        lot("2", 10000.0, "Trigo", 4.0),
        lot("3", 100000.0, "Soja", 6.0),
    ]);
    let layer = FeatureLayer::read_geojson(file.path(), 0).unwrap();
    let fields = FieldSet::detect(&layer);
    let tally = ZoneTally::from_surface(&layer, fields.zone.as_deref().unwrap(), fields.hectares.as_deref().unwrap());

    let projections = ProjectionTable::default();
    let summary = compare_zones(&tally, &projections, projections.order());

    let zones: Vec<&str> = summary.rows.iter().map(|r| r.zone.id()).collect();
    assert_eq!(zones, ["1", "2", "3", "4"]);

    let zone1 = &summary.rows[0];
    assert_eq!(zone1.projected, 84940.0);
    assert_eq!(zone1.difference, 5060.0);
    assert_eq!(zone1.trend, Trend::Above);

    let zone2 = &summary.rows[1];
    assert_eq!(zone2.actual, 160000.0);

    let zone4 = &summary.rows[3];
    assert_eq!(zone4.actual, 0.0);
    assert_eq!(zone4.percent, -100.0);
    assert_eq!(zone4.trend, Trend::Below);

    assert_eq!(summary.total_projected, 84940.0 + 155256.0 + 158675.0 + 134574.0);
    assert_eq!(summary.total_actual, 350000.0);
}

#[test]
fn projections_can_come_from_a_file() {
    let file = write_projections(r#"{ "zones": ["B", "A"], "hectares": { "A": 100, "B": 0 } }"#);
    let projections = ProjectionTable::read(file.path()).unwrap();
    assert_eq!(projections.order(), [ZoneId::new("B"), ZoneId::new("A")]);

    let tally: ZoneTally = [("A", 150.0), ("B", 20.0)].into_iter().collect();
    let summary = compare_zones(&tally, &projections, projections.order());

    // Zero projection never divides
    assert_eq!(summary.rows[0].percent, 0.0);
    assert_eq!(summary.rows[1].percent, 50.0);
}

#[test]
fn malformed_projection_file_is_an_error() {
    let file = write_projections(r#"{ "hectares": { "1": -5 } }"#);
    assert!(ProjectionTable::read(file.path()).is_err());
}

#[test]
fn crop_legend_ranks_crops_by_area() {
    let file = write_lots(&[
        lot("1", 10.0, "Trigo", 0.0),
        lot("1", 60.0, "Soja de primera", 2.0),
        lot("2", 30.0, "Trigo", 4.0),
    ]);
    let layer = FeatureLayer::read_geojson(file.path(), 0).unwrap();
    let surfaces = CropSurfaces::from_surface(&layer, "CULTIVO", "HECTAREAS");
    let legend = CropLegend::build(&surfaces, 8).unwrap();

    assert_eq!(legend.crop_count, 2);
    assert_eq!(legend.total, 100.0);
    assert_eq!(legend.entries[0].short_name, "Soja de primera");
    assert_eq!(legend.entries[0].percent, 60.0);
    assert_eq!(legend.entries[1].name, "Trigo");
    assert_eq!(legend.entries[1].hectares, 40.0);
}
