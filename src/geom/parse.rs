use crate::util::error::HextileError;
use geo::BoundingRect;
use geo_types::{Geometry, Rect};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string and returns the axis-aligned rect bounding it,
/// ready to be tessellated.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn region_rect(s: &str) -> Result<Rect<f64>, HextileError> {
    let geometry = parse_geometry(s)?;
    geometry
        .bounding_rect()
        .ok_or_else(|| HextileError::GeometryParseError("geometry has no extent".to_string()))
}

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, HextileError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

fn parse_geojson(s: &str) -> Result<Geometry<f64>, HextileError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| HextileError::GeometryParseError(e.to_string()))?;

    let geometry = match geojson {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature.geometry.ok_or_else(|| {
            HextileError::GeometryParseError("Feature has no geometry".to_string())
        })?,
        GeoJson::FeatureCollection(_) => {
            return Err(HextileError::GeometryParseError(
                "FeatureCollection not supported, use individual geometries".to_string(),
            ));
        }
    };

    Geometry::try_from(geometry).map_err(|e| HextileError::GeometryParseError(e.to_string()))
}

fn parse_wkt(s: &str) -> Result<Geometry<f64>, HextileError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| HextileError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        HextileError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}
