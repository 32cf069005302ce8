pub mod csv;
pub mod geojson;

pub use self::csv::CellsToCsv;
pub use self::geojson::{write_geojson, CellsToGeoJson};

/// Geometry column rendering for tabular exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryFormat {
    #[default]
    Wkt,
    GeoJson,
}
