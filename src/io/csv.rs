use crate::api::cell::HexCell;
use crate::io::GeometryFormat;
use crate::util::error::HextileError;
use std::path::Path;

/// Trait for writing collections of [`HexCell`]s to CSV.
///
/// Implemented for `[HexCell]` and `Vec<HexCell>`.
pub trait CellsToCsv {
    /// Writes one record per cell: id, row, col, center_x, center_y and the
    /// cell polygon rendered per `format`.
    fn to_csv(&self, path: impl AsRef<Path>, format: GeometryFormat)
        -> Result<(), HextileError>;
}

impl CellsToCsv for [HexCell] {
    fn to_csv(
        &self,
        path: impl AsRef<Path>,
        format: GeometryFormat,
    ) -> Result<(), HextileError> {
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| HextileError::IoError(e.to_string()))?;

        writer
            .write_record(["id", "row", "col", "center_x", "center_y", "geometry"])
            .map_err(|e| HextileError::IoError(e.to_string()))?;

        for cell in self {
            let center = cell.center();
            let geometry = render_geometry(cell, format)?;
            writer
                .write_record([
                    cell.id.clone(),
                    cell.row.to_string(),
                    cell.col.to_string(),
                    center.x().to_string(),
                    center.y().to_string(),
                    geometry,
                ])
                .map_err(|e| HextileError::IoError(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| HextileError::IoError(e.to_string()))
    }
}

impl CellsToCsv for Vec<HexCell> {
    fn to_csv(
        &self,
        path: impl AsRef<Path>,
        format: GeometryFormat,
    ) -> Result<(), HextileError> {
        self.as_slice().to_csv(path, format)
    }
}

fn render_geometry(cell: &HexCell, format: GeometryFormat) -> Result<String, HextileError> {
    match format {
        GeometryFormat::Wkt => Ok(cell.to_wkt()),
        GeometryFormat::GeoJson => {
            let geometry = geojson::Geometry::new(geojson::Value::from(&cell.hexagon));
            serde_json::to_string(&geometry).map_err(|e| HextileError::IoError(e.to_string()))
        }
    }
}
