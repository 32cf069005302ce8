use crate::api::cell::HexCell;
use crate::util::error::HextileError;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, GeoJson};
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Writes cells to a GeoJSON file as a FeatureCollection.
pub fn write_geojson(cells: &[HexCell], path: impl AsRef<Path>) -> Result<(), HextileError> {
    fs::write(path, cells.to_geojson_string()).map_err(|e| HextileError::IoError(e.to_string()))
}

/// Trait for converting collections of [`HexCell`]s to GeoJSON.
///
/// Implemented for `[HexCell]` and `Vec<HexCell>`.
pub trait CellsToGeoJson {
    /// Builds a FeatureCollection with one polygon feature per cell,
    /// carrying `id`, `row` and `col` properties.
    fn to_feature_collection(&self) -> FeatureCollection;
    /// Serializes the cells to a GeoJSON string.
    fn to_geojson_string(&self) -> String;
    /// Writes the cells to a GeoJSON file.
    fn to_geojson(&self, path: impl AsRef<Path>) -> Result<(), HextileError>;
}

impl CellsToGeoJson for [HexCell] {
    fn to_feature_collection(&self) -> FeatureCollection {
        let features: Vec<Feature> = self.par_iter().map(cell_to_feature).collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }

    fn to_geojson_string(&self) -> String {
        GeoJson::FeatureCollection(self.to_feature_collection()).to_string()
    }

    fn to_geojson(&self, path: impl AsRef<Path>) -> Result<(), HextileError> {
        write_geojson(self, path)
    }
}

impl CellsToGeoJson for Vec<HexCell> {
    fn to_feature_collection(&self) -> FeatureCollection {
        self.as_slice().to_feature_collection()
    }

    fn to_geojson_string(&self) -> String {
        self.as_slice().to_geojson_string()
    }

    fn to_geojson(&self, path: impl AsRef<Path>) -> Result<(), HextileError> {
        self.as_slice().to_geojson(path)
    }
}

fn cell_to_feature(cell: &HexCell) -> Feature {
    let mut properties = Map::with_capacity(3);
    properties.insert("id".to_string(), Value::from(cell.id.as_str()));
    properties.insert("row".to_string(), Value::from(cell.row));
    properties.insert("col".to_string(), Value::from(cell.col));

    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(&cell.hexagon))),
        id: Some(Id::String(cell.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tessellation::Tessellation;
    use tempfile::tempdir;

    #[test]
    fn test_feature_collection_carries_all_cells() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 300.0, 300.0, 0.0)?;

        let collection = grid.cells().to_feature_collection();
        assert_eq!(collection.features.len(), grid.len());

        let first = &collection.features[0];
        let properties = first.properties.as_ref().unwrap();
        assert_eq!(properties["id"], Value::from("0-0"));
        assert_eq!(properties["row"], Value::from(0));
        assert!(first.geometry.is_some());
        Ok(())
    }

    #[test]
    fn test_written_file_parses_back() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 300.0, 300.0, 0.0)?;

        let dir = tempdir().map_err(|e| HextileError::IoError(e.to_string()))?;
        let path = dir.path().join("grid.geojson");
        grid.cells().to_geojson(&path)?;

        let contents =
            std::fs::read_to_string(&path).map_err(|e| HextileError::IoError(e.to_string()))?;
        let parsed: GeoJson = contents
            .parse()
            .map_err(|e: geojson::Error| HextileError::GeometryParseError(e.to_string()))?;
        match parsed {
            GeoJson::FeatureCollection(collection) => {
                assert_eq!(collection.features.len(), grid.len());
            }
            _ => panic!("Expected FeatureCollection"),
        }
        Ok(())
    }
}
