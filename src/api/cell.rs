use crate::core::geometry::hexagon_vertices;
use crate::util::coord::Coordinate;
use crate::util::identifier::cell_id;
use geo::{Centroid, Contains};
use geo_types::{Point, Polygon};
use wkt::ToWkt;

/// A single indexed cell of a tessellation.
///
/// The hexagon polygon is the drift-corrected geometry produced by the
/// assembler; `row` and `col` locate the cell on the grid and `id` is the
/// stable `"{row}-{col}"` identifier.
///
/// # Example
///
/// ```
/// use hextile_rs::Tessellation;
///
/// # fn main() -> Result<(), hextile_rs::HextileError> {
/// let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 300.0, 300.0, 0.0)?;
/// let cell = grid.get(0, 0).unwrap();
/// assert_eq!(cell.id, "0-0");
/// assert_eq!(cell.vertices().len(), 6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    /// Unique `"{row}-{col}"` identifier within the tessellation.
    pub id: String,
    /// The cell polygon: 6 vertices, vertex 0 on top, clockwise, closed ring.
    pub hexagon: Polygon<f64>,
    /// Row index, increasing top-to-bottom.
    pub row: u32,
    /// Column index within the row, increasing left-to-right.
    pub col: u32,
}

impl HexCell {
    pub(crate) fn new(row: u32, col: u32, hexagon: Polygon<f64>) -> Self {
        Self {
            id: cell_id(row, col),
            hexagon,
            row,
            col,
        }
    }

    /// Center of the cell.
    pub fn center(&self) -> Point<f64> {
        self.hexagon.centroid().expect("hexagon has a centroid")
    }

    /// The six boundary vertices in construction order (top first,
    /// clockwise).
    pub fn vertices(&self) -> Vec<Point<f64>> {
        hexagon_vertices(&self.hexagon)
    }

    /// True if the point lies inside the cell.
    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        self.hexagon.contains(&Point::new(coord.x(), coord.y()))
    }

    /// WKT rendering of the cell polygon.
    pub fn to_wkt(&self) -> String {
        self.hexagon.wkt_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dimensions::CellSpec;
    use crate::core::geometry::create_hexagon;
    use crate::util::error::HextileError;

    fn cell() -> Result<HexCell, HextileError> {
        let spec = CellSpec::from_hectare(1.0)?;
        Ok(HexCell::new(2, 5, create_hexagon(&(250.0, 130.0), &spec)))
    }

    #[test]
    fn test_id_matches_position() -> Result<(), HextileError> {
        let cell = cell()?;
        assert_eq!(cell.id, "2-5");
        assert_eq!(cell.row, 2);
        assert_eq!(cell.col, 5);
        Ok(())
    }

    #[test]
    fn test_center_is_the_construction_center() -> Result<(), HextileError> {
        let cell = cell()?;
        let center = cell.center();
        assert!((center.x() - 250.0).abs() < 1e-9);
        assert!((center.y() - 130.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_contains_center_but_not_far_points() -> Result<(), HextileError> {
        let cell = cell()?;
        assert!(cell.contains(&(250.0, 130.0)));
        assert!(cell.contains(&Point::new(255.0, 135.0)));
        assert!(!cell.contains(&(500.0, 500.0)));
        Ok(())
    }

    #[test]
    fn test_wkt_is_a_polygon() -> Result<(), HextileError> {
        let cell = cell()?;
        let wkt = cell.to_wkt();
        assert!(wkt.starts_with("POLYGON"));
        Ok(())
    }
}
