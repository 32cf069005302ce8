use crate::api::cell::HexCell;
use crate::core::assemble::assemble;
use crate::core::dimensions::CellSpec;
use crate::core::extent::Extent;
use crate::core::geometry::create_hexagon;
use crate::core::index::index_rows;
use crate::geom::parse::region_rect;
use crate::util::coord::Coordinate;
use crate::util::error::HextileError;
use crate::util::identifier::parse_cell_id;
use geo::Contains;
use geo_types::{Point, Polygon, Rect};

/// Builds a single regular hexagon of `hectare` area centered on `center`.
///
/// # Example
/// ```
/// use hextile_rs::hexagon;
///
/// # fn main() -> Result<(), hextile_rs::HextileError> {
/// let hex = hexagon(1.0, &(457500.0, 340000.0))?;
/// assert_eq!(hex.exterior().coords().count(), 7);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`HextileError::InvalidHectare`] if `hectare` is non-positive or
/// non-finite, [`HextileError::NonFiniteCoordinate`] if the center is.
pub fn hexagon<C: Coordinate>(hectare: f64, center: &C) -> Result<Polygon<f64>, HextileError> {
    let spec = CellSpec::from_hectare(hectare)?;
    if !center.x().is_finite() || !center.y().is_finite() {
        return Err(HextileError::NonFiniteCoordinate(center.x(), center.y()));
    }

    Ok(create_hexagon(center, &spec))
}

/// A complete hexagonal tessellation of a planar extent.
///
/// Cells cover the (margin-expanded) extent with no gaps, overshooting the
/// right and bottom edges by part of a cell, and are ordered top-to-bottom,
/// left-to-right with stable row/col indices. Immutable once built.
#[derive(Debug, Clone)]
pub struct Tessellation {
    cells: Vec<HexCell>,
    spec: CellSpec,
    extent: Extent,
}

impl Tessellation {
    pub fn builder() -> TessellationBuilder {
        TessellationBuilder::new()
    }

    /// Tessellates the extent expanded by `margin` with cells of `hectare`
    /// area.
    ///
    /// # Example
    /// ```
    /// use hextile_rs::Tessellation;
    ///
    /// # fn main() -> Result<(), hextile_rs::HextileError> {
    /// let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 100.0, 100.0, 0.0)?;
    /// assert!(grid.rows() >= 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_extent(
        hectare: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
        margin: f64,
    ) -> Result<Self, HextileError> {
        let spec = CellSpec::from_hectare(hectare)?;
        let extent = Extent::new(min_x, min_y, max_x, max_y)?.expanded(margin)?;

        let (uppers, lowers) = assemble(&spec, &extent);
        let cells = index_rows(uppers, lowers)
            .into_iter()
            .map(|indexed| HexCell::new(indexed.row, indexed.col, indexed.hexagon))
            .collect();

        Ok(Self {
            cells,
            spec,
            extent,
        })
    }

    pub fn from_rect(rect: &Rect<f64>, hectare: f64, margin: f64) -> Result<Self, HextileError> {
        Self::from_extent(
            hectare,
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
            margin,
        )
    }

    /// Tessellates the bounding box of a WKT or GeoJSON geometry string.
    pub fn from_geometry_str(s: &str, hectare: f64, margin: f64) -> Result<Self, HextileError> {
        let rect = region_rect(s)?;
        Self::from_rect(&rect, hectare, margin)
    }

    /// Requested cell area in hectares.
    pub fn hectare(&self) -> f64 {
        self.spec.hectare
    }

    /// The cell dimensions this tessellation was built with.
    pub fn cell_spec(&self) -> &CellSpec {
        &self.spec
    }

    /// The covered extent, margin already applied.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of rows; row indices run `0..rows()`.
    pub fn rows(&self) -> u32 {
        self.cells.last().map(|cell| cell.row + 1).unwrap_or(0)
    }

    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.iter()
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&HexCell> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.col == col)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&HexCell> {
        let (row, col) = parse_cell_id(id).ok()?;
        self.get(row, col)
    }

    /// The cell containing `point`, if any. Cells overlap their neighbours
    /// infinitesimally, so a point on a shared edge resolves to whichever
    /// cell comes first in index order.
    pub fn get_cell_at(&self, point: &Point<f64>) -> Option<&HexCell> {
        self.cells.iter().find(|cell| cell.hexagon.contains(point))
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.hexagon.clone()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&HexCell>
    where
        F: Fn(&HexCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }
}

/// Builder for [`Tessellation`], mirroring the constructor arguments as
/// chained setters. `margin` defaults to 0.
#[derive(Debug, Default)]
pub struct TessellationBuilder {
    hectare: Option<f64>,
    min_x: Option<f64>,
    min_y: Option<f64>,
    max_x: Option<f64>,
    max_y: Option<f64>,
    margin: f64,
}

impl TessellationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hectare(mut self, hectare: f64) -> Self {
        self.hectare = Some(hectare);
        self
    }

    pub fn extent(mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        self.min_x = Some(min_x);
        self.min_y = Some(min_y);
        self.max_x = Some(max_x);
        self.max_y = Some(max_y);
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.min_x = Some(rect.min().x);
        self.min_y = Some(rect.min().y);
        self.max_x = Some(rect.max().x);
        self.max_y = Some(rect.max().y);
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn build(self) -> Result<Tessellation, HextileError> {
        let hectare = self.hectare.expect("hectare must be set");
        let min_x = self.min_x.expect("extent must be set");
        let min_y = self.min_y.expect("extent must be set");
        let max_x = self.max_x.expect("extent must be set");
        let max_y = self.max_y.expect("extent must be set");

        Tessellation::from_extent(hectare, min_x, min_y, max_x, max_y, self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Euclidean};
    use geo_types::{coord, point};
    use std::collections::HashSet;

    #[test]
    fn test_single_hexagon_validation() {
        assert!(matches!(
            hexagon(0.0, &(0.0, 0.0)),
            Err(HextileError::InvalidHectare(_))
        ));
        assert!(matches!(
            hexagon(-2.0, &(0.0, 0.0)),
            Err(HextileError::InvalidHectare(_))
        ));
        assert!(matches!(
            hexagon(1.0, &(f64::NAN, 0.0)),
            Err(HextileError::NonFiniteCoordinate(_, _))
        ));
        assert!(matches!(
            hexagon(1.0, &(0.0, f64::INFINITY)),
            Err(HextileError::NonFiniteCoordinate(_, _))
        ));
    }

    #[test]
    fn test_scenario_one_hectare_hundred_metres() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 100.0, 100.0, 0.0)?;

        assert!(!grid.is_empty());
        assert!(grid.rows() >= 3);
        for cell in grid.iter() {
            assert!(cell.row < grid.rows());
        }
        Ok(())
    }

    #[test]
    fn test_ids_and_positions_are_unique() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 500.0, 0.0)?;

        let mut ids = HashSet::new();
        let mut positions = HashSet::new();
        for cell in grid.iter() {
            assert!(ids.insert(cell.id.clone()));
            assert!(positions.insert((cell.row, cell.col)));
        }
        Ok(())
    }

    #[test]
    fn test_cells_cover_the_extent() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 400.0, 0.0)?;

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for cell in grid.iter() {
            for v in cell.vertices() {
                min_x = min_x.min(v.x());
                min_y = min_y.min(v.y());
                max_x = max_x.max(v.x());
                max_y = max_y.max(v.y());
            }
        }

        assert!(min_x <= 0.0);
        assert!(min_y <= 0.0);
        assert!(max_x >= 500.0);
        assert!(max_y >= 400.0);
        Ok(())
    }

    #[test]
    fn test_centers_stay_near_the_extent() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 400.0, 0.0)?;
        let side = grid.cell_spec().side_length;

        for cell in grid.iter() {
            let center = cell.center();
            assert!(center.x() >= -side - 1e-9 && center.x() <= 500.0 + side + 1e-9);
            assert!(center.y() >= -side - 1e-9 && center.y() <= 400.0 + side + 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_interlocking_rows_touch() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 500.0, 0.0)?;
        let side = grid.cell_spec().side_length;
        let expected_center_gap = 3.0_f64.sqrt() * side;

        for row in 0..grid.rows() - 1 {
            let above = grid.get(row, 0).unwrap();
            let below = grid.get(row + 1, 0).unwrap();

            let center_gap = Euclidean.distance(above.center(), below.center());
            assert!((center_gap - expected_center_gap).abs() / expected_center_gap < 1e-6);

            let mut closest = f64::INFINITY;
            for a in above.vertices() {
                for b in below.vertices() {
                    closest = closest.min(Euclidean.distance(a, b));
                }
            }
            assert!(closest < 1e-6);
        }
        Ok(())
    }

    #[test]
    fn test_determinism() -> Result<(), HextileError> {
        let first = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 500.0, 0.0)?;
        let second = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 500.0, 0.0)?;

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.hexagon, b.hexagon); // bit-identical
        }
        Ok(())
    }

    #[test]
    fn test_margin_expands_coverage() -> Result<(), HextileError> {
        let tight = Tessellation::from_extent(1.0, 0.0, 0.0, 300.0, 300.0, 0.0)?;
        let wide = Tessellation::from_extent(1.0, 0.0, 0.0, 300.0, 300.0, 150.0)?;

        assert!(wide.len() > tight.len());
        assert_eq!(wide.extent().min_x, -150.0);
        assert_eq!(wide.extent().max_y, 450.0);
        Ok(())
    }

    #[test]
    fn test_invalid_arguments_fail_eagerly() {
        assert!(matches!(
            Tessellation::from_extent(0.0, 0.0, 0.0, 100.0, 100.0, 0.0),
            Err(HextileError::InvalidHectare(_))
        ));
        assert!(matches!(
            Tessellation::from_extent(1.0, 100.0, 0.0, 100.0, 100.0, 0.0),
            Err(HextileError::InvalidExtent(_))
        ));
        assert!(matches!(
            Tessellation::from_extent(1.0, 0.0, 200.0, 100.0, 100.0, 0.0),
            Err(HextileError::InvalidExtent(_))
        ));
        assert!(matches!(
            Tessellation::from_extent(1.0, 0.0, 0.0, 100.0, 100.0, -5.0),
            Err(HextileError::InvalidMargin(_))
        ));
    }

    #[test]
    fn test_builder() -> Result<(), HextileError> {
        let grid = Tessellation::builder()
            .hectare(1.0)
            .extent(0.0, 0.0, 400.0, 400.0)
            .margin(20.0)
            .build()?;

        assert!(!grid.is_empty());
        assert_eq!(grid.hectare(), 1.0);
        assert_eq!(grid.extent().min_x, -20.0);
        Ok(())
    }

    #[test]
    fn test_builder_with_rect() -> Result<(), HextileError> {
        let rect = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 400.0, y: 400.0 });
        let grid = Tessellation::builder().hectare(1.0).rect(&rect).build()?;

        assert!(!grid.is_empty());
        Ok(())
    }

    #[test]
    fn test_get_cell_at() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 500.0, 0.0)?;

        let probe = grid.get(2, 1).unwrap();
        let center = probe.center();
        let found = grid.get_cell_at(&center).unwrap();
        assert_eq!(found.id, probe.id);

        let far = point! { x: 10_000.0, y: 10_000.0 };
        assert!(grid.get_cell_at(&far).is_none());
        Ok(())
    }

    #[test]
    fn test_get_by_id() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 500.0, 0.0)?;

        let cell = grid.get_by_id("1-2").unwrap();
        assert_eq!(cell.row, 1);
        assert_eq!(cell.col, 2);

        assert!(grid.get_by_id("999-999").is_none());
        assert!(grid.get_by_id("not an id").is_none());
        Ok(())
    }

    #[test]
    fn test_filter() -> Result<(), HextileError> {
        let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 500.0, 0.0)?;

        let left_half = grid.filter(|cell| cell.center().x() < 250.0);
        assert!(!left_half.is_empty());
        assert!(left_half.len() < grid.len());
        Ok(())
    }

    #[test]
    fn test_from_geometry_str() -> Result<(), HextileError> {
        let wkt = "POLYGON((0 0, 400 0, 400 300, 0 300, 0 0))";
        let grid = Tessellation::from_geometry_str(wkt, 1.0, 0.0)?;

        assert!(!grid.is_empty());
        assert_eq!(grid.extent().max_x, 400.0);
        assert_eq!(grid.extent().max_y, 300.0);
        Ok(())
    }
}
