//! # hextile-rs
//!
//! Tiles a planar rectangular extent with regular hexagons of a requested
//! area in hectares, producing a gap-free, fully indexed honeycomb for
//! spatial binning and aggregation. Coordinates are assumed to be in one
//! linear/metric planar space (e.g. a projected CRS); no reprojection is
//! performed.
//!
//! There are three main entry points.
//!
//! ### 1. `hexagon` - Single Hexagons
//!
//! ```
//! use hextile_rs::hexagon;
//!
//! # fn main() -> Result<(), hextile_rs::HextileError> {
//! let hex = hexagon(1.0, &(457500.0, 340000.0))?;
//! assert_eq!(hex.exterior().coords().count(), 7);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Tessellation` - Full Grids
//!
//! ```
//! use hextile_rs::Tessellation;
//! use geo_types::point;
//!
//! # fn main() -> Result<(), hextile_rs::HextileError> {
//! let grid = Tessellation::builder()
//!     .hectare(1.0)
//!     .extent(0.0, 0.0, 500.0, 500.0)
//!     .margin(25.0)
//!     .build()?;
//!
//! let pt = point! { x: 250.0, y: 250.0 };
//! if let Some(cell) = grid.get_cell_at(&pt) {
//!     println!("{}", cell.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Export traits - GeoJSON and CSV
//!
//! ```no_run
//! use hextile_rs::{CellsToGeoJson, Tessellation};
//!
//! # fn main() -> Result<(), hextile_rs::HextileError> {
//! let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 500.0, 500.0, 0.0)?;
//! grid.cells().to_geojson("grid.geojson")?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod geom;
pub mod io;
pub mod util;

pub use crate::api::{hexagon, HexCell, Tessellation, TessellationBuilder};
pub use crate::core::{
    assemble, build_offset_row, build_row, create_hexagon, fit_row, hexagon_vertices, index_rows,
    CellSpec, Extent, IndexedHexagon, Row, ADJACENCY_SHRINK, SQUARE_METRES_PER_HECTARE,
};
pub use crate::geom::{parse_geometry, region_rect};
pub use crate::io::{write_geojson, CellsToCsv, CellsToGeoJson, GeometryFormat};
pub use crate::util::{cell_id, parse_cell_id, Coordinate, HextileError};

pub use geo_types;
