pub mod assemble;
pub mod constants;
pub mod dimensions;
pub mod extent;
pub mod fit;
pub mod geometry;
pub mod index;
pub mod row;

pub use assemble::assemble;
pub use constants::{ADJACENCY_SHRINK, SQUARE_METRES_PER_HECTARE};
pub use dimensions::CellSpec;
pub use extent::Extent;
pub use fit::fit_row;
pub use geometry::{create_hexagon, hexagon_vertices, Row};
pub use index::{index_rows, IndexedHexagon};
pub use row::{build_offset_row, build_row};
