pub mod coord;
pub mod error;
pub mod identifier;

pub use coord::Coordinate;
pub use error::HextileError;
pub use identifier::{cell_id, parse_cell_id};
