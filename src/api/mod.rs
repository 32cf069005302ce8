pub mod cell;
pub mod tessellation;

pub use cell::HexCell;
pub use tessellation::{hexagon, Tessellation, TessellationBuilder};
