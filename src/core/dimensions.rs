use crate::core::constants::SQUARE_METRES_PER_HECTARE;
use crate::util::error::HextileError;
use serde::{Deserialize, Serialize};

/// Target cell size for a tessellation, with the hexagon dimensions derived
/// from it.
///
/// A regular hexagon of area `A` has side `sqrt(A / (1.5 * sqrt(3)))`, which
/// fixes every other dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSpec {
    /// Requested cell area in hectares.
    pub hectare: f64,
    /// Requested cell area in square metres.
    pub square_metres: f64,
    /// Edge length of the hexagon, in the linear unit of the plane.
    pub side_length: f64,
}

impl CellSpec {
    /// Derives the cell dimensions for a target area in hectares.
    ///
    /// # Example
    /// ```
    /// use hextile_rs::CellSpec;
    ///
    /// let spec = CellSpec::from_hectare(1.0).unwrap();
    /// assert!((spec.square_metres - 10_000.0).abs() < 1e-9);
    /// assert!((spec.side_length - 62.04032).abs() < 0.001);
    /// ```
    pub fn from_hectare(hectare: f64) -> Result<Self, HextileError> {
        if !hectare.is_finite() || hectare <= 0.0 {
            return Err(HextileError::InvalidHectare(hectare));
        }

        let square_metres = hectare * SQUARE_METRES_PER_HECTARE;
        let side_length = (square_metres / (1.5 * 3.0_f64.sqrt())).sqrt();

        Ok(Self {
            hectare,
            square_metres,
            side_length,
        })
    }

    /// Distance from the center to the midpoint of an edge.
    pub fn apothem(&self) -> f64 {
        (self.square_metres / (2.0 * 3.0_f64.sqrt())).sqrt()
    }

    /// Center-to-center distance between side-by-side hexagons in a row
    /// (width across flats).
    pub fn row_pitch(&self) -> f64 {
        2.0 * self.apothem()
    }
}
