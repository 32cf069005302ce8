use crate::util::error::HextileError;
use geo_types::Rect;

/// A validated planar bounding box: finite bounds, min strictly below max
/// on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, HextileError> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(HextileError::InvalidExtent(format!(
                "non-finite bounds ({}, {}, {}, {})",
                min_x, min_y, max_x, max_y
            )));
        }
        if min_x >= max_x || min_y >= max_y {
            return Err(HextileError::InvalidExtent(format!(
                "min must be strictly below max: ({}, {}, {}, {})",
                min_x, min_y, max_x, max_y
            )));
        }

        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    pub fn from_rect(rect: &Rect<f64>) -> Result<Self, HextileError> {
        Self::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    /// Expands all four sides outward by `margin`.
    pub fn expanded(&self, margin: f64) -> Result<Self, HextileError> {
        if !margin.is_finite() || margin < 0.0 {
            return Err(HextileError::InvalidMargin(margin));
        }

        Self::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
