/// Error type for hextile-rs operations.
///
/// Every variant except [`HextileError::IoError`] and
/// [`HextileError::GeometryParseError`] is an invalid argument detected
/// eagerly at the API boundary, before any geometry is constructed.
#[derive(Debug, PartialEq)]
pub enum HextileError {
    /// The requested cell area is not a positive, finite hectare figure.
    InvalidHectare(f64),
    /// The extent is degenerate or non-finite (min must be strictly below max on both axes).
    InvalidExtent(String),
    /// The margin is negative or non-finite.
    InvalidMargin(f64),
    /// A coordinate was NaN or infinite.
    NonFiniteCoordinate(f64, f64),
    /// A cell identifier is not of the form `"{row}-{col}"`.
    InvalidIdentifier(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// File I/O or serialization error.
    IoError(String),
}

impl std::fmt::Display for HextileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HextileError::InvalidHectare(h) => {
                write!(f, "Cell area must be a positive, finite hectare value: {}", h)
            }
            HextileError::InvalidExtent(msg) => write!(f, "Invalid extent: {}", msg),
            HextileError::InvalidMargin(m) => {
                write!(f, "Margin must be non-negative and finite: {}", m)
            }
            HextileError::NonFiniteCoordinate(x, y) => {
                write!(f, "Non-finite coordinate: ({}, {})", x, y)
            }
            HextileError::InvalidIdentifier(id) => write!(f, "Invalid cell identifier: {}", id),
            HextileError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            HextileError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for HextileError {}
