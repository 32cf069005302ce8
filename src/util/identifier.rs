use crate::util::error::HextileError;

/// Formats the stable cell identifier for a grid position.
///
/// Identifiers are `"{row}-{col}"`; uniqueness across a tessellation follows
/// from row indices increasing strictly per emitted row and 0-based column
/// numbering within each row.
///
/// # Example
/// ```
/// use hextile_rs::cell_id;
///
/// assert_eq!(cell_id(3, 7), "3-7");
/// ```
pub fn cell_id(row: u32, col: u32) -> String {
    format!("{}-{}", row, col)
}

/// Parses a cell identifier back into its `(row, col)` pair.
///
/// # Example
/// ```
/// use hextile_rs::{cell_id, parse_cell_id};
///
/// let (row, col) = parse_cell_id(&cell_id(3, 7)).unwrap();
/// assert_eq!((row, col), (3, 7));
/// ```
pub fn parse_cell_id(id: &str) -> Result<(u32, u32), HextileError> {
    let (row, col) = id
        .split_once('-')
        .ok_or_else(|| HextileError::InvalidIdentifier(id.to_string()))?;

    let row = row
        .parse()
        .map_err(|_| HextileError::InvalidIdentifier(id.to_string()))?;
    let col = col
        .parse()
        .map_err(|_| HextileError::InvalidIdentifier(id.to_string()))?;

    Ok((row, col))
}
