use crate::core::geometry::Row;
use geo_types::Polygon;

/// A hexagon with its grid position: `row` counts top-to-bottom across both
/// families, `col` counts left-to-right within the row.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedHexagon {
    pub row: u32,
    pub col: u32,
    pub hexagon: Polygon<f64>,
}

/// Flattens the corrected row families into one deterministic sequence.
///
/// Rows are consumed front-to-back, alternating upper and lower; the row
/// index increments once per emitted row, so indices interleave the two
/// families in strict top-to-bottom order, and columns restart at 0 for
/// each row.
pub fn index_rows(uppers: Vec<Row>, lowers: Vec<Row>) -> Vec<IndexedHexagon> {
    let total = uppers.iter().map(Vec::len).sum::<usize>()
        + lowers.iter().map(Vec::len).sum::<usize>();
    let mut cells = Vec::with_capacity(total);

    let mut row = 0u32;
    let mut uppers = uppers.into_iter();
    let mut lowers = lowers.into_iter();
    loop {
        let mut emitted = false;
        if let Some(hexagons) = uppers.next() {
            emit(&mut cells, row, hexagons);
            row += 1;
            emitted = true;
        }
        if let Some(hexagons) = lowers.next() {
            emit(&mut cells, row, hexagons);
            row += 1;
            emitted = true;
        }
        if !emitted {
            break;
        }
    }
    cells
}

fn emit(cells: &mut Vec<IndexedHexagon>, row: u32, hexagons: Row) {
    cells.extend(
        hexagons
            .into_iter()
            .enumerate()
            .map(|(col, hexagon)| IndexedHexagon {
                row,
                col: col as u32,
                hexagon,
            }),
    );
}
