use crate::core::constants::ADJACENCY_SHRINK;
use crate::core::dimensions::CellSpec;
use crate::core::geometry::{create_hexagon, max_vertex_x, Row};
use geo::Translate;
use geo_types::Point;

/// Builds one horizontal row of touching hexagons.
///
/// The first hexagon is centered on `start`; each following hexagon is the
/// previous one translated right by the across-flats pitch, shortened by
/// [`ADJACENCY_SHRINK`] so neighbours overlap instead of merely touching.
/// Hexagons are appended until the newest one's rightmost vertex passes
/// `end_x` — the stop condition is strict, so the row always overshoots the
/// right edge by part of one hexagon.
pub fn build_row(start: Point<f64>, spec: &CellSpec, end_x: f64) -> Row {
    let pitch = spec.row_pitch();
    let step = pitch - pitch * ADJACENCY_SHRINK;

    let mut row = Row::new();
    let mut current = create_hexagon(&start, spec);
    while max_vertex_x(&current) <= end_x {
        let next = current.translate(step, 0.0);
        row.push(current);
        current = next;
    }
    row.push(current);
    row
}

/// Builds the row that interlocks with [`build_row`]'s output for the same
/// span: every hexagon shifted right by half a pitch and down onto the gaps
/// between the base hexagons.
///
/// The shift moves the whole row right, so one extra hexagon is prepended a
/// full pitch to the left of the first shifted one; the offset row therefore
/// still starts at or left of `start` and is one hexagon longer than its
/// base.
pub fn build_offset_row(start: Point<f64>, spec: &CellSpec, end_x: f64) -> Row {
    let apothem = spec.apothem();
    let x_off = apothem - apothem * ADJACENCY_SHRINK;
    let y_off = -((2.0 * x_off).powi(2) - x_off.powi(2)).sqrt();

    let base = build_row(start, spec, end_x);

    let mut row = Row::with_capacity(base.len() + 1);
    let shifted: Vec<_> = base
        .iter()
        .map(|hexagon| hexagon.translate(x_off, y_off))
        .collect();
    row.push(shifted[0].translate(-2.0 * x_off, 0.0));
    row.extend(shifted);
    row
}
