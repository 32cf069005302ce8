use crate::core::geometry::{vertex, Row};
use geo::Translate;
use geo_types::Polygon;

/// Anchor vertex pair `(base, shift)` for snapping a drifted row onto a
/// trusted neighbour row.
///
/// While both rows still have hexagons, the rows interlock diagonally: the
/// shift hexagon's top vertex (0) lands on the base hexagon's lower-right
/// corner (2) when the base row is the longer of the two, and on its
/// lower-left corner (4) otherwise. Once the base row is exhausted the
/// remaining shift hexagons chain horizontally instead, upper-left corner
/// (5) onto the previous corrected result's upper-right corner (1).
fn anchor_vertices(base_at_least_as_long: bool, base_exhausted: bool) -> (usize, usize) {
    match (base_exhausted, base_at_least_as_long) {
        (true, _) => (1, 5),
        (false, true) => (2, 0),
        (false, false) => (4, 0),
    }
}

/// Re-anchors `shift` onto the exact corners of `base`, removing the drift
/// accumulated by the shrunk-pitch translations during row construction.
///
/// Each shift hexagon is translated by the exact vector that maps its
/// reference vertex onto the matching corner of the base hexagon at the
/// same position; once `base` runs out, the remaining hexagons snap onto
/// the previously corrected result so the chain never re-reads drifted
/// input. Returns a corrected row of the same length as `shift`. An empty
/// `shift` yields an empty row; an empty `base` leaves `shift` untouched.
pub fn fit_row(base: &[Polygon<f64>], shift: &[Polygon<f64>]) -> Row {
    if shift.is_empty() {
        return Row::new();
    }
    if base.is_empty() {
        return shift.to_vec();
    }

    let paired = anchor_vertices(base.len() >= shift.len(), false);
    let chained = anchor_vertices(base.len() >= shift.len(), true);

    let mut corrected = Row::with_capacity(shift.len());
    for (i, hexagon) in shift.iter().enumerate() {
        let (target, corner) = match base.get(i) {
            Some(trusted) => (vertex(trusted, paired.0), paired.1),
            None => {
                let previous = corrected
                    .last()
                    .expect("a corrected hexagon precedes the chain");
                (vertex(previous, chained.0), chained.1)
            }
        };
        let from = vertex(hexagon, corner);
        corrected.push(hexagon.translate(target.x - from.x, target.y - from.y));
    }
    corrected
}
