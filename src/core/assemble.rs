use crate::core::dimensions::CellSpec;
use crate::core::extent::Extent;
use crate::core::fit::fit_row;
use crate::core::geometry::{min_vertex_y, vertex, Row};
use crate::core::row::{build_offset_row, build_row};
use geo::{Centroid, Distance, Euclidean, Translate};
use geo_types::{Point, Polygon};

/// Builds the two interlocking row families covering `extent`, already
/// drift-corrected.
///
/// The first upper row starts at `(min_x, max_y)`; rows are then generated
/// top-down by translating the previous row of each family by the vertical
/// drop, alternating upper and lower, until a new row's lowest vertex
/// clears the bottom edge. Like the rows themselves on the right, the last
/// rows overshoot the extent so coverage never falls short. The fitting
/// pass then snaps every row onto its upstream neighbour, with the first
/// upper row as ground truth.
///
/// Returns `(uppers, lowers)`; the upper family holds either the same
/// number of rows as the lower family or exactly one more.
pub fn assemble(spec: &CellSpec, extent: &Extent) -> (Vec<Row>, Vec<Row>) {
    let start = Point::new(extent.min_x, extent.max_y);
    let first_upper = build_row(start, spec, extent.max_x);
    let first_lower = build_offset_row(start, spec, extent.max_x);

    // vertical distance between consecutive rows of one family, derived
    // once from the first hexagon rather than per hexagon
    let reference = &first_upper[0];
    let top = Point::from(vertex(reference, 0));
    let centroid = reference.centroid().expect("hexagon has a centroid");
    let y_drop = -3.0 * Euclidean.distance(top, centroid);

    let mut uppers = vec![first_upper];
    let mut lowers = vec![first_lower];
    loop {
        let next_upper = dropped(uppers.last().expect("family is never empty"), y_drop);
        let past_bottom = row_min_y(&next_upper) < extent.min_y;
        uppers.push(next_upper);
        if past_bottom {
            break;
        }

        let next_lower = dropped(lowers.last().expect("family is never empty"), y_drop);
        let past_bottom = row_min_y(&next_lower) < extent.min_y;
        lowers.push(next_lower);
        if past_bottom {
            break;
        }
    }

    fit_families(uppers, lowers)
}

fn dropped(row: &[Polygon<f64>], y_drop: f64) -> Row {
    row.iter()
        .map(|hexagon| hexagon.translate(0.0, y_drop))
        .collect()
}

fn row_min_y(row: &[Polygon<f64>]) -> f64 {
    // every hexagon in a row shares the same vertical placement
    min_vertex_y(&row[0])
}

/// Sequential drift-correction pass over both families: each lower row is
/// fitted against the latest trusted upper row, each subsequent upper row
/// against the lower row corrected just before it.
fn fit_families(uppers: Vec<Row>, lowers: Vec<Row>) -> (Vec<Row>, Vec<Row>) {
    let mut fitted_uppers: Vec<Row> = Vec::with_capacity(uppers.len());
    let mut fitted_lowers: Vec<Row> = Vec::with_capacity(lowers.len());

    let mut remaining_uppers = uppers.into_iter();
    fitted_uppers.push(
        remaining_uppers
            .next()
            .expect("the grid always has a first row"),
    );

    for lower in lowers {
        let trusted = fitted_uppers.last().expect("a trusted upper row exists");
        fitted_lowers.push(fit_row(trusted, &lower));

        match remaining_uppers.next() {
            Some(upper) => {
                let trusted = fitted_lowers.last().expect("a trusted lower row exists");
                fitted_uppers.push(fit_row(trusted, &upper));
            }
            None => break,
        }
    }

    (fitted_uppers, fitted_lowers)
}
