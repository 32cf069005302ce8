use crate::core::dimensions::CellSpec;
use crate::util::coord::Coordinate;
use geo_types::{Coord, LineString, Point, Polygon};

/// A horizontal run of hexagons sharing the same vertical placement,
/// ordered left to right.
pub type Row = Vec<Polygon<f64>>;

/// Builds one regular hexagon of the requested cell area around `center`.
///
/// Vertex 0 sits directly above the center; the remaining vertices proceed
/// clockwise at 60 degree increments (1 upper-right, 2 lower-right,
/// 3 bottom, 4 lower-left, 5 upper-left). The exterior ring carries 7
/// coords, vertex 0 repeated to close.
pub fn create_hexagon<C: Coordinate>(center: &C, spec: &CellSpec) -> Polygon<f64> {
    let mut coords = Vec::with_capacity(7);

    for i in 0..6 {
        let angle_rad = (i as f64 * 60.0).to_radians();
        let x = center.x() + spec.side_length * angle_rad.sin();
        let y = center.y() + spec.side_length * angle_rad.cos();
        coords.push(Coord { x, y });
    }
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

/// The six boundary vertices in construction order (closing coord dropped).
pub fn hexagon_vertices(hexagon: &Polygon<f64>) -> Vec<Point<f64>> {
    hexagon.exterior().0[..6]
        .iter()
        .map(|c| Point::new(c.x, c.y))
        .collect()
}

/// One boundary vertex by construction index (0 = top, clockwise).
pub(crate) fn vertex(hexagon: &Polygon<f64>, index: usize) -> Coord<f64> {
    hexagon.exterior().0[index]
}

pub(crate) fn max_vertex_x(hexagon: &Polygon<f64>) -> f64 {
    hexagon
        .exterior()
        .0
        .iter()
        .fold(f64::NEG_INFINITY, |max, c| max.max(c.x))
}

pub(crate) fn min_vertex_y(hexagon: &Polygon<f64>) -> f64 {
    hexagon
        .exterior()
        .0
        .iter()
        .fold(f64::INFINITY, |min, c| min.min(c.y))
}
