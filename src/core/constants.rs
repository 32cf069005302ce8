/// Square metres in one hectare.
pub const SQUARE_METRES_PER_HECTARE: f64 = 10_000.0;

/// Proportional shrink applied to inter-hexagon translation distances.
///
/// Neighbours placed at the exact touching distance defeat floating-point
/// adjacency predicates in downstream geometry engines, so every pitch is
/// shortened by this fraction and neighbours overlap infinitesimally
/// instead. Tune per geometry backend.
pub const ADJACENCY_SHRINK: f64 = 1e-8;
