//!
//! Shared definitions
//!

/// weight of an edge, and the distance (sum of weights) of a path
pub type Weight = f64;

/// Index of a vertex in `DenseGraph`, `0..n`
pub type Vertex = usize;

///
/// "no edge" in the weight matrix, and "not reached yet" in distances.
///
pub const INF: Weight = f64::INFINITY;

///
/// Distance of a vertex reachable through a negative cycle.
///
pub const NEG_INF: Weight = f64::NEG_INFINITY;

///
/// Largest absolute value of a finite edge weight.
///
/// Distances are sums of far fewer than `f64::MAX / MAX_WEIGHT` (about 1e108)
/// edges, so they never overflow into `INF` or `NEG_INF`.
///
pub const MAX_WEIGHT: Weight = 1e200;

///
/// A weight that can be stored in the matrix.
/// `INF` (no edge) and finite weights within `MAX_WEIGHT` are allowed,
/// `NaN`, `NEG_INF` and larger finite weights are not.
///
pub fn is_valid_weight(weight: Weight) -> bool {
    weight == INF || (weight.is_finite() && weight.abs() <= MAX_WEIGHT)
}

///
/// Convert an exchange rate into an edge weight `-ln(rate)`.
///
/// A cycle whose rates multiply to more than 1 then has negative total weight.
/// Missing or non-positive rates become `INF`.
///
pub fn rate_to_weight(rate: f64) -> Weight {
    if rate.is_finite() && rate > 0.0 {
        -rate.ln()
    } else {
        INF
    }
}

//
// tests
//
