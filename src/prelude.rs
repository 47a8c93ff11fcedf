//!
//! globally-available parts
//!
pub use crate::common::{Vertex, Weight, INF, NEG_INF};
pub use crate::engine::{solve, solve_all, PathFinder, PathResult, ShortestPaths, Strategy};
pub use crate::graph::DenseGraph;
