//!
//! Shortest paths on weighted digraphs with negative edges and negative cycles
//!
//! * `graph`: dense weight matrix with labeled vertices
//! * `engine`: relaxation strategies and path reconstruction
//! * `io`: graph files in JSON
//! * `report`: text output of solved paths
//!
pub mod common;
pub mod engine;
pub mod graph;
pub mod io;
pub mod prelude;
pub mod report;

#[cfg(test)]
#[macro_use]
extern crate approx;
