//!
//! Graph files in JSON
//!
//! ```text
//! {
//!   "vertices": ["USD", "CHF"],
//!   "matrix": [[0.0, 6.0], [null, 0.0]],
//!   "edges": [{"from": "CHF", "to": "USD", "weight": -1.5}],
//!   "source": "USD"
//! }
//! ```
//!
//! `matrix` and `edges` are optional and both applied (edges last).
//! `null` in the matrix is no edge. `source` is a label or an index, 0 if omitted.
//!
use crate::common::{is_valid_weight, Vertex, Weight, INF};
use crate::graph::DenseGraph;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeAsJson {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphAsJson {
    pub vertices: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<Option<Weight>>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeAsJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

///
/// Find a vertex by its label, or by its index if no label matches.
///
pub fn resolve_vertex(graph: &DenseGraph, name: &str) -> Option<Vertex> {
    graph.find_vertex(name).or_else(|| {
        name.parse::<Vertex>()
            .ok()
            .filter(|&v| v < graph.n_vertices())
    })
}

impl DenseGraph {
    ///
    /// Convert into the serializable struct, with the full matrix and no edge list.
    ///
    pub fn to_json_struct(&self, source: Option<Vertex>) -> GraphAsJson {
        let n = self.n_vertices();
        let matrix = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let w = self.weight(i, j);
                        if w == INF {
                            None
                        } else {
                            Some(w)
                        }
                    })
                    .collect()
            })
            .collect();
        GraphAsJson {
            vertices: self.labels().to_vec(),
            matrix: Some(matrix),
            edges: Vec::new(),
            source: source.map(|s| self.label(s).to_owned()),
        }
    }
    ///
    /// Build a graph and its source vertex from the deserialized struct.
    ///
    pub fn from_json_struct(json: &GraphAsJson) -> io::Result<(DenseGraph, Vertex)> {
        let mut graph = DenseGraph::new();
        for label in json.vertices.iter() {
            graph.add_vertex(label.as_str());
        }
        let n = graph.n_vertices();
        if n == 0 {
            return Err(invalid_data("graph has no vertices".to_owned()));
        }

        if let Some(matrix) = &json.matrix {
            if matrix.len() != n {
                return Err(invalid_data(format!(
                    "matrix has {} rows but there are {} vertices",
                    matrix.len(),
                    n
                )));
            }
            for (i, row) in matrix.iter().enumerate() {
                if row.len() != n {
                    return Err(invalid_data(format!(
                        "row {} of matrix has {} columns but there are {} vertices",
                        i,
                        row.len(),
                        n
                    )));
                }
                for (j, w) in row.iter().enumerate() {
                    let w = w.unwrap_or(INF);
                    if !is_valid_weight(w) {
                        return Err(invalid_data(format!("invalid weight {} on {}->{}", w, i, j)));
                    }
                    graph.set_edge(i, j, w);
                }
            }
        }

        for edge in json.edges.iter() {
            let from = graph
                .find_vertex(&edge.from)
                .ok_or_else(|| invalid_data(format!("unknown vertex `{}` in edges", edge.from)))?;
            let to = graph
                .find_vertex(&edge.to)
                .ok_or_else(|| invalid_data(format!("unknown vertex `{}` in edges", edge.to)))?;
            if !is_valid_weight(edge.weight) {
                return Err(invalid_data(format!(
                    "invalid weight {} on {}->{}",
                    edge.weight, edge.from, edge.to
                )));
            }
            graph.set_edge(from, to, edge.weight);
        }

        let source = match &json.source {
            Some(name) => resolve_vertex(&graph, name)
                .ok_or_else(|| invalid_data(format!("unknown source vertex `{}`", name)))?,
            None => 0,
        };
        Ok((graph, source))
    }
    pub fn to_json_file<P: AsRef<Path>>(&self, source: Option<Vertex>, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.to_json_struct(source))?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

///
/// Parse a graph and its source vertex from JSON string.
///
pub fn from_json_str(s: &str) -> io::Result<(DenseGraph, Vertex)> {
    let json: GraphAsJson = serde_json::from_str(s)?;
    DenseGraph::from_json_struct(&json)
}

///
/// Load a graph and its source vertex from a JSON file.
///
pub fn from_json_file<P: AsRef<Path>>(path: P) -> io::Result<(DenseGraph, Vertex)> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let json: GraphAsJson = serde_json::from_reader(reader)?;
    let (graph, source) = DenseGraph::from_json_struct(&json)?;
    info!(
        "loaded {} (n={} edges={} source={})",
        path.display(),
        graph.n_vertices(),
        graph.n_edges(),
        source
    );
    Ok((graph, source))
}

//
// tests
//
