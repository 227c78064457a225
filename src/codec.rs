//! Whole-graph, `serde`-driven serialization of [`AdjacencyList`].
//!
//! The wire form is a flat record: `{ kind, vertex_count, edges }`. Directed graphs
//! emit every stored edge once (they are only stored once to begin with); undirected
//! graphs emit each edge exactly once despite being double-stored internally, using the
//! `other(v) > v` rule for ordinary edges and an alternating toggle for self-loops
//! (which otherwise appear twice per vertex).

use error_stack::{Report, Result};

use crate::edge::Edge;
use crate::error::GraphError;
use crate::graph::{AdjacencyList, GraphKind};

/// The serialized form of an [`AdjacencyList`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedGraph<E> {
    pub kind: GraphKind,
    pub vertex_count: usize,
    pub edges: Vec<E>,
}

/// Encodes `graph` into its wire form.
pub fn encode<E: Edge + Clone>(graph: &AdjacencyList<E>) -> EncodedGraph<E> {
    let edges = match graph.kind() {
        GraphKind::Directed => graph
            .iter_adjacencies()
            .map(|(_, e)| e.clone())
            .collect(),
        GraphKind::Undirected => {
            let mut edges = Vec::with_capacity(graph.edge_count());
            let mut emit_self_loop = vec![true; graph.vertex_count()];
            for v in 0..graph.vertex_count() {
                for e in graph.adjacencies(v) {
                    if e.is_self_loop() {
                        if emit_self_loop[v] {
                            edges.push(e.clone());
                        }
                        emit_self_loop[v] = !emit_self_loop[v];
                    } else if e.other(v) > v {
                        edges.push(e.clone());
                    }
                }
            }
            edges
        }
    };
    EncodedGraph {
        kind: graph.kind(),
        vertex_count: graph.vertex_count(),
        edges,
    }
}

/// Decodes `encoded` back into an [`AdjacencyList`].
///
/// # Errors
/// Returns [`GraphError::EdgeOutOfBounds`] if any edge references a vertex outside
/// `0..vertex_count`.
pub fn decode<E: Edge>(encoded: EncodedGraph<E>) -> Result<AdjacencyList<E>, GraphError> {
    for edge in &encoded.edges {
        let tail = edge.either();
        let head = edge.other(tail);
        for endpoint in [tail, head] {
            if endpoint >= encoded.vertex_count {
                return Err(Report::new(GraphError::EdgeOutOfBounds {
                    endpoint,
                    vertex_count: encoded.vertex_count,
                }));
            }
        }
    }

    let mut graph = AdjacencyList::new(encoded.kind, encoded.vertex_count);
    for edge in encoded.edges {
        graph.add(edge);
    }
    Ok(graph)
}
