//! The adjacency-list graph container: vertex-indexed lists of edges, with
//! insertion, removal, directional reversal, and value semantics (`Clone`).

use crate::edge::{Edge, Vertex};

/// Whether a graph's edges are directional or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl GraphKind {
    fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// A vertex-indexed adjacency-list graph over an edge type `E`.
///
/// Vertices are the dense range `0..vertex_count`. Copying (`Clone`) yields an
/// independent graph: there is no shared structure between instances.
#[derive(Debug, Clone)]
pub struct AdjacencyList<E> {
    kind: GraphKind,
    edge_count: usize,
    adjacencies: Vec<Vec<E>>,
}

impl<E: Edge> AdjacencyList<E> {
    /// A fully disconnected graph with `vertex_count` vertices.
    pub fn new(kind: GraphKind, vertex_count: usize) -> Self {
        Self {
            kind,
            edge_count: 0,
            adjacencies: vec![Vec::new(); vertex_count],
        }
    }

    /// Builds a graph from a stream of edges.
    ///
    /// If `edges` is empty the result has `vertex_count = 0`. Otherwise `vertex_count`
    /// is one more than the largest endpoint seen, and the adjacency array grows as
    /// edges are scanned.
    pub fn from_edges<I>(kind: GraphKind, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut graph = Self {
            kind,
            edge_count: 0,
            adjacencies: Vec::new(),
        };
        for edge in edges {
            let max_endpoint = edge.either().max(edge.other(edge.either()));
            if max_endpoint >= graph.adjacencies.len() {
                graph.adjacencies.resize(max_endpoint + 1, Vec::new());
            }
            graph.store(edge);
        }
        graph
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacencies.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The incident edges at `v`, in insertion order.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    pub fn adjacencies(&self, v: Vertex) -> &[E] {
        &self.adjacencies[v]
    }

    /// Appends `edge` per the graph's kind rule, incrementing `edge_count` by one.
    ///
    /// # Panics
    /// Panics if either endpoint of `edge` is out of range.
    pub fn add(&mut self, edge: E) {
        assert!(
            edge.either() < self.vertex_count() && edge.other(edge.either()) < self.vertex_count(),
            "edge endpoint out of bounds for a graph with {} vertices",
            self.vertex_count()
        );
        self.store(edge);
    }

    /// Stores `edge` under the kind rule, without bounds-checking (callers have
    /// already ensured the adjacency array is large enough).
    fn store(&mut self, edge: E) {
        let tail = edge.either();
        let head = edge.other(tail);
        if self.kind.is_directed() {
            self.adjacencies[tail].push(edge);
        } else {
            let mirror = edge.reversed();
            self.adjacencies[tail].push(edge);
            self.adjacencies[head].push(mirror);
        }
        self.edge_count += 1;
    }

    /// Removes the first insertion-ordered occurrence of an edge ordered-equal to
    /// `edge`, returning whether one was found.
    ///
    /// # Panics
    /// Panics if `edge.either()` is out of range.
    pub fn remove(&mut self, edge: &E) -> bool
    where
        E: PartialEq,
    {
        let anchor = edge.either();
        let Some(position) = self.adjacencies[anchor].iter().position(|e| e == edge) else {
            return false;
        };
        self.adjacencies[anchor].remove(position);

        if !self.kind.is_directed() {
            let mirror = edge.reversed();
            let other = edge.other(anchor);
            let mirror_position = self.adjacencies[other]
                .iter()
                .position(|e| *e == mirror)
                .expect("undirected mirror edge must exist by construction invariant");
            self.adjacencies[other].remove(mirror_position);
        }

        self.edge_count -= 1;
        true
    }

    /// Clears every adjacency list. `vertex_count` and `kind` are preserved.
    pub fn remove_all_edges(&mut self) {
        for list in &mut self.adjacencies {
            list.clear();
        }
        self.edge_count = 0;
    }

    /// Reverses every stored edge in place.
    ///
    /// A no-op on undirected graphs (reversal is already baked into the mirrored
    /// storage). On directed graphs, every stored edge is replaced by its
    /// `reversed()`, re-indexed under its new `either()`.
    pub fn reverse(&mut self) {
        if !self.kind.is_directed() {
            return;
        }
        let vertex_count = self.vertex_count();
        let mut reversed_adjacencies = vec![Vec::new(); vertex_count];
        for list in self.adjacencies.drain(..) {
            for edge in list {
                let reversed_edge = edge.reversed();
                reversed_adjacencies[reversed_edge.either()].push(reversed_edge);
            }
        }
        self.adjacencies = reversed_adjacencies;
    }

    /// Returns a reversed copy; see [`reverse`](Self::reverse).
    pub fn reversed(&self) -> Self {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }

    /// Iterates over all stored edges, vertex by vertex, in insertion order.
    pub fn iter_adjacencies(&self) -> impl Iterator<Item = (Vertex, &E)> + '_ {
        self.adjacencies
            .iter()
            .enumerate()
            .flat_map(|(v, list)| list.iter().map(move |e| (v, e)))
    }
}

impl<E: Edge + PartialEq> PartialEq for AdjacencyList<E> {
    /// Structural equivalence: same kind, same vertex count, same per-vertex
    /// adjacency sequences (order-sensitive, matching insertion order).
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.adjacencies == other.adjacencies
    }
}
