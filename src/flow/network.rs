//! Ford-Fulkerson maximum flow (Edmonds-Karp: shortest augmenting path via BFS) over a
//! residual graph built from a weighted [`AdjacencyList`](crate::graph::AdjacencyList).

use error_stack::{Report, Result};

use crate::edge::{Edge, Vertex, WeightedEdge};
use crate::error::GraphError;
use crate::flow::edge::FlowEdge;
use crate::graph::AdjacencyList;
use crate::visit::bfs;
use crate::weight::Weight;

/// A maximum-flow problem instance: a weighted graph (edge weights are capacities), a
/// source `s` and a sink `t`, and the residual graph built from them.
///
/// `max_flow`/`min_cut` are computed once, on first call, and cached for later calls.
#[derive(Debug, Clone)]
pub struct FlowNetwork<W> {
    s: Vertex,
    t: Vertex,
    vertex_count: usize,
    edges: Vec<FlowEdge<W>>,
    residual: Vec<Vec<usize>>,
    max_flow: Option<Option<W>>,
}

impl<W: Weight> FlowNetwork<W> {
    /// Builds the residual graph for `graph` with source `s` and sink `t`.
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeWeightedEdge`] if any edge in `graph` has negative
    /// weight. No partially-built network is returned in that case.
    ///
    /// # Panics
    /// Panics if `s` or `t` is out of range for `graph`. `s == t` is accepted here;
    /// [`max_flow`](Self::max_flow) resolves that degenerate case to `None`.
    pub fn new(graph: &AdjacencyList<WeightedEdge<W>>, s: Vertex, t: Vertex) -> Result<Self, GraphError> {
        let vertex_count = graph.vertex_count();
        assert!(s < vertex_count, "source {s} out of bounds");
        assert!(t < vertex_count, "sink {t} out of bounds");

        for (_, edge) in graph.iter_adjacencies() {
            if edge.weight < W::zero() {
                return Err(Report::new(GraphError::NegativeWeightedEdge));
            }
        }

        let mut edges = Vec::new();
        let mut residual = vec![Vec::new(); vertex_count];
        for (v, edge) in graph.iter_adjacencies() {
            if edge.is_self_loop() {
                continue;
            }
            // Each adjacency list is keyed by `either()`, i.e. `edge.tail() == v` always
            // holds here. A directed input edge is stored once, so it yields exactly one
            // `FlowEdge`; an undirected input edge is already double-stored (mirrored via
            // `reversed()`), so it naturally yields two without any special-casing.
            let flow_edge = FlowEdge::from_weighted(edge)?;
            let index = edges.len();
            residual[flow_edge.from].push(index);
            residual[flow_edge.to].push(index);
            edges.push(flow_edge);
        }

        Ok(Self {
            s,
            t,
            vertex_count,
            edges,
            residual,
            max_flow: None,
        })
    }

    pub fn source(&self) -> Vertex {
        self.s
    }

    pub fn sink(&self) -> Vertex {
        self.t
    }

    /// The flow edges of the residual graph, in arena order.
    pub fn edges(&self) -> &[FlowEdge<W>] {
        &self.edges
    }

    /// Runs Edmonds-Karp to convergence and returns the maximum flow, caching the
    /// result. Returns `None` if `s == t` (undefined, per SPEC_FULL.md §4.3).
    pub fn max_flow(&mut self) -> Option<W> {
        if let Some(cached) = self.max_flow {
            return cached;
        }
        let result = if self.s == self.t {
            None
        } else {
            Some(self.augment_to_convergence())
        };
        self.max_flow = Some(result);
        result
    }

    fn augment_to_convergence(&mut self) -> W {
        let mut total = W::zero();
        while let Some(predecessor) = self.find_augmenting_path() {
            let bottleneck = self.bottleneck(&predecessor);
            self.apply_flow(&predecessor, bottleneck);
            total = total + bottleneck;
        }
        total
    }

    fn find_augmenting_path(&self) -> Option<Vec<Option<usize>>> {
        let residual = &self.residual;
        let edges = &self.edges;
        let predecessor = bfs(
            self.vertex_count,
            self.s,
            |v| {
                residual[v]
                    .iter()
                    .map(|&edge_index| (edge_index, edges[edge_index].other(v)))
                    .collect::<Vec<_>>()
            },
            |edge_index, _from, to| edges[edge_index].residual_capacity_to(to) > W::zero(),
        );
        if predecessor[self.t].is_some() {
            Some(predecessor)
        } else {
            None
        }
    }

    fn bottleneck(&self, predecessor: &[Option<usize>]) -> W {
        let mut bottleneck = W::max_value();
        let mut vertex = self.t;
        while let Some(edge_index) = predecessor[vertex] {
            let edge = &self.edges[edge_index];
            let residual_capacity = edge.residual_capacity_to(vertex);
            if residual_capacity < bottleneck {
                bottleneck = residual_capacity;
            }
            vertex = edge.other(vertex);
        }
        bottleneck
    }

    fn apply_flow(&mut self, predecessor: &[Option<usize>], bottleneck: W) {
        let mut vertex = self.t;
        while let Some(edge_index) = predecessor[vertex] {
            let next_vertex = self.edges[edge_index].other(vertex);
            self.edges[edge_index].add_residual_flow_to(vertex, bottleneck);
            vertex = next_vertex;
        }
    }

    /// Whether `v` is reachable from `s` in the final residual graph (edges with
    /// positive residual capacity). Requires [`max_flow`](Self::max_flow) to have been
    /// called first so the flow has converged; returns `false` for every vertex if
    /// `s == t` or before `max_flow` has run.
    pub fn in_min_cut(&self, v: Vertex) -> bool {
        match self.max_flow {
            Some(Some(_)) => self.reachable_from_source().contains(&v),
            _ => false,
        }
    }

    fn reachable_from_source(&self) -> Vec<Vertex> {
        let residual = &self.residual;
        let edges = &self.edges;
        let predecessor = bfs(
            self.vertex_count,
            self.s,
            |v| {
                residual[v]
                    .iter()
                    .map(|&edge_index| (edge_index, edges[edge_index].other(v)))
                    .collect::<Vec<_>>()
            },
            |edge_index, _from, to| edges[edge_index].residual_capacity_to(to) > W::zero(),
        );
        let mut reachable = vec![self.s];
        for (v, pred) in predecessor.iter().enumerate() {
            if v != self.s && pred.is_some() {
                reachable.push(v);
            }
        }
        reachable
    }

    /// The edges crossing from the s-side of the min-cut to its complement, once
    /// `max_flow` has converged. `None` if `s == t`.
    pub fn min_cut(&mut self) -> Option<Vec<FlowEdge<W>>> {
        self.max_flow()?;
        let s_side = self.reachable_from_source();
        Some(
            self.edges
                .iter()
                .filter(|e| s_side.contains(&e.from) && !s_side.contains(&e.to))
                .copied()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;

    fn directed_network(edges: &[(usize, usize, i64)]) -> AdjacencyList<WeightedEdge<i64>> {
        AdjacencyList::from_edges(
            GraphKind::Directed,
            edges
                .iter()
                .map(|&(a, b, w)| WeightedEdge::new(a, b, w))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn worst_case_pivoting_scenario() {
        let g = directed_network(&[(0, 1, 100), (0, 2, 100), (1, 2, 1), (1, 3, 100), (2, 3, 100)]);
        let mut network = FlowNetwork::new(&g, 0, 3).expect("nonnegative weights");
        assert_eq!(network.max_flow(), Some(200));
        assert!(network.in_min_cut(0));
        assert!(!network.in_min_cut(1));
        assert!(!network.in_min_cut(2));
        assert!(!network.in_min_cut(3));
    }

    #[test]
    fn textbook_network_scenario() {
        let g = directed_network(&[
            (0, 1, 10),
            (0, 2, 5),
            (0, 3, 15),
            (1, 2, 4),
            (1, 4, 9),
            (1, 5, 15),
            (2, 3, 4),
            (2, 5, 8),
            (3, 6, 16),
            (4, 7, 10),
            (4, 5, 15),
            (5, 6, 15),
            (5, 7, 10),
            (6, 2, 6),
            (6, 7, 10),
        ]);
        let mut network = FlowNetwork::new(&g, 0, 7).expect("nonnegative weights");
        assert_eq!(network.max_flow(), Some(28));
        for v in [0, 2, 3, 6] {
            assert!(network.in_min_cut(v), "{v} should be on the s-side");
        }
        for v in [1, 4, 5, 7] {
            assert!(!network.in_min_cut(v), "{v} should not be on the s-side");
        }
    }

    #[test]
    fn negative_weight_rejected() {
        let g = directed_network(&[(0, 1, -5)]);
        let err = FlowNetwork::new(&g, 0, 1).expect_err("negative weight must be rejected");
        assert_eq!(*err.current_context(), GraphError::NegativeWeightedEdge);
    }

    #[test]
    fn disconnected_sink_yields_zero_flow() {
        let g = directed_network(&[(0, 1, 10), (2, 3, 10)]);
        let mut network = FlowNetwork::new(&g, 0, 3).expect("nonnegative weights");
        assert_eq!(network.max_flow(), Some(0));
        assert_eq!(network.min_cut(), Some(Vec::new()));
    }

    #[test]
    fn self_source_is_undefined() {
        let g = directed_network(&[(0, 1, 10)]);
        let mut network = FlowNetwork::new(&g, 0, 0).expect("nonnegative weights");
        assert_eq!(network.max_flow(), None);
        assert_eq!(network.min_cut(), None);
    }

    #[test]
    fn conservation_holds_at_intermediate_vertices() {
        let g = directed_network(&[(0, 1, 10), (0, 2, 5), (1, 3, 10), (2, 3, 5)]);
        let mut network = FlowNetwork::new(&g, 0, 3).expect("nonnegative weights");
        network.max_flow();
        for v in [1usize, 2] {
            let inflow: i64 = network.edges().iter().filter(|e| e.to == v).map(|e| e.flow).sum();
            let outflow: i64 = network.edges().iter().filter(|e| e.from == v).map(|e| e.flow).sum();
            assert_eq!(inflow, outflow, "conservation violated at vertex {v}");
        }
    }

    #[test]
    fn directed_reversal_duality() {
        let g = directed_network(&[(0, 1, 100), (0, 2, 100), (1, 2, 1), (1, 3, 100), (2, 3, 100)]);
        let mut forward = FlowNetwork::new(&g, 0, 3).expect("nonnegative weights");
        let reversed = g.reversed();
        let mut backward = FlowNetwork::new(&reversed, 3, 0).expect("nonnegative weights");
        assert_eq!(forward.max_flow(), backward.max_flow());
    }

    #[test]
    fn min_cut_duality_with_max_flow() {
        let g = directed_network(&[(0, 1, 100), (0, 2, 100), (1, 2, 1), (1, 3, 100), (2, 3, 100)]);
        let mut network = FlowNetwork::new(&g, 0, 3).expect("nonnegative weights");
        let max_flow = network.max_flow().expect("s != t");
        let cut: i64 = network.min_cut().expect("s != t").iter().map(|e| e.flow).sum();
        assert_eq!(max_flow, cut);
    }
}
