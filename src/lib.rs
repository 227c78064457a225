//! **flowgraph** is a graph data structure library centered on two cores: a generic,
//! value-semantic adjacency-list graph container ([`AdjacencyList`]) over directed or
//! undirected edges, and a maximum-flow / minimum-cut solver ([`FlowNetwork`]) built on
//! top of it via Ford-Fulkerson with Edmonds-Karp's shortest-augmenting-path rule.
//!
//! The two algorithmic cores share one vertex-pair edge algebra ([`edge`]): an edge
//! exposes interchangeable endpoints (`either`/`other`) rather than committing up front
//! to "source" and "target", with directional (`tail`/`head`) and weighted views layered
//! on top.

pub mod codec;
pub mod edge;
pub mod error;
pub mod flow;
pub mod graph;
pub mod visit;
pub mod weight;

pub use edge::{Edge, UnweightedEdge, WeightedEdge};
pub use error::GraphError;
pub use flow::{FlowEdge, FlowNetwork};
pub use graph::{AdjacencyList, GraphKind};
