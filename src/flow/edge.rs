//! A single directed residual edge, stored in [`FlowNetwork`](super::FlowNetwork)'s flat
//! arena and referenced by index from both of its endpoints' residual lists.

use crate::edge::{Edge, Vertex, WeightedEdge};
use crate::error::GraphError;
use crate::weight::Weight;
use error_stack::{Report, Result};

/// A directed edge in a flow network's residual graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowEdge<W> {
    pub from: Vertex,
    pub to: Vertex,
    pub capacity: W,
    pub flow: W,
}

impl<W: Weight> FlowEdge<W> {
    /// Builds a zero-flow `FlowEdge` from a weighted edge.
    ///
    /// # Errors
    /// Returns [`GraphError::NegativeWeightedEdge`] if `edge.weight < W::zero()`.
    pub fn from_weighted(edge: &WeightedEdge<W>) -> Result<Self, GraphError> {
        if edge.weight < W::zero() {
            return Err(Report::new(GraphError::NegativeWeightedEdge));
        }
        Ok(Self {
            from: edge.tail(),
            to: edge.head(),
            capacity: edge.weight,
            flow: W::zero(),
        })
    }

    /// Returns the endpoint opposite `v`.
    ///
    /// # Panics
    /// Panics if `v` is neither `from` nor `to`.
    pub fn other(&self, v: Vertex) -> Vertex {
        if v == self.from {
            self.to
        } else if v == self.to {
            self.from
        } else {
            panic!("vertex {v} is not an endpoint of flow edge ({}, {})", self.from, self.to);
        }
    }

    /// Residual capacity available when traversing toward `v`: the backward
    /// (cancellable) capacity `flow` if `v == from`, or the forward (remaining)
    /// capacity `capacity - flow` if `v == to`.
    ///
    /// # Panics
    /// Panics if `v` is neither endpoint.
    pub fn residual_capacity_to(&self, v: Vertex) -> W {
        if v == self.from {
            self.flow
        } else if v == self.to {
            self.capacity - self.flow
        } else {
            panic!("vertex {v} is not an endpoint of flow edge ({}, {})", self.from, self.to);
        }
    }

    /// Pushes `delta` units of flow toward `v`, preserving `0 <= flow <= capacity`.
    ///
    /// # Panics
    /// Panics if `v` is neither endpoint.
    pub fn add_residual_flow_to(&mut self, v: Vertex, delta: W) {
        if v == self.from {
            self.flow = self.flow - delta;
        } else if v == self.to {
            self.flow = self.flow + delta;
        } else {
            panic!("vertex {v} is not an endpoint of flow edge ({}, {})", self.from, self.to);
        }
    }
}
