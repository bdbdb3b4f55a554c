//! `WeightedGraph`: an explicit directed graph with per-edge costs.
//!
//! A second domain for the engine. Unlike the puzzle its step costs vary, so
//! it exercises the closed-set re-opening path and shows the engine needs no
//! puzzle knowledge. Actions are target node indices.
//!
//! An optional per-node estimate table doubles as a heuristic via
//! [`WeightedGraph::estimate`].

use std::fmt;

use octile_search::contract::{SearchProblem, Successor};

/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub cost: f64,
}

/// Typed failure for graph construction.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An endpoint is not a node of the graph.
    UnknownNode { node: usize, node_count: usize },
    /// Edge from a node to itself.
    SelfLoop { node: usize },
    /// Negative, NaN or infinite edge cost.
    InvalidCost { from: usize, to: usize, cost: f64 },
    /// A second edge between the same ordered pair.
    DuplicateEdge { from: usize, to: usize },
    /// Estimate table length does not match the node count.
    EstimateCount { expected: usize, actual: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { node, node_count } => {
                write!(f, "node {node} does not exist (graph has {node_count} nodes)")
            }
            Self::SelfLoop { node } => write!(f, "self-loop on node {node}"),
            Self::InvalidCost { from, to, cost } => {
                write!(f, "edge {from} -> {to} has invalid cost {cost}")
            }
            Self::DuplicateEdge { from, to } => write!(f, "duplicate edge {from} -> {to}"),
            Self::EstimateCount { expected, actual } => {
                write!(f, "expected {expected} estimates, got {actual}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Directed weighted graph with a start and a goal node.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<Edge>>,
    start: usize,
    goal: usize,
    estimates: Vec<f64>,
}

impl WeightedGraph {
    /// A graph of `node_count` isolated nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `start` or `goal` is out of range.
    pub fn new(node_count: usize, start: usize, goal: usize) -> Result<Self, GraphError> {
        for node in [start, goal] {
            if node >= node_count {
                return Err(GraphError::UnknownNode { node, node_count });
            }
        }
        Ok(Self {
            adjacency: vec![Vec::new(); node_count],
            start,
            goal,
            estimates: vec![0.0; node_count],
        })
    }

    /// Add a directed edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] for unknown endpoints, self-loops, duplicate
    /// edges, or costs that are not finite and non-negative.
    pub fn add_edge(&mut self, from: usize, to: usize, cost: f64) -> Result<(), GraphError> {
        let node_count = self.adjacency.len();
        for node in [from, to] {
            if node >= node_count {
                return Err(GraphError::UnknownNode { node, node_count });
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop { node: from });
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost { from, to, cost });
        }
        if self.adjacency[from].iter().any(|e| e.to == to) {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        self.adjacency[from].push(Edge { to, cost });
        Ok(())
    }

    /// Add edges in both directions with the same cost.
    ///
    /// # Errors
    ///
    /// See [`WeightedGraph::add_edge`].
    pub fn add_undirected(&mut self, a: usize, b: usize, cost: f64) -> Result<(), GraphError> {
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    /// Replace the per-node estimate table.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EstimateCount`] if `estimates` does not have one
    /// entry per node.
    pub fn set_estimates(&mut self, estimates: Vec<f64>) -> Result<(), GraphError> {
        if estimates.len() != self.adjacency.len() {
            return Err(GraphError::EstimateCount {
                expected: self.adjacency.len(),
                actual: estimates.len(),
            });
        }
        self.estimates = estimates;
        Ok(())
    }

    /// Estimated remaining cost from `node` (0 for unknown nodes).
    #[must_use]
    pub fn estimate(&self, node: usize) -> f64 {
        self.estimates.get(node).copied().unwrap_or(0.0)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing edges of `node`.
    #[must_use]
    pub fn edges(&self, node: usize) -> &[Edge] {
        self.adjacency.get(node).map_or(&[][..], Vec::as_slice)
    }
}

impl SearchProblem for WeightedGraph {
    type State = usize;
    type Action = usize;

    fn start(&self) -> usize {
        self.start
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &usize) -> Vec<Successor<usize, usize>> {
        self.edges(*state)
            .iter()
            .map(|e| Successor {
                state: e.to,
                action: e.to,
                step_cost: e.cost,
            })
            .collect()
    }

    /// Sum of edge costs along `actions`; infinite if an action follows a
    /// missing edge.
    fn path_cost(&self, actions: &[usize]) -> f64 {
        let mut at = self.start;
        let mut total = 0.0;
        for &to in actions {
            match self.edges(at).iter().find(|e| e.to == to) {
                Some(edge) => total += edge.cost,
                None => return f64::INFINITY,
            }
            at = to;
        }
        total
    }
}
