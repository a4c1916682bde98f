//! Relation graphs over store entities
//!
//! - **CitationGraph**: directed, publication -> publication ("cites")
//! - **CollaborationGraph**: undirected, author -- author ("co-authored with")
//!
//! Vertices carry handles only. Queries that need entity data (authors,
//! venue kind, affiliation) take the [`Store`](crate::store::Store) that issued
//! the handles; vertices whose entity has since been removed simply fail to
//! resolve and are skipped by those queries.

pub mod citation;
pub mod collaboration;

pub use citation::CitationGraph;
pub use collaboration::CollaborationGraph;

use std::collections::HashMap;
use std::hash::Hash;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Direction, EdgeType};

/// Petgraph graph keyed by entity handle.
///
/// Removed vertices stay behind as isolated tombstones so the indices of the
/// remaining vertices never shift and no index is handed out twice.
#[derive(Debug, Clone)]
pub(crate) struct HandleGraph<K, Ty: EdgeType> {
    graph: Graph<K, (), Ty>,
    indices: HashMap<K, NodeIndex>,
    retired: usize,
}

impl<K, Ty: EdgeType> Default for HandleGraph<K, Ty> {
    fn default() -> Self {
        Self {
            graph: Graph::default(),
            indices: HashMap::new(),
            retired: 0,
        }
    }
}

impl<K, Ty> HandleGraph<K, Ty>
where
    K: Copy + Eq + Hash,
    Ty: EdgeType,
{
    /// Idempotent; returns the vertex index
    pub(crate) fn add_vertex(&mut self, key: K) -> usize {
        if let Some(idx) = self.indices.get(&key) {
            return idx.index();
        }
        let idx = self.graph.add_node(key);
        self.indices.insert(key, idx);
        idx.index()
    }

    /// Deduplicated edge; false when either endpoint is not a live vertex
    pub(crate) fn add_edge(&mut self, from: K, to: K) -> bool {
        let (Some(&a), Some(&b)) = (self.indices.get(&from), self.indices.get(&to)) else {
            return false;
        };
        self.graph.update_edge(a, b, ());
        true
    }

    /// Drop every edge touching `key` and retire its vertex
    pub(crate) fn remove_vertex(&mut self, key: K) -> bool {
        let Some(idx) = self.indices.remove(&key) else {
            return false;
        };
        while let Some(edge) = self
            .graph
            .first_edge(idx, Direction::Outgoing)
            .or_else(|| self.graph.first_edge(idx, Direction::Incoming))
        {
            self.graph.remove_edge(edge);
        }
        self.retired += 1;
        true
    }

    pub(crate) fn contains(&self, key: K) -> bool {
        self.indices.contains_key(&key)
    }

    pub(crate) fn index_of(&self, key: K) -> Option<usize> {
        self.indices.get(&key).map(|idx| idx.index())
    }

    /// Live vertex indices in ascending order
    pub(crate) fn live_nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .node_indices()
            .filter(move |idx| self.indices.get(&self.graph[*idx]) == Some(idx))
    }

    pub(crate) fn vertices(&self) -> impl Iterator<Item = K> + '_ {
        self.live_nodes().map(move |idx| self.graph[idx])
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.graph.node_count() - self.retired
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Endpoints of every edge
    pub(crate) fn edges(&self) -> impl Iterator<Item = (K, K)> + '_ {
        self.graph
            .edge_references()
            .map(move |e| (self.graph[e.source()], self.graph[e.target()]))
    }

    /// Neighbours along `direction`, in vertex order
    pub(crate) fn neighbors(&self, key: K, direction: Direction) -> Vec<K> {
        let Some(&idx) = self.indices.get(&key) else {
            return Vec::new();
        };
        self.sorted(self.graph.neighbors_directed(idx, direction))
    }

    /// Neighbours ignoring edge direction, in vertex order
    pub(crate) fn all_neighbors(&self, key: K) -> Vec<K> {
        let Some(&idx) = self.indices.get(&key) else {
            return Vec::new();
        };
        self.sorted(self.graph.neighbors_undirected(idx))
    }

    /// Connected components among live vertices, ignoring direction
    pub(crate) fn live_component_count(&self) -> usize {
        // Each tombstone is an isolated component of its own
        petgraph::algo::connected_components(&self.graph) - self.retired
    }

    pub(crate) fn graph(&self) -> &Graph<K, (), Ty> {
        &self.graph
    }

    fn sorted(&self, nodes: impl Iterator<Item = NodeIndex>) -> Vec<K> {
        let mut found: Vec<NodeIndex> = nodes.collect();
        found.sort();
        found.into_iter().map(|n| self.graph[n]).collect()
    }
}
