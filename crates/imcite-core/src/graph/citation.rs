//! Citation network

use imcite_domain::{PublicationId, PublicationKind};
use petgraph::visit::Dfs;
use petgraph::{Directed, Direction};

use super::HandleGraph;
use crate::store::Store;

/// Directed graph where an edge u -> v means "u cites v"
///
/// Removed vertices stay behind as isolated tombstones so that the indices of
/// the remaining vertices never shift.
#[derive(Debug, Clone, Default)]
pub struct CitationGraph {
    inner: HandleGraph<PublicationId, Directed>,
}

impl CitationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a publication as a vertex. Idempotent.
    ///
    /// Returns the vertex index, assigned on first insertion and never reused.
    pub fn add_vertex(&mut self, publication: PublicationId) -> usize {
        self.inner.add_vertex(publication)
    }

    /// Record that `from` cites `to`.
    ///
    /// Both publications must already be vertices, otherwise this is a no-op
    /// returning false. Repeated citations are stored once.
    pub fn add_citation(&mut self, from: PublicationId, to: PublicationId) -> bool {
        let added = self.inner.add_edge(from, to);
        if !added {
            tracing::debug!("Ignoring citation {:?} -> {:?}: missing vertex", from, to);
        }
        added
    }

    /// Retire a vertex: drop every citation touching it and stop reporting
    /// it. Its index is not handed out again.
    pub fn remove_vertex(&mut self, publication: PublicationId) -> bool {
        self.inner.remove_vertex(publication)
    }

    pub fn contains(&self, publication: PublicationId) -> bool {
        self.inner.contains(publication)
    }

    pub fn vertex_index(&self, publication: PublicationId) -> Option<usize> {
        self.inner.index_of(publication)
    }

    /// Live vertices in index order
    pub fn vertices(&self) -> impl Iterator<Item = PublicationId> + '_ {
        self.inner.vertices()
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Number of distinct citation edges
    pub fn citation_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Publications that cite `publication`, in vertex order
    pub fn citers_of(&self, publication: PublicationId) -> Vec<PublicationId> {
        self.inner.neighbors(publication, Direction::Incoming)
    }

    /// Publications that `publication` cites, in vertex order
    pub fn references_of(&self, publication: PublicationId) -> Vec<PublicationId> {
        self.inner.neighbors(publication, Direction::Outgoing)
    }

    /// Number of direct citers
    pub fn first_order_citation_count(&self, publication: PublicationId) -> usize {
        self.citers_of(publication).len()
    }

    /// Sum over every citer of its own citer count (depth-2 fan-in)
    pub fn second_order_citation_count(&self, publication: PublicationId) -> usize {
        self.citers_of(publication)
            .into_iter()
            .map(|citer| self.first_order_citation_count(citer))
            .sum()
    }

    /// Citers that share at least one author with `publication`
    pub fn self_citation_count(&self, store: &Store, publication: PublicationId) -> usize {
        let Some(cited) = store.publication(publication) else {
            return 0;
        };
        self.citers_of(publication)
            .into_iter()
            .filter_map(|citer| store.publication(citer))
            .filter(|citer| citer.shares_author_with(cited))
            .count()
    }

    /// Induced subgraph on the publications of one venue kind.
    ///
    /// Vertices keep their relative order; citations survive when both
    /// endpoints do.
    pub fn subgraph_by_kind(&self, store: &Store, kind: PublicationKind) -> CitationGraph {
        let mut sub = CitationGraph::new();
        for publication in self.vertices() {
            if store
                .publication(publication)
                .is_some_and(|p| p.kind() == kind)
            {
                sub.add_vertex(publication);
            }
        }
        for (from, to) in self.inner.edges() {
            if sub.contains(from) && sub.contains(to) {
                sub.add_citation(from, to);
            }
        }
        sub
    }

    /// Whether every vertex is reachable from every other when citation
    /// direction is ignored. An empty graph counts as connected.
    pub fn is_weakly_connected(&self) -> bool {
        self.inner.live_component_count() <= 1
    }

    /// Whether a depth-first walk along citation direction from the first
    /// live vertex reaches every vertex. An empty graph counts as reachable.
    pub fn reaches_all_from_root(&self) -> bool {
        let Some(root) = self.inner.live_nodes().next() else {
            return true;
        };
        let graph = self.inner.graph();
        let mut dfs = Dfs::new(graph, root);
        let mut reached = 0;
        while dfs.next(graph).is_some() {
            reached += 1;
        }
        reached == self.vertex_count()
    }
}
