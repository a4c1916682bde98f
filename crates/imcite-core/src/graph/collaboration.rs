//! Co-authorship network

use imcite_domain::{AuthorId, PublicationId};
use petgraph::Undirected;

use super::HandleGraph;
use crate::store::Store;

/// Undirected graph where an edge joins two authors who collaborated
#[derive(Debug, Clone, Default)]
pub struct CollaborationGraph {
    inner: HandleGraph<AuthorId, Undirected>,
}

impl CollaborationGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an author as a vertex. Idempotent; returns the vertex index.
    pub fn add_vertex(&mut self, author: AuthorId) -> usize {
        self.inner.add_vertex(author)
    }

    /// Join two authors.
    ///
    /// No-op (false) unless both are vertices and distinct. Repeated
    /// collaborations are stored once.
    pub fn add_collaboration(&mut self, a1: AuthorId, a2: AuthorId) -> bool {
        if a1 == a2 {
            return false;
        }
        let added = self.inner.add_edge(a1, a2);
        if !added {
            tracing::debug!("Ignoring collaboration {:?} -- {:?}: missing vertex", a1, a2);
        }
        added
    }

    /// Retire a vertex and its collaborations. The index stays reserved.
    pub fn remove_vertex(&mut self, author: AuthorId) -> bool {
        self.inner.remove_vertex(author)
    }

    pub fn contains(&self, author: AuthorId) -> bool {
        self.inner.contains(author)
    }

    /// Live vertices in index order
    pub fn vertices(&self) -> impl Iterator<Item = AuthorId> + '_ {
        self.inner.vertices()
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Number of distinct collaboration edges
    pub fn collaboration_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Neighbours of `author`, in vertex order
    pub fn collaborators_of(&self, author: AuthorId) -> Vec<AuthorId> {
        self.inner.all_neighbors(author)
    }

    pub fn collaborator_count(&self, author: AuthorId) -> usize {
        self.collaborators_of(author).len()
    }

    /// Vertices whose affiliation contains at least one of `needles`
    /// (case-sensitive substring match)
    pub fn filter_by_affiliation_substring<S: AsRef<str>>(
        &self,
        store: &Store,
        needles: &[S],
    ) -> Vec<AuthorId> {
        self.vertices()
            .filter(|&a| {
                store
                    .author(a)
                    .is_some_and(|author| author.affiliation_contains_any(needles))
            })
            .collect()
    }

    /// Number of live publications listing both authors.
    ///
    /// Candidates come from both authors' publication lists, so the result is
    /// the same whichever argument comes first.
    pub fn co_authored_count(&self, store: &Store, a1: AuthorId, a2: AuthorId) -> usize {
        let mut candidates: Vec<PublicationId> = [a1, a2]
            .iter()
            .filter_map(|&a| store.author(a))
            .flat_map(|author| author.publications.iter().copied())
            .collect();
        candidates.sort();
        candidates.dedup();

        candidates
            .into_iter()
            .filter_map(|p| store.publication(p))
            .filter(|p| p.has_author(a1) && p.has_author(a2))
            .count()
    }

    /// Induced subgraph on authors whose affiliation equals `affiliation`.
    ///
    /// Collaborations between retained authors are kept.
    pub fn subgraph_by_exact_affiliation(&self, store: &Store, affiliation: &str) -> CollaborationGraph {
        let mut sub = CollaborationGraph::new();
        for author in self.vertices() {
            if store
                .author(author)
                .is_some_and(|a| a.affiliation == affiliation)
            {
                sub.add_vertex(author);
            }
        }
        for (a1, a2) in self.inner.edges() {
            if sub.contains(a1) && sub.contains(a2) {
                sub.add_collaboration(a1, a2);
            }
        }
        sub
    }
}
