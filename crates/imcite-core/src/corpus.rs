//! A store together with the graphs built over it
//!
//! [`Corpus`] is the write path to use when the citation and collaboration
//! networks should follow the store. Every mutation touches the store and the
//! graphs inside the same `&mut self` call.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use imcite_domain::{Author, AuthorId, Publication, PublicationId, Venue};
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;
use crate::graph::{CitationGraph, CollaborationGraph};
use crate::store::Store;

/// Store plus citation and collaboration graphs kept in step with it
#[derive(Debug, Default)]
pub struct Corpus {
    store: Store,
    citations: CitationGraph,
    collaborations: CollaborationGraph,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn citations(&self) -> &CitationGraph {
        &self.citations
    }

    pub fn collaborations(&self) -> &CollaborationGraph {
        &self.collaborations
    }

    // ===== Authors =====

    /// Add an author and give it a collaboration vertex
    pub fn add_author(&mut self, author: Author) -> AuthorId {
        let id = self.store.add_author(author);
        self.collaborations.add_vertex(id);
        id
    }

    /// Remove an author by ORCID, along with its collaborations
    pub fn remove_author(&mut self, orcid: &str) -> Option<Author> {
        let id = self.store.author_id_by_orcid(orcid)?;
        let author = self.store.remove_author(orcid)?;
        self.collaborations.remove_vertex(id);
        Some(author)
    }

    /// Replace the author stored under `orcid`
    pub fn edit_author(&mut self, orcid: &str, author: Author) -> AuthorId {
        self.remove_author(orcid);
        self.add_author(author)
    }

    // ===== Publications =====

    /// Add a publication, give it a citation vertex and join its live authors
    /// pairwise in the collaboration graph.
    ///
    /// A publication with the same title is replaced, and its vertex retired.
    pub fn add_publication(&mut self, publication: Publication) -> PublicationId {
        if let Some(previous) = self.store.publication_id_by_title(&publication.title) {
            self.citations.remove_vertex(previous);
        }

        let id = self.store.add_publication(publication);
        self.citations.add_vertex(id);

        let authors: Vec<AuthorId> = self
            .store
            .publication(id)
            .map(|p| p.authors.clone())
            .unwrap_or_default();
        for (i, &a1) in authors.iter().enumerate() {
            for &a2 in &authors[i + 1..] {
                self.collaborations.add_collaboration(a1, a2);
            }
        }
        id
    }

    /// Remove a publication by title and retire its citation vertex
    pub fn remove_publication(&mut self, title: &str) -> Option<Publication> {
        let id = self.store.publication_id_by_title(title)?;
        let publication = self.store.remove_publication(title)?;
        self.citations.remove_vertex(id);
        Some(publication)
    }

    /// Replace the publication stored under `title`
    pub fn edit_publication(&mut self, title: &str, publication: Publication) -> PublicationId {
        self.remove_publication(title);
        self.add_publication(publication)
    }

    /// Record `author` as an author of `publication` and join it with every
    /// other live author of that publication.
    ///
    /// False when either handle is stale.
    pub fn add_authorship(&mut self, publication: PublicationId, author: AuthorId) -> bool {
        if !self.store.attach_author(publication, author) {
            return false;
        }
        self.collaborations.add_vertex(author);

        let others: Vec<AuthorId> = self
            .store
            .publication(publication)
            .map(|p| p.authors.iter().copied().filter(|&a| a != author).collect())
            .unwrap_or_default();
        for other in others {
            if self.store.author(other).is_some() {
                self.collaborations.add_collaboration(author, other);
            }
        }
        true
    }

    /// Record that `from` cites `to`, both on the entity and in the graph
    pub fn cite(&mut self, from: PublicationId, to: PublicationId) -> bool {
        self.store.add_reference(from, to) && self.citations.add_citation(from, to)
    }

    pub fn record_view(&mut self, publication: PublicationId, date: NaiveDate, count: u32) -> bool {
        self.store.record_view(publication, date, count)
    }

    pub fn record_like(&mut self, publication: PublicationId, date: NaiveDate, count: u32) -> bool {
        self.store.record_like(publication, date, count)
    }

    pub fn record_download(&mut self, publication: PublicationId) -> bool {
        self.store.record_download(publication)
    }

    // ===== Seeding =====

    /// Build a corpus from a seed description.
    ///
    /// Authors go in first, then publications, then citations, so a
    /// publication may cite one listed after it. Unknown ORCIDs and titles
    /// are skipped with a warning.
    pub fn from_seed(seed: CorpusSeed) -> Self {
        let mut corpus = Corpus::new();

        for author in seed.authors {
            corpus.add_author(author.into());
        }

        let mut pending_citations = Vec::new();
        for entry in seed.publications {
            let title = entry.title.clone();
            let mut publication = Publication::new(entry.title, entry.venue, entry.date)
                .with_keywords(entry.keywords)
                .with_abstract(entry.abstract_text);
            publication.downloads = entry.downloads;
            publication.views = entry.views;
            publication.likes = entry.likes;

            for orcid in &entry.authors {
                match corpus.store.author_id_by_orcid(orcid) {
                    Some(author) => {
                        publication.add_author(author);
                    }
                    None => tracing::warn!("Skipping unknown author {} on {:?}", orcid, title),
                }
            }

            let id = corpus.add_publication(publication);
            pending_citations.push((id, title, entry.cites));
        }

        for (from, title, cites) in pending_citations {
            // A later entry with the same title replaced this one
            if corpus.store.publication(from).is_none() {
                tracing::warn!("Dropping citations of replaced entry {:?}", title);
                continue;
            }
            for cited in cites {
                match corpus.store.publication_id_by_title(&cited) {
                    Some(to) => {
                        corpus.cite(from, to);
                    }
                    None => tracing::warn!("Skipping unknown citation {:?} -> {:?}", title, cited),
                }
            }
        }

        tracing::debug!(
            "Seeded corpus with {} publication(s), {} author(s), {} citation(s)",
            corpus.store.publication_count(),
            corpus.store.author_count(),
            corpus.citations.citation_count()
        );
        corpus
    }

    /// Parse a JSON seed description
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let seed: CorpusSeed = serde_json::from_str(json)?;
        Ok(Self::from_seed(seed))
    }

    /// Read a JSON seed description from disk
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}

/// Serialized description of a corpus
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusSeed {
    pub authors: Vec<AuthorSeed>,
    pub publications: Vec<PublicationSeed>,
}

/// Author entry of a [`CorpusSeed`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSeed {
    pub name: String,
    pub scientific_name: String,
    pub orcid: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub ciencia_id: String,
    #[serde(default)]
    pub google_scholar_id: String,
    #[serde(default)]
    pub scopus_author_id: String,
}

impl From<AuthorSeed> for Author {
    fn from(seed: AuthorSeed) -> Self {
        Author::new(seed.name, seed.scientific_name, seed.orcid)
            .with_affiliation(seed.affiliation)
            .with_ciencia_id(seed.ciencia_id)
            .with_google_scholar_id(seed.google_scholar_id)
            .with_scopus_author_id(seed.scopus_author_id)
    }
}

/// Publication entry of a [`CorpusSeed`]
///
/// Authors are named by ORCID and cited works by title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationSeed {
    pub title: String,
    pub venue: Venue,
    pub date: NaiveDate,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub cites: Vec<String>,
    #[serde(default)]
    pub downloads: u32,
    #[serde(default)]
    pub views: BTreeMap<NaiveDate, u32>,
    #[serde(default)]
    pub likes: BTreeMap<NaiveDate, u32>,
}
