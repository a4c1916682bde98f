//! Indexed store for publications and authors
//!
//! The store owns every entity. Publications are indexed by date (ordered,
//! several per date) and by title; authors by name (ordered) and by ORCID.
//! Removed authors are archived as ORCID -> scientific name.

mod consistency;
mod usage;

pub use consistency::{ConsistencyReport, DanglingAuthor};
pub use usage::UsageRank;

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use imcite_domain::{Arena, Author, AuthorId, Publication, PublicationId};

/// In-memory multi-index store
#[derive(Debug, Default)]
pub struct Store {
    publications: Arena<Publication>,
    authors: Arena<Author>,
    by_date: BTreeMap<NaiveDate, Vec<PublicationId>>,
    by_title: HashMap<String, PublicationId>,
    by_name: BTreeMap<String, Vec<AuthorId>>,
    by_orcid: HashMap<String, AuthorId>,
    archived: BTreeMap<String, String>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Publications =====

    /// Add a publication.
    ///
    /// A live publication with the same title is removed first, so the title
    /// and date indices never disagree. Every author of the publication that
    /// resolves in this store gets the new handle in its publication list.
    pub fn add_publication(&mut self, publication: Publication) -> PublicationId {
        if self.by_title.contains_key(&publication.title) {
            tracing::debug!("Replacing publication with title {:?}", publication.title);
            self.remove_publication(&publication.title);
        }

        let title = publication.title.clone();
        let date = publication.date;
        let authors = publication.authors.clone();

        let id = self.publications.insert(publication);
        self.by_date.entry(date).or_default().push(id);
        self.by_title.insert(title, id);

        for author in authors {
            if let Some(author) = self.authors.get_mut(author) {
                author.add_publication(id);
            }
        }

        tracing::debug!("Added publication {:?} dated {}", id, date);
        id
    }

    /// Remove a publication by title. Absent titles are a no-op.
    ///
    /// Authors keep the (now stale) handle in their publication lists; stale
    /// handles never resolve again.
    pub fn remove_publication(&mut self, title: &str) -> Option<Publication> {
        let id = self.by_title.remove(title)?;
        let publication = self.publications.remove(id)?;
        remove_from_bucket(&mut self.by_date, &publication.date, id);
        tracing::debug!("Removed publication {:?} ({})", id, title);
        Some(publication)
    }

    /// Replace the publication stored under `title`.
    ///
    /// This is remove followed by add: the old entry is gone before the new
    /// one is inserted. Snapshot with [`Store::publication_by_title`] first if
    /// the old value is still needed.
    pub fn edit_publication(&mut self, title: &str, publication: Publication) -> PublicationId {
        self.remove_publication(title);
        self.add_publication(publication)
    }

    pub fn publication(&self, id: PublicationId) -> Option<&Publication> {
        self.publications.get(id)
    }

    pub fn publication_id_by_title(&self, title: &str) -> Option<PublicationId> {
        self.by_title.get(title).copied()
    }

    pub fn publication_by_title(&self, title: &str) -> Option<&Publication> {
        self.publication_id_by_title(title)
            .and_then(|id| self.publications.get(id))
    }

    /// Publication handles in ascending date order (insertion order within a date)
    pub fn publication_ids(&self) -> impl Iterator<Item = PublicationId> + '_ {
        self.by_date.values().flatten().copied()
    }

    /// Publications in ascending date order. Each call rescans the index.
    pub fn publications(&self) -> impl Iterator<Item = &Publication> + '_ {
        self.publication_ids()
            .filter_map(move |id| self.publications.get(id))
    }

    pub fn publication_count(&self) -> usize {
        self.publications.len()
    }

    /// Link an author to a publication in both directions.
    ///
    /// Returns false when either handle does not resolve.
    pub fn attach_author(&mut self, publication: PublicationId, author: AuthorId) -> bool {
        if !self.authors.contains(author) {
            return false;
        }
        let Some(entry) = self.publications.get_mut(publication) else {
            return false;
        };
        entry.add_author(author);
        if let Some(author) = self.authors.get_mut(author) {
            author.add_publication(publication);
        }
        true
    }

    /// Record `to` in the reference list of `from`
    pub fn add_reference(&mut self, from: PublicationId, to: PublicationId) -> bool {
        if !self.publications.contains(to) {
            return false;
        }
        match self.publications.get_mut(from) {
            Some(publication) => {
                publication.add_reference(to);
                true
            }
            None => false,
        }
    }

    pub fn record_view(&mut self, id: PublicationId, date: NaiveDate, count: u32) -> bool {
        self.publications
            .get_mut(id)
            .map(|p| p.record_view(date, count))
            .is_some()
    }

    pub fn record_like(&mut self, id: PublicationId, date: NaiveDate, count: u32) -> bool {
        self.publications
            .get_mut(id)
            .map(|p| p.record_like(date, count))
            .is_some()
    }

    pub fn record_download(&mut self, id: PublicationId) -> bool {
        self.publications
            .get_mut(id)
            .map(|p| p.record_download())
            .is_some()
    }

    // ===== Authors =====

    /// Add an author.
    ///
    /// If an author with the same ORCID is live, its slot is overwritten in
    /// place: the handle stays valid for every publication that lists it, and
    /// the previous publication back-references are kept.
    pub fn add_author(&mut self, author: Author) -> AuthorId {
        if let Some(&existing) = self.by_orcid.get(&author.orcid) {
            if let Some(slot) = self.authors.get_mut(existing) {
                let previous = std::mem::replace(slot, author);
                let incoming = std::mem::replace(&mut slot.publications, previous.publications);
                for publication in incoming {
                    slot.add_publication(publication);
                }
                remove_from_bucket(&mut self.by_name, &previous.name, existing);
                self.by_name.entry(slot.name.clone()).or_default().push(existing);
                tracing::debug!("Replaced author {:?} ({})", existing, slot.orcid);
                return existing;
            }
        }

        let orcid = author.orcid.clone();
        let name = author.name.clone();
        let id = self.authors.insert(author);
        self.by_orcid.insert(orcid, id);
        self.by_name.entry(name).or_default().push(id);
        tracing::debug!("Added author {:?}", id);
        id
    }

    /// Remove an author by ORCID, cascading through the corpus.
    ///
    /// The author leaves the name and ORCID indices, is archived, and is
    /// stripped from the author list of every publication that lists it.
    pub fn remove_author(&mut self, orcid: &str) -> Option<Author> {
        let id = self.by_orcid.remove(orcid)?;
        let author = self.authors.remove(id)?;
        remove_from_bucket(&mut self.by_name, &author.name, id);
        self.archived
            .insert(author.orcid.clone(), author.scientific_name.clone());

        let affected: Vec<PublicationId> = self
            .publications
            .iter()
            .filter(|(_, p)| p.has_author(id))
            .map(|(pid, _)| pid)
            .collect();
        for pid in &affected {
            if let Some(publication) = self.publications.get_mut(*pid) {
                publication.remove_author(id);
            }
        }

        tracing::debug!(
            "Removed author {} and stripped it from {} publication(s)",
            orcid,
            affected.len()
        );
        Some(author)
    }

    /// Replace the author stored under `orcid` (remove, then add)
    pub fn edit_author(&mut self, orcid: &str, author: Author) -> AuthorId {
        self.remove_author(orcid);
        self.add_author(author)
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id)
    }

    pub fn author_id_by_orcid(&self, orcid: &str) -> Option<AuthorId> {
        self.by_orcid.get(orcid).copied()
    }

    pub fn author_by_orcid(&self, orcid: &str) -> Option<&Author> {
        self.author_id_by_orcid(orcid)
            .and_then(|id| self.authors.get(id))
    }

    /// Author handles in ascending name order
    pub fn author_ids(&self) -> impl Iterator<Item = AuthorId> + '_ {
        self.by_name.values().flatten().copied()
    }

    /// Authors in ascending name order. Each call rescans the index.
    pub fn authors(&self) -> impl Iterator<Item = &Author> + '_ {
        self.author_ids().filter_map(move |id| self.authors.get(id))
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    // ===== Archive =====

    /// Scientific name of a removed author
    pub fn archived_name(&self, orcid: &str) -> Option<&str> {
        self.archived.get(orcid).map(String::as_str)
    }

    /// Archived (ORCID, scientific name) pairs ordered by ORCID
    pub fn archive(&self) -> impl Iterator<Item = (&str, &str)> {
        self.archived
            .iter()
            .map(|(orcid, name)| (orcid.as_str(), name.as_str()))
    }

    /// Publication handles dated within `[start, end]`, ascending
    pub(crate) fn ids_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = PublicationId> + '_ {
        // BTreeMap::range panics on an inverted range
        let bounds = if start <= end { Some(start..=end) } else { None };
        bounds
            .into_iter()
            .flat_map(move |r| self.by_date.range(r))
            .flat_map(|(_, ids)| ids.iter().copied())
    }
}

fn remove_from_bucket<K: Ord, V: PartialEq>(map: &mut BTreeMap<K, Vec<V>>, key: &K, value: V) {
    if let Some(bucket) = map.get_mut(key) {
        bucket.retain(|v| *v != value);
        if bucket.is_empty() {
            map.remove(key);
        }
    }
}
