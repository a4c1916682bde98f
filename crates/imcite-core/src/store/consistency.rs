//! Referential integrity between publications and the author index

use imcite_domain::{AuthorId, PublicationId};

use super::Store;

/// A publication that lists an author the store cannot resolve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingAuthor {
    pub publication: PublicationId,
    pub title: String,
    pub author: AuthorId,
}

/// Result of [`Store::validate_consistency`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Offending (publication, author) pairs in publication date order
    pub dangling: Vec<DanglingAuthor>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.dangling.is_empty()
    }
}

impl Store {
    /// Check that every author listed by a live publication resolves through
    /// the ORCID index to that same handle.
    ///
    /// Informational only: nothing is repaired.
    pub fn validate_consistency(&self) -> ConsistencyReport {
        let mut report = ConsistencyReport::default();

        for id in self.publication_ids() {
            let Some(publication) = self.publications.get(id) else {
                continue;
            };
            for &author in &publication.authors {
                let indexed = self
                    .authors
                    .get(author)
                    .and_then(|a| self.by_orcid.get(&a.orcid))
                    .is_some_and(|&indexed| indexed == author);
                if !indexed {
                    report.dangling.push(DanglingAuthor {
                        publication: id,
                        title: publication.title.clone(),
                        author,
                    });
                }
            }
        }

        if !report.is_consistent() {
            tracing::warn!(
                "Consistency check found {} dangling author reference(s)",
                report.dangling.len()
            );
        }
        report
    }
}
