//! Author representation

use serde::{Deserialize, Serialize};

use super::{Handle, PublicationId};

/// Handle to an [`Author`] owned by a store
pub type AuthorId = Handle<Author>;

/// Represents an author of publications
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Name as printed in bylines, e.g. "A. Einstein"
    pub scientific_name: String,
    pub affiliation: String,
    /// Primary external key
    pub orcid: String,
    pub ciencia_id: String,
    pub google_scholar_id: String,
    pub scopus_author_id: String,
    /// Authored works (back-reference; may hold handles of removed publications)
    pub publications: Vec<PublicationId>,
}

impl Author {
    /// Create a new author with the required identity fields
    pub fn new(
        name: impl Into<String>,
        scientific_name: impl Into<String>,
        orcid: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            scientific_name: scientific_name.into(),
            affiliation: String::new(),
            orcid: orcid.into(),
            ciencia_id: String::new(),
            google_scholar_id: String::new(),
            scopus_author_id: String::new(),
            publications: Vec::new(),
        }
    }

    /// Builder method to set the affiliation
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    /// Builder method to set the Ciência ID
    pub fn with_ciencia_id(mut self, id: impl Into<String>) -> Self {
        self.ciencia_id = id.into();
        self
    }

    /// Builder method to set the Google Scholar ID
    pub fn with_google_scholar_id(mut self, id: impl Into<String>) -> Self {
        self.google_scholar_id = id.into();
        self
    }

    /// Builder method to set the Scopus author ID
    pub fn with_scopus_author_id(mut self, id: impl Into<String>) -> Self {
        self.scopus_author_id = id.into();
        self
    }

    /// Record an authored work, ignoring duplicates
    pub fn add_publication(&mut self, publication: PublicationId) -> bool {
        if self.publications.contains(&publication) {
            return false;
        }
        self.publications.push(publication);
        true
    }

    /// Case-sensitive substring match of the affiliation against any needle
    pub fn affiliation_contains_any<S: AsRef<str>>(&self, needles: &[S]) -> bool {
        needles
            .iter()
            .any(|needle| self.affiliation.contains(needle.as_ref()))
    }
}
