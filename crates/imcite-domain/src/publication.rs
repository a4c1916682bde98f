//! Publication domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AuthorId, Handle, PublicationKind, Venue};

/// Handle to a [`Publication`] owned by a store
pub type PublicationId = Handle<Publication>;

/// A journal article or conference paper
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// Unique key within a store
    pub title: String,
    pub keywords: Vec<String>,
    pub abstract_text: String,
    pub venue: Venue,
    /// Publication date, used as the ordering key (not unique)
    pub date: NaiveDate,

    // Usage
    pub downloads: u32,
    pub views: BTreeMap<NaiveDate, u32>,
    pub likes: BTreeMap<NaiveDate, u32>,

    // Cross references
    pub authors: Vec<AuthorId>,
    /// Works this publication cites, as recorded on the entity itself
    pub references: Vec<PublicationId>,
}

impl Publication {
    /// Create a new publication with required fields
    pub fn new(title: impl Into<String>, venue: Venue, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            keywords: Vec::new(),
            abstract_text: String::new(),
            venue,
            date,
            downloads: 0,
            views: BTreeMap::new(),
            likes: BTreeMap::new(),
            authors: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Builder method to set keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the abstract
    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = abstract_text.into();
        self
    }

    /// Builder method to add an author
    pub fn with_author(mut self, author: AuthorId) -> Self {
        self.add_author(author);
        self
    }

    pub fn kind(&self) -> PublicationKind {
        self.venue.kind()
    }

    pub fn has_author(&self, author: AuthorId) -> bool {
        self.authors.contains(&author)
    }

    /// Whether the two publications have at least one author in common
    pub fn shares_author_with(&self, other: &Publication) -> bool {
        self.authors.iter().any(|a| other.has_author(*a))
    }

    /// Append an author, ignoring duplicates. Returns true if it was added.
    pub fn add_author(&mut self, author: AuthorId) -> bool {
        if self.has_author(author) {
            return false;
        }
        self.authors.push(author);
        true
    }

    /// Drop an author from the author list. Returns true if it was present.
    pub fn remove_author(&mut self, author: AuthorId) -> bool {
        let before = self.authors.len();
        self.authors.retain(|a| *a != author);
        self.authors.len() != before
    }

    /// Append a cited work, ignoring duplicates
    pub fn add_reference(&mut self, cited: PublicationId) -> bool {
        if self.references.contains(&cited) {
            return false;
        }
        self.references.push(cited);
        true
    }

    /// Add `count` views on `date`
    pub fn record_view(&mut self, date: NaiveDate, count: u32) {
        let total = self.views.entry(date).or_insert(0);
        *total = total.saturating_add(count);
    }

    /// Add `count` likes on `date`
    pub fn record_like(&mut self, date: NaiveDate, count: u32) {
        let total = self.likes.entry(date).or_insert(0);
        *total = total.saturating_add(count);
    }

    pub fn record_download(&mut self) {
        self.downloads = self.downloads.saturating_add(1);
    }

    /// Total views dated within `[start, end]`
    pub fn views_in_range(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        dated_entries(&self.views, start, end)
            .map(|(_, n)| u64::from(*n))
            .sum()
    }

    /// Total likes dated within `[start, end]`
    pub fn likes_in_range(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        dated_entries(&self.likes, start, end)
            .map(|(_, n)| u64::from(*n))
            .sum()
    }

    /// Views plus likes dated within `[start, end]`
    pub fn usage_in_range(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        self.views_in_range(start, end) + self.likes_in_range(start, end)
    }

    /// Whether any view or like entry is dated within `[start, end]`.
    ///
    /// An entry counts even when its recorded count is zero.
    pub fn has_usage_in_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        dated_entries(&self.views, start, end).next().is_some()
            || dated_entries(&self.likes, start, end).next().is_some()
    }
}

fn dated_entries(
    map: &BTreeMap<NaiveDate, u32>,
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = (&NaiveDate, &u32)> {
    // BTreeMap::range panics on an inverted range
    let bounds = if start <= end { Some(start..=end) } else { None };
    bounds.into_iter().flat_map(move |r| map.range(r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arena;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Publication {
        Publication::new(
            "On the Electrodynamics of Moving Bodies",
            Venue::journal("Annalen der Physik", "Wiley", 1905),
            date(1905, 6, 30),
        )
    }

    #[test]
    fn test_publication_new() {
        let p = sample()
            .with_keywords(["relativity", "electrodynamics"])
            .with_abstract("Maxwell's equations in moving frames");
        assert_eq!(p.kind(), PublicationKind::Journal);
        assert_eq!(p.keywords, vec!["relativity", "electrodynamics"]);
        assert!(p.authors.is_empty());
        assert_eq!(p.downloads, 0);
    }

    #[test]
    fn test_author_list_ignores_duplicates() {
        let mut authors = Arena::new();
        let a = authors.insert(crate::Author::new("A", "A.", "0000-0001"));
        let b = authors.insert(crate::Author::new("B", "B.", "0000-0002"));

        let mut p = sample().with_author(a).with_author(a);
        assert_eq!(p.authors, vec![a]);
        assert!(p.add_author(b));
        assert!(p.remove_author(a));
        assert!(!p.remove_author(a));
        assert_eq!(p.authors, vec![b]);
    }

    #[test]
    fn test_usage_accumulates_per_date() {
        let mut p = sample();
        p.record_view(date(2020, 1, 1), 3);
        p.record_view(date(2020, 1, 1), 2);
        p.record_like(date(2020, 2, 1), 4);
        p.record_download();

        assert_eq!(p.views[&date(2020, 1, 1)], 5);
        assert_eq!(p.downloads, 1);
        assert_eq!(p.usage_in_range(date(2020, 1, 1), date(2020, 12, 31)), 9);
    }

    #[test]
    fn test_usage_counts_saturate() {
        let mut p = sample();
        let on = date(2020, 1, 1);
        p.record_view(on, u32::MAX);
        p.record_view(on, 1);
        p.record_like(on, u32::MAX - 1);
        p.record_like(on, 5);

        assert_eq!(p.views[&on], u32::MAX);
        assert_eq!(p.likes[&on], u32::MAX);
        assert_eq!(p.usage_in_range(on, on), 2 * u64::from(u32::MAX));
    }

    #[rstest]
    #[case(date(2020, 1, 1), date(2020, 1, 31), 5, true)]
    #[case(date(2020, 1, 15), date(2020, 2, 1), 4, true)]
    #[case(date(2020, 2, 2), date(2020, 12, 31), 0, false)]
    #[case(date(2020, 12, 31), date(2020, 1, 1), 0, false)]
    fn test_usage_range_is_inclusive(
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
        #[case] expected: u64,
        #[case] used: bool,
    ) {
        let mut p = sample();
        p.record_view(date(2020, 1, 1), 5);
        p.record_like(date(2020, 2, 1), 4);

        assert_eq!(p.usage_in_range(start, end), expected);
        assert_eq!(p.has_usage_in_range(start, end), used);
    }

    #[test]
    fn test_zero_count_entry_still_counts_as_used() {
        let mut p = sample();
        p.record_view(date(2020, 5, 5), 0);
        assert!(p.has_usage_in_range(date(2020, 5, 1), date(2020, 5, 31)));
        assert_eq!(p.usage_in_range(date(2020, 5, 1), date(2020, 5, 31)), 0);
    }
}
