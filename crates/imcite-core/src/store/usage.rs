//! Date-range queries over the publication index

use chrono::NaiveDate;
use imcite_domain::{Publication, PublicationId};

use super::Store;

/// A publication with its usage (views + likes) over a date range
#[derive(Clone, Debug, PartialEq)]
pub struct UsageRank<'a> {
    pub id: PublicationId,
    pub publication: &'a Publication,
    pub usage: u64,
}

impl Store {
    /// Publications dated within `[start, end]` that list the author with
    /// this ORCID, in ascending date order
    pub fn publications_by_author_in_range(
        &self,
        orcid: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&Publication> {
        self.ids_in_range(start, end)
            .filter_map(|id| self.publications.get(id))
            .filter(|p| {
                p.authors.iter().any(|&a| {
                    self.authors
                        .get(a)
                        .is_some_and(|author| author.orcid == orcid)
                })
            })
            .collect()
    }

    /// Publications dated within `[start, end]` with no view and no like
    /// entry recorded inside the same range
    pub fn publications_unused_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&Publication> {
        self.ids_in_range(start, end)
            .filter_map(|id| self.publications.get(id))
            .filter(|p| !p.has_usage_in_range(start, end))
            .collect()
    }

    /// Rank publications dated within `[start, end]` by views + likes
    /// recorded inside the range.
    ///
    /// Zero-usage publications are dropped. Ties keep ascending date order.
    /// Returns at most `limit` entries, fewer if fewer qualify.
    pub fn top_used_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: usize,
    ) -> Vec<UsageRank<'_>> {
        let mut ranked: Vec<UsageRank<'_>> = self
            .ids_in_range(start, end)
            .filter_map(|id| {
                let publication = self.publications.get(id)?;
                let usage = publication.usage_in_range(start, end);
                (usage > 0).then_some(UsageRank {
                    id,
                    publication,
                    usage,
                })
            })
            .collect();

        // Stable sort preserves date order among equal sums
        ranked.sort_by(|a, b| b.usage.cmp(&a.usage));
        ranked.truncate(limit);
        ranked
    }

    /// The three most used publications in `[start, end]`
    pub fn top3_used_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<UsageRank<'_>> {
        self.top_used_in_range(start, end, 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imcite_domain::{Author, Venue};
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn article(title: &str, on: NaiveDate) -> Publication {
        Publication::new(title, Venue::conference("C", "P", 2020, 1, "Porto"), on)
    }

    /// Five publications in March 2020 with usage sums [10, 0, 5, 20, 1]
    fn usage_store() -> Store {
        let mut store = Store::new();
        let sums = [("A", 10), ("B", 0), ("C", 5), ("D", 20), ("E", 1)];
        for (i, (title, sum)) in sums.into_iter().enumerate() {
            let on = date(2020, 3, 1 + i as u32);
            let id = store.add_publication(article(title, on));
            if sum > 0 {
                store.record_view(id, on, sum - sum / 2);
                store.record_like(id, on, sum / 2);
            }
        }
        store
    }

    #[test]
    fn test_top3_orders_by_usage() {
        let store = usage_store();
        let top = store.top3_used_in_range(date(2020, 1, 1), date(2020, 12, 31));

        let titles: Vec<_> = top.iter().map(|r| r.publication.title.as_str()).collect();
        assert_eq!(titles, vec!["D", "A", "C"]);
        let sums: Vec<_> = top.iter().map(|r| r.usage).collect();
        assert_eq!(sums, vec![20, 10, 5]);
    }

    #[rstest]
    #[case(date(2020, 3, 2), date(2020, 3, 3), vec!["C"])]
    #[case(date(2020, 3, 2), date(2020, 3, 2), vec![])]
    #[case(date(2020, 3, 5), date(2020, 3, 1), vec![])]
    fn test_top3_with_fewer_candidates(
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
        #[case] expected: Vec<&str>,
    ) {
        let store = usage_store();
        let top = store.top3_used_in_range(start, end);
        let titles: Vec<_> = top.iter().map(|r| r.publication.title.as_str()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_ties_keep_date_order() {
        let mut store = Store::new();
        let late = store.add_publication(article("Late", date(2020, 5, 1)));
        let early = store.add_publication(article("Early", date(2020, 4, 1)));
        store.record_view(late, date(2020, 5, 2), 7);
        store.record_view(early, date(2020, 4, 2), 7);

        let top = store.top_used_in_range(date(2020, 1, 1), date(2020, 12, 31), 5);
        let titles: Vec<_> = top.iter().map(|r| r.publication.title.as_str()).collect();
        assert_eq!(titles, vec!["Early", "Late"]);
    }

    #[test]
    fn test_usage_outside_range_is_ignored() {
        let mut store = Store::new();
        let p = store.add_publication(article("P", date(2020, 1, 10)));
        store.record_view(p, date(2019, 12, 31), 50);
        store.record_like(p, date(2020, 2, 1), 50);

        let window = (date(2020, 1, 1), date(2020, 1, 31));
        assert!(store.top3_used_in_range(window.0, window.1).is_empty());
        let unused = store.publications_unused_in_range(window.0, window.1);
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].title, "P");
    }

    #[test]
    fn test_unused_in_range() {
        let store = usage_store();
        let unused = store.publications_unused_in_range(date(2020, 3, 1), date(2020, 3, 31));
        let titles: Vec<_> = unused.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["B"]);
    }

    #[test]
    fn test_publications_by_author_in_range() {
        let mut store = Store::new();
        let ann = store.add_author(Author::new("Ann", "A. Lee", "0001"));
        let ben = store.add_author(Author::new("Ben", "B. Kim", "0002"));
        store.add_publication(article("Old", date(2018, 1, 1)).with_author(ann));
        store.add_publication(article("Mid", date(2020, 6, 1)).with_author(ann).with_author(ben));
        store.add_publication(article("Other", date(2020, 7, 1)).with_author(ben));
        store.add_publication(article("Early", date(2020, 1, 1)).with_author(ann));

        let found = store.publications_by_author_in_range("0001", date(2019, 1, 1), date(2020, 12, 31));
        let titles: Vec<_> = found.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Early", "Mid"]);

        assert!(store
            .publications_by_author_in_range("9999", date(2000, 1, 1), date(2030, 1, 1))
            .is_empty());
    }
}
