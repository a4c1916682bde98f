//! Corpus seeding integration tests

mod common;

use common::fixtures::{date, fixture_path, load_corpus};
use imcite_core::{Corpus, CorpusError, PublicationKind};

#[test]
fn test_fixture_counts() {
    let corpus = load_corpus();
    let store = corpus.store();

    assert_eq!(store.publication_count(), 5);
    assert_eq!(store.author_count(), 4);
    assert_eq!(corpus.citations().vertex_count(), 5);
    assert_eq!(corpus.citations().citation_count(), 4);
    assert_eq!(corpus.collaborations().vertex_count(), 4);
    assert_eq!(corpus.collaborations().collaboration_count(), 3);
}

#[test]
fn test_fixture_skips_unknown_author_and_citation() {
    let corpus = load_corpus();
    let store = corpus.store();
    let notes = store.publication_by_title("Unread Notes").unwrap();

    assert_eq!(notes.authors.len(), 1);
    assert!(notes.references.is_empty());
    assert!(store.validate_consistency().is_consistent());
}

#[test]
fn test_fixture_entities_round_trip_fields() {
    let corpus = load_corpus();
    let store = corpus.store();

    let ann = store.author_by_orcid("0000-0001").unwrap();
    assert_eq!(ann.scientific_name, "A. Silva");
    assert_eq!(ann.ciencia_id, "1A2B-3C4D-0001");
    assert_eq!(ann.publications.len(), 2);

    let indexing = store.publication_by_title("Graph Indexing").unwrap();
    assert_eq!(indexing.kind(), PublicationKind::Journal);
    assert_eq!(indexing.keywords, vec!["graphs", "indexing"]);
    assert_eq!(indexing.abstract_text, "Indexing large citation graphs.");
    assert_eq!(indexing.downloads, 3);
    assert_eq!(indexing.usage_in_range(date(2020, 1, 1), date(2020, 12, 31)), 12);
}

#[test]
fn test_fixture_connectivity() {
    let corpus = load_corpus();
    // "Unread Notes" neither cites nor is cited
    assert!(!corpus.citations().is_weakly_connected());
    assert!(!corpus.citations().reaches_all_from_root());
}

#[test]
fn test_mutations_after_seeding_keep_graphs_in_step() {
    let mut corpus = load_corpus();
    let notes = corpus.store().publication_id_by_title("Unread Notes").unwrap();
    let venues = corpus.store().publication_id_by_title("Ranking Venues").unwrap();
    let ben = corpus.store().author_id_by_orcid("0000-0002").unwrap();
    let dan = corpus.store().author_id_by_orcid("0000-0004").unwrap();

    assert!(corpus.cite(notes, venues));
    assert!(corpus.citations().is_weakly_connected());

    assert!(corpus.add_authorship(notes, ben));
    assert_eq!(corpus.collaborations().collaborators_of(dan).len(), 2);
    assert_eq!(corpus.collaborations().co_authored_count(corpus.store(), ben, dan), 1);

    corpus.remove_author("0000-0002");
    assert!(!corpus.collaborations().contains(ben));
    assert_eq!(corpus.store().archived_name("0000-0002"), Some("B. Costa"));
    assert!(corpus.store().validate_consistency().is_consistent());
}

#[test]
fn test_load_missing_file() {
    let err = Corpus::load_json(fixture_path("absent.json")).unwrap_err();
    assert!(matches!(err, CorpusError::Io { .. }));
}

#[test]
fn test_empty_seed() {
    let corpus = Corpus::from_json("{}").unwrap();
    assert_eq!(corpus.store().publication_count(), 0);
    assert!(corpus.citations().is_weakly_connected());
}
