//! Imcite Binary
//!
//! Seeds a corpus from JSON, logs a summary and writes the text report.
//!
//! Usage: `imcite <corpus.json> [config.toml]`

use imcite_core::{export_to_path, Corpus, ImciteConfig, PublicationKind, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(corpus_path) = args.next() else {
        eprintln!("usage: imcite <corpus.json> [config.toml]");
        std::process::exit(2);
    };
    let config = match args.next() {
        Some(path) => ImciteConfig::load(path)?,
        None => ImciteConfig::new(),
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let corpus = Corpus::load_json(&corpus_path)?;
    let store = corpus.store();

    tracing::info!(
        "Loaded {} publication(s) and {} author(s) from {}",
        store.publication_count(),
        store.author_count(),
        corpus_path
    );

    let report = store.validate_consistency();
    if report.is_consistent() {
        tracing::info!("Store is consistent");
    }

    let citations = corpus.citations();
    tracing::info!(
        "Citation graph: {} vertices, {} edges, weakly connected: {}",
        citations.vertex_count(),
        citations.citation_count(),
        citations.is_weakly_connected()
    );
    for kind in [PublicationKind::Journal, PublicationKind::Conference] {
        let sub = citations.subgraph_by_kind(store, kind);
        tracing::info!(
            "  {} subgraph: {} vertices, {} edges",
            kind,
            sub.vertex_count(),
            sub.citation_count()
        );
    }

    let collaborations = corpus.collaborations();
    tracing::info!(
        "Collaboration graph: {} vertices, {} edges",
        collaborations.vertex_count(),
        collaborations.collaboration_count()
    );

    let first = store.publications().next().map(|p| p.date);
    let last = store.publications().last().map(|p| p.date);
    let window = config
        .analytics
        .window_start
        .or(first)
        .zip(config.analytics.window_end.or(last));
    if let Some((start, end)) = window {
        let ranked = store.top_used_in_range(start, end, config.analytics.top_used_limit);
        tracing::info!("Most used between {} and {}:", start, end);
        for rank in ranked {
            tracing::info!("  {} ({})", rank.publication.title, rank.usage);
        }
    }

    export_to_path(store, &config.export.path)?;
    Ok(())
}
