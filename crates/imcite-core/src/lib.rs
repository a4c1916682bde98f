//! Imcite Core - indexed bibliometric store with citation and collaboration graphs
//!
//! This crate provides:
//!
//! - **Store**: publications indexed by date and title, authors by name and ORCID,
//!   with cascading author removal, an archive of removed authors and usage queries
//! - **Graph**: citation network (directed) and co-authorship network (undirected)
//!   over store handles
//! - **Corpus**: a store plus both graphs, mutated together, seedable from JSON
//! - **Export**: plain-text dump of titles and author names
//! - **Config**: export path, usage window and log filter
//!
//! # Architecture
//!
//! ```text
//! Corpus ─┬─ Store ──────────── Arena<Publication>, Arena<Author>
//!         ├─ CitationGraph ──── DiGraph<PublicationId>
//!         └─ CollaborationGraph UnGraph<AuthorId>
//! ```
//!
//! Graph queries that need entity data take a `&Store` and skip handles that no
//! longer resolve.

pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod graph;
pub mod store;

pub use config::{AnalyticsConfig, ExportConfig, ImciteConfig, LoggingConfig};
pub use corpus::{AuthorSeed, Corpus, CorpusSeed, PublicationSeed};
pub use error::{ConfigError, CorpusError, ExportError, ImciteError, Result};
pub use export::{export_to_path, render_report, write_report};
pub use graph::{CitationGraph, CollaborationGraph};
pub use store::{ConsistencyReport, DanglingAuthor, Store, UsageRank};

pub use imcite_domain::{
    Author, AuthorId, Publication, PublicationId, PublicationKind, Venue,
};
