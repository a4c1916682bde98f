//! Bibliometric domain types for imcite
//!
//! This crate provides the entity models shared by the store and the graphs:
//! - Publication: a journal article or conference paper, with usage counters
//! - Author: researcher with scientific name, affiliation and external IDs (ORCID etc.)
//! - Venue: where a publication appeared (Journal or Conference)
//! - Arena / Handle: generational storage that every cross reference goes through
//!
//! Entities never hold each other directly. A publication lists its authors as
//! [`AuthorId`]s and an author lists its works as [`PublicationId`]s; both
//! resolve through the arena that owns them.

pub mod arena;
pub mod author;
pub mod publication;
pub mod venue;

pub use arena::*;
pub use author::*;
pub use publication::*;
pub use venue::*;
