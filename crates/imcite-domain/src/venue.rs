//! Publication venues

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of venue a publication appeared in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublicationKind {
    Journal,
    Conference,
}

impl fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationKind::Journal => write!(f, "journal"),
            PublicationKind::Conference => write!(f, "conference"),
        }
    }
}

/// A periodical
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    pub name: String,
    pub publisher: String,
    pub year: i32,
    /// e.g. "monthly", "quarterly"
    pub periodicity: String,
    pub jcr_impact_factor: f32,
    pub scopus_impact_factor: f32,
}

/// A conference edition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub name: String,
    pub publisher: String,
    pub year: i32,
    pub edition_number: u32,
    pub location: String,
}

/// Where a publication appeared, with the venue-specific details
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Venue {
    Journal(Journal),
    Conference(Conference),
}

impl Venue {
    /// Build a journal venue with no impact factors recorded
    pub fn journal(name: impl Into<String>, publisher: impl Into<String>, year: i32) -> Self {
        Venue::Journal(Journal {
            name: name.into(),
            publisher: publisher.into(),
            year,
            periodicity: String::new(),
            jcr_impact_factor: 0.0,
            scopus_impact_factor: 0.0,
        })
    }

    /// Build a conference venue
    pub fn conference(
        name: impl Into<String>,
        publisher: impl Into<String>,
        year: i32,
        edition_number: u32,
        location: impl Into<String>,
    ) -> Self {
        Venue::Conference(Conference {
            name: name.into(),
            publisher: publisher.into(),
            year,
            edition_number,
            location: location.into(),
        })
    }

    pub fn kind(&self) -> PublicationKind {
        match self {
            Venue::Journal(_) => PublicationKind::Journal,
            Venue::Conference(_) => PublicationKind::Conference,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Venue::Journal(j) => &j.name,
            Venue::Conference(c) => &c.name,
        }
    }

    pub fn publisher(&self) -> &str {
        match self {
            Venue::Journal(j) => &j.publisher,
            Venue::Conference(c) => &c.publisher,
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            Venue::Journal(j) => j.year,
            Venue::Conference(c) => c.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_kind() {
        let journal = Venue::journal("Nature", "Springer", 2020);
        let conference = Venue::conference("ICSE", "ACM", 2021, 43, "Madrid");

        assert_eq!(journal.kind(), PublicationKind::Journal);
        assert_eq!(conference.kind(), PublicationKind::Conference);
        assert_eq!(conference.name(), "ICSE");
        assert_eq!(journal.publisher(), "Springer");
        assert_eq!(conference.year(), 2021);
    }

    #[test]
    fn test_venue_serde_is_tagged() {
        let venue = Venue::conference("ICSE", "ACM", 2021, 43, "Madrid");
        let json = serde_json::to_value(&venue).unwrap();
        assert_eq!(json["kind"], "conference");
        assert_eq!(json["edition_number"], 43);

        let back: Venue = serde_json::from_value(json).unwrap();
        assert_eq!(back, venue);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PublicationKind::Journal.to_string(), "journal");
        assert_eq!(PublicationKind::Conference.to_string(), "conference");
    }
}
