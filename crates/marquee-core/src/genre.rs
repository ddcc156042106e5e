//! # Genre Vocabulary
//!
//! The closed set of genres a movie may carry. A record's genre list is
//! ordered and may contain duplicates; membership in this enum is what the
//! validator enforces, so a stored record can never hold an unknown genre.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A movie genre.
///
/// Serializes as the display name (`"Sci-Fi"` for [`Genre::SciFi`], the
/// variant name for the rest), matching the wire vocabulary exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    /// Action.
    Action,
    /// Adventure.
    Adventure,
    /// Drama.
    Drama,
    /// Fantasy.
    Fantasy,
    /// Horror.
    Horror,
    /// Thriller.
    Thriller,
    /// Science fiction, spelled `Sci-Fi` on the wire.
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

/// Every genre, in declaration order. Used to enumerate the vocabulary in
/// validation messages.
pub const ALL_GENRES: [Genre; 7] = [
    Genre::Action,
    Genre::Adventure,
    Genre::Drama,
    Genre::Fantasy,
    Genre::Horror,
    Genre::Thriller,
    Genre::SciFi,
];

impl Genre {
    /// Return the wire/display name of this genre.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Thriller => "Thriller",
            Self::SciFi => "Sci-Fi",
        }
    }

    /// Look up a genre by its exact wire name.
    ///
    /// Case-sensitive: `"Action"` parses, `"action"` does not. Write
    /// payloads must use the vocabulary verbatim; only read-side filtering
    /// relaxes case (see [`Genre::matches`]).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_GENRES.iter().copied().find(|g| g.as_str() == name)
    }

    /// Case-insensitive comparison against a filter string.
    ///
    /// This is the read-side membership test: `"sci-fi"`, `"SCI-FI"`, and
    /// `"Sci-Fi"` all match [`Genre::SciFi`].
    pub fn matches(&self, filter: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(filter)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trips_every_genre() {
        for genre in ALL_GENRES {
            assert_eq!(Genre::from_name(genre.as_str()), Some(genre));
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Genre::from_name("action"), None);
        assert_eq!(Genre::from_name("SCI-FI"), None);
        assert_eq!(Genre::from_name("Sci-Fi"), Some(Genre::SciFi));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Genre::from_name("Romance"), None);
        assert_eq!(Genre::from_name(""), None);
    }

    #[test]
    fn matches_ignores_case() {
        assert!(Genre::Action.matches("action"));
        assert!(Genre::Action.matches("ACTION"));
        assert!(Genre::SciFi.matches("sci-fi"));
        assert!(!Genre::SciFi.matches("scifi"));
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Genre::SciFi).unwrap(), "\"Sci-Fi\"");
        assert_eq!(serde_json::to_string(&Genre::Drama).unwrap(), "\"Drama\"");
        let parsed: Genre = serde_json::from_str("\"Sci-Fi\"").unwrap();
        assert_eq!(parsed, Genre::SciFi);
    }

    #[test]
    fn serde_rejects_unknown_name() {
        assert!(serde_json::from_str::<Genre>("\"Musical\"").is_err());
    }
}
