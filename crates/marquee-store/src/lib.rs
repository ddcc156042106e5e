//! # marquee-store — The Movie Collection
//!
//! Exclusive owner and sole mutator of the in-memory movie collection.
//! [`MovieStore`] offers read (list/filter/get), insert, partial-update,
//! and delete over an insertion-ordered record list; [`seed::load_seed`]
//! reads the initial collection from a JSON file once at startup.
//!
//! The store never validates — callers hand it pre-validated
//! [`marquee_core::MovieDraft`] and [`marquee_core::MoviePatch`] values,
//! so a record that failed validation is unrepresentable here.

pub mod seed;
pub mod store;

pub use seed::{load_seed, SeedError};
pub use store::MovieStore;
