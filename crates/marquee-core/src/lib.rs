#![deny(missing_docs)]

//! # marquee-core — Foundational Types for Marquee
//!
//! This crate defines the movie record schema and the validator that every
//! other crate in the workspace depends on. It has no internal crate
//! dependencies — only `serde`, `serde_json`, `url`, `utoipa`, and `uuid`
//! from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`MovieId`] is a distinct
//!    type; a raw string or UUID is never passed around as an identifier.
//!
//! 2. **[`Genre`] is a closed vocabulary.** One enum, seven variants,
//!    exhaustive `match` everywhere. No free-form genre strings that can
//!    drift from the catalog.
//!
//! 3. **Validation reports every violation in one pass.** [`validate_full`]
//!    and [`validate_partial`] walk untyped JSON and return [`FieldErrors`]
//!    naming each offending field, so a caller reports all problems in a
//!    single response rather than iterating.
//!
//! 4. **Validated values cannot carry invalid data.** A [`MovieDraft`] or
//!    [`MoviePatch`] only exists as the output of a validator, so the store
//!    never has to re-check what it is given.

pub mod error;
pub mod genre;
pub mod movie;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{FieldError, FieldErrorKind, FieldErrors};
pub use genre::Genre;
pub use movie::{Movie, MovieDraft, MovieId, MoviePatch, DEFAULT_RATE};
pub use validate::{validate_full, validate_partial};
