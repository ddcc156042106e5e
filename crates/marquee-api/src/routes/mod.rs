//! # API Route Modules
//!
//! - `movies` — the movie collection resource: list/filter, fetch-by-id,
//!   create, partial-update, delete.

pub mod movies;
