//! # Schema Validation
//!
//! The gatekeeper between untrusted input and the store's invariants.
//!
//! Candidates arrive as untyped JSON objects so that a wrongly typed field
//! is reported as a [`FieldErrors`] entry like any other violation, not as
//! a transport-level parse failure. Both validators walk the fixed field
//! set once and collect every violation before returning; unknown fields
//! are ignored and never admitted into a record.
//!
//! Purely functional: no side effects, safe to call from any number of
//! callers concurrently.

use serde_json::{Map, Value};
use url::Url;

use crate::error::{FieldError, FieldErrorKind, FieldErrors};
use crate::genre::{Genre, ALL_GENRES};
use crate::movie::{MovieDraft, MoviePatch, DEFAULT_RATE};

/// Check a candidate against the full movie schema.
///
/// Collects a [`FieldErrors`] entry for every required field that is
/// missing, wrongly typed, or out of range. On success returns a
/// normalized [`MovieDraft`] with `rate` defaulted to [`DEFAULT_RATE`]
/// when absent. Does not assign an id.
pub fn validate_full(candidate: &Map<String, Value>) -> Result<MovieDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = required(candidate, "title", check_title, &mut errors);
    let year = required(candidate, "year", check_year, &mut errors);
    let director = required(candidate, "director", check_director, &mut errors);
    let duration = required(candidate, "duration", check_duration, &mut errors);
    let rate = match candidate.get("rate") {
        None => Some(DEFAULT_RATE),
        Some(value) => checked(value, "rate", check_rate, &mut errors),
    };
    let poster = required(candidate, "poster", check_poster, &mut errors);
    let genre = required(candidate, "genre", check_genre, &mut errors);

    match (title, year, director, duration, rate, poster, genre) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(rate),
            Some(poster),
            Some(genre),
        ) if errors.is_empty() => Ok(MovieDraft {
            title,
            year,
            director,
            duration,
            rate,
            poster,
            genre,
        }),
        _ => Err(errors),
    }
}

/// Check a candidate against the partial movie schema.
///
/// Same per-field constraints as [`validate_full`], but no field is
/// required: the empty object is valid and yields the empty patch. Fails
/// only when a present field violates its constraint.
pub fn validate_partial(candidate: &Map<String, Value>) -> Result<MoviePatch, FieldErrors> {
    let mut errors = FieldErrors::new();

    let patch = MoviePatch {
        title: present(candidate, "title", check_title, &mut errors),
        year: present(candidate, "year", check_year, &mut errors),
        director: present(candidate, "director", check_director, &mut errors),
        duration: present(candidate, "duration", check_duration, &mut errors),
        rate: present(candidate, "rate", check_rate, &mut errors),
        poster: present(candidate, "poster", check_poster, &mut errors),
        genre: present(candidate, "genre", check_genre, &mut errors),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

// ── Field walkers ───────────────────────────────────────────────────

/// Fetch and check a required field, recording `missing` when absent.
fn required<T>(
    candidate: &Map<String, Value>,
    field: &str,
    check: fn(&Value) -> Result<T, FieldError>,
    errors: &mut FieldErrors,
) -> Option<T> {
    match candidate.get(field) {
        None => {
            errors.insert(field, FieldError::missing(field));
            None
        }
        Some(value) => checked(value, field, check, errors),
    }
}

/// Fetch and check an optional field; absence records nothing.
fn present<T>(
    candidate: &Map<String, Value>,
    field: &str,
    check: fn(&Value) -> Result<T, FieldError>,
    errors: &mut FieldErrors,
) -> Option<T> {
    candidate
        .get(field)
        .and_then(|value| checked(value, field, check, errors))
}

/// Run a field check, folding a failure into the report.
fn checked<T>(
    value: &Value,
    field: &str,
    check: fn(&Value) -> Result<T, FieldError>,
    errors: &mut FieldErrors,
) -> Option<T> {
    match check(value) {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            errors.insert(field, error);
            None
        }
    }
}

// ── Per-field constraints ───────────────────────────────────────────

fn check_title(value: &Value) -> Result<String, FieldError> {
    let title = value
        .as_str()
        .ok_or_else(|| FieldError::new(FieldErrorKind::WrongType, "title must be a string"))?;
    if title.is_empty() {
        return Err(FieldError::new(
            FieldErrorKind::OutOfRange,
            "title must not be empty",
        ));
    }
    Ok(title.to_string())
}

fn check_year(value: &Value) -> Result<i32, FieldError> {
    let year = integer(value, "year")?;
    if !(1900..=2024).contains(&year) {
        return Err(FieldError::new(
            FieldErrorKind::OutOfRange,
            "year must be between 1900 and 2024",
        ));
    }
    // Bounds above guarantee the narrowing cast is lossless.
    Ok(year as i32)
}

fn check_director(value: &Value) -> Result<String, FieldError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FieldError::new(FieldErrorKind::WrongType, "director must be a string"))
}

fn check_duration(value: &Value) -> Result<u32, FieldError> {
    let duration = integer(value, "duration")?;
    if duration <= 0 {
        return Err(FieldError::new(
            FieldErrorKind::OutOfRange,
            "duration must be positive",
        ));
    }
    u32::try_from(duration)
        .map_err(|_| FieldError::new(FieldErrorKind::OutOfRange, "duration is out of range"))
}

fn check_rate(value: &Value) -> Result<f64, FieldError> {
    let rate = value
        .as_f64()
        .ok_or_else(|| FieldError::new(FieldErrorKind::WrongType, "rate must be a number"))?;
    if !(0.0..=10.0).contains(&rate) {
        return Err(FieldError::new(
            FieldErrorKind::OutOfRange,
            "rate must be between 0 and 10",
        ));
    }
    Ok(rate)
}

fn check_poster(value: &Value) -> Result<String, FieldError> {
    let poster = value
        .as_str()
        .ok_or_else(|| FieldError::new(FieldErrorKind::WrongType, "poster must be a string"))?;
    // `Url::parse` rejects relative references, so this enforces an
    // absolute URL.
    Url::parse(poster)
        .map_err(|_| FieldError::new(FieldErrorKind::InvalidUrl, "poster must be a valid URL"))?;
    Ok(poster.to_string())
}

fn check_genre(value: &Value) -> Result<Vec<Genre>, FieldError> {
    let entries = value.as_array().ok_or_else(|| {
        FieldError::new(
            FieldErrorKind::WrongType,
            "genre must be an array of genre names",
        )
    })?;
    let mut genres = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let name = entry.as_str().ok_or_else(|| {
            FieldError::new(
                FieldErrorKind::WrongType,
                format!("genre[{index}] must be a string"),
            )
        })?;
        let genre = Genre::from_name(name).ok_or_else(|| {
            FieldError::new(
                FieldErrorKind::InvalidEnumValue,
                format!("genre[{index}] must be one of {} (got \"{name}\")", vocabulary()),
            )
        })?;
        genres.push(genre);
    }
    Ok(genres)
}

/// Parse a JSON value as an integer, distinguishing non-numbers from
/// fractional numbers.
fn integer(value: &Value, field: &str) -> Result<i64, FieldError> {
    if !value.is_number() {
        return Err(FieldError::new(
            FieldErrorKind::WrongType,
            format!("{field} must be a number"),
        ));
    }
    value.as_i64().ok_or_else(|| {
        if value.is_u64() {
            // Integral but beyond i64: can only be outside any schema range.
            FieldError::new(FieldErrorKind::OutOfRange, format!("{field} is out of range"))
        } else {
            FieldError::new(
                FieldErrorKind::WrongType,
                format!("{field} must be an integer"),
            )
        }
    })
}

/// The genre vocabulary as a comma-separated list for error messages.
fn vocabulary() -> String {
    ALL_GENRES
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
