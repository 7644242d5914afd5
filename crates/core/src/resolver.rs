//! Menu name resolution.
//!
//! A user-typed name is matched against the configured section names in
//! three tiers: an exact match wins outright; otherwise ordinary names are
//! compared case-insensitively; otherwise a case-insensitive substring match
//! is tried, anchored to word boundaries so `build` finds `build-all` but
//! not `rebuild-fast`. A tier that collects several candidates is ambiguous
//! and resolves to nothing.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::menus::ordinary;

/// Non-fatal resolution failures; `Display` is the user-facing diagnostic.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no '{}' in {:?}", .wanted, .known)]
    NotFound { wanted: String, known: Vec<String> },

    #[error("multiple '{}' in {:?}", .wanted, .candidates)]
    Ambiguous {
        wanted: String,
        candidates: Vec<String>,
    },
}

fn word_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b[a-z]\w*\b").expect("word-run pattern is valid"))
}

/// True if `name` contains `wanted` starting at a word boundary. Both
/// arguments must already be lowercased. The scan walks each
/// boundary-aligned alphabetic run and tests whether the remainder of the
/// name from that run onward starts with the wanted text.
fn within_on_boundary(wanted: &str, name: &str) -> bool {
    let pattern = word_run_pattern();
    let mut index = 0;

    while index < name.len() {
        let Some(run) = pattern.find(&name[index..]) else {
            break;
        };

        let remainder = &name[index + run.start()..];
        if remainder.starts_with(wanted) {
            return true;
        }

        index += run.end();
    }

    false
}

/// Finds the configured menu best matching `wanted`.
///
/// Reserved names (not [`ordinary`]) only participate in the exact tier.
///
/// # Errors
///
/// [`ResolveError::NotFound`] when no tier matched, listing every known
/// name; [`ResolveError::Ambiguous`] when a tier collected more than one
/// candidate, listing them.
pub fn find(wanted: &str, names: &[String]) -> Result<String, ResolveError> {
    if names.iter().any(|name| name == wanted) {
        return Ok(wanted.to_string());
    }

    let wanted_lower = wanted.to_lowercase();

    let mut founds: Vec<&String> = names
        .iter()
        .filter(|name| ordinary(name) && name.to_lowercase() == wanted_lower)
        .collect();

    if founds.is_empty() {
        founds = names
            .iter()
            .filter(|name| ordinary(name) && within_on_boundary(&wanted_lower, &name.to_lowercase()))
            .collect();
    }

    match founds.len() {
        1 => Ok(founds[0].to_string()),
        0 => Err(ResolveError::NotFound {
            wanted: wanted.to_string(),
            known: names.to_vec(),
        }),
        _ => Err(ResolveError::Ambiguous {
            wanted: wanted.to_string(),
            candidates: founds.into_iter().cloned().collect(),
        }),
    }
}
