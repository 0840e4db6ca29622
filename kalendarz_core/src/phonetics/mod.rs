//! # Phonetics
//!
//! English-reader pronunciation guides for Polish words. Stressed syllables
//! are written in capitals ("loo-TEH-goh").
//!
//! Resolution is two-tier:
//!
//! 1. an exact, case-insensitive match in the hand-tuned [`overrides`] table;
//! 2. the rule-based [`transliterate::fallback`], which never fails.
//!
//! [`pronounce`] reports which tier answered via [`Resolution`], so hand-tuned
//! entries can be audited separately from derived ones.
//!
//! ## Example
//!
//! ```rust
//! use kalendarz_core::phonetics::{pronounce, transliterate, Resolution};
//!
//! assert_eq!(transliterate("marca"), "MAR-tsah");
//! assert!(matches!(pronounce("marca"), Resolution::Overridden(_)));
//! assert!(matches!(pronounce("rzeka"), Resolution::Derived(_)));
//! assert_eq!(transliterate(""), "");
//! ```

pub mod overrides;
pub mod transliterate;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// A value tagged with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum Resolution<T> {
    /// Taken verbatim from a curated table
    Overridden(T),
    /// Computed by the fallback rule
    Derived(T),
}

impl<T> Resolution<T> {
    pub fn value(&self) -> &T {
        match self {
            Resolution::Overridden(v) | Resolution::Derived(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Resolution::Overridden(v) | Resolution::Derived(v) => v,
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, Resolution::Overridden(_))
    }
}

/// Exact lookup in `table`, falling back to `derive(key)`.
pub fn resolve<K, Q, V, R, F>(table: &HashMap<K, V>, key: &Q, derive: F) -> Resolution<R>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    V: Clone + Into<R>,
    F: FnOnce(&Q) -> R,
{
    match table.get(key) {
        Some(value) => Resolution::Overridden(value.clone().into()),
        None => Resolution::Derived(derive(key)),
    }
}

fn pronounce_word(word: &str) -> Resolution<String> {
    let lower = word.to_lowercase();
    resolve(&*overrides::OVERRIDES, lower.as_str(), |w| {
        trace!(word = %w, "no phonetic override, using fallback");
        transliterate::fallback(w)
    })
}

/// Pronunciation guide for a word or a space-separated phrase.
///
/// A phrase is resolved word by word and counts as overridden only when every
/// word was.
pub fn pronounce(text: &str) -> Resolution<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= 1 {
        return pronounce_word(words.first().copied().unwrap_or(""));
    }

    let parts: Vec<Resolution<String>> = words.iter().map(|w| pronounce_word(w)).collect();
    let all_overridden = parts.iter().all(Resolution::is_overridden);
    let joined = parts
        .into_iter()
        .map(Resolution::into_inner)
        .collect::<Vec<_>>()
        .join(" ");
    if all_overridden {
        Resolution::Overridden(joined)
    } else {
        Resolution::Derived(joined)
    }
}

/// Pronunciation guide as a plain string. Never fails.
pub fn transliterate(text: &str) -> String {
    pronounce(text).into_inner()
}
