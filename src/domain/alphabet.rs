//! Alphabetical sitemap index.
//!
//! The indexer itself knows nothing about a particular alphabet: it reports
//! which first letters occur among star names and filters stars by a letter.
//! The [`Alphabet`] the sitemap iterates over is configuration.

use std::collections::BTreeSet;

use serde_json::json;

use crate::domain::entities::Star;
use crate::error::AppError;

/// Letters used by the site when none are configured.
pub const DEFAULT_ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЭЮЯ";

/// Upper-cases a single character. Some characters expand to more than one
/// (`ß` becomes `SS`), hence the `String`.
fn upper(c: char) -> String {
    c.to_uppercase().collect()
}

/// Returns the set of upper-cased first characters of the star names.
///
/// Stars with an empty name are skipped.
pub fn active_letters(stars: &[Star]) -> BTreeSet<String> {
    stars
        .iter()
        .filter_map(|star| star.name.chars().next())
        .map(upper)
        .collect()
}

/// Returns the stars whose upper-cased name starts with the upper-cased
/// `letter`, in input order.
///
/// Sorting is the caller's business: pass stars already ordered by name to
/// get a name-ordered result.
pub fn filter_by_letter(stars: &[Star], letter: char) -> Vec<Star> {
    let prefix = upper(letter);
    stars
        .iter()
        .filter(|star| star.name.to_uppercase().starts_with(&prefix))
        .cloned()
        .collect()
}

/// One alphabet letter as rendered by the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFacet {
    pub letter: String,
    pub active: bool,
}

/// Ordered set of letters the sitemap offers for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Parses an alphabet from a string of letters, e.g. `"АБВ"`.
    ///
    /// Letters are upper-cased and whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the alphabet is empty, contains
    /// non-alphabetic characters or repeats a letter.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let mut letters = Vec::new();

        for c in raw.chars().filter(|c| !c.is_whitespace()) {
            if !c.is_alphabetic() {
                return Err(AppError::invalid_input(
                    "Alphabet may only contain letters",
                    json!({ "character": c.to_string() }),
                ));
            }

            let mut upper = c.to_uppercase();
            let letter = match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => {
                    return Err(AppError::invalid_input(
                        "Alphabet letter has no single upper-case form",
                        json!({ "character": c.to_string() }),
                    ));
                }
            };

            if letters.contains(&letter) {
                return Err(AppError::invalid_input(
                    "Alphabet contains a duplicate letter",
                    json!({ "letter": letter.to_string() }),
                ));
            }
            letters.push(letter);
        }

        if letters.is_empty() {
            return Err(AppError::invalid_input("Alphabet is empty", json!({})));
        }

        Ok(Self { letters })
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Pairs every alphabet letter with whether it occurs in `active`.
    pub fn facets(&self, active: &BTreeSet<String>) -> Vec<LetterFacet> {
        self.letters
            .iter()
            .map(|&c| {
                let letter = c.to_string();
                let active = active.contains(&letter);
                LetterFacet { letter, active }
            })
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}
