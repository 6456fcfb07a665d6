// lessonguard-wordlist/src/wordlist/mod.rs
use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::WordlistError;

/// The embedded default term list.
const DEFAULT_WORDLIST: &str = include_str!("../../data/default_wordlist.txt");

/// A de-duplicated, lower-cased set of banned terms.
///
/// Terms may be single words or short phrases; internal whitespace is
/// collapsed to single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    terms: BTreeSet<String>,
}

fn normalize_term(term: &str) -> Option<String> {
    let words: Vec<&str> = term.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" ").to_lowercase())
}

impl Wordlist {
    /// An empty list; a matcher built from it never matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in list shipped with the crate.
    pub fn default_list() -> Self {
        Self::parse(DEFAULT_WORDLIST)
    }

    /// Parses one term per line. `#` starts a comment; blank lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut list = Self::new();
        for line in text.lines() {
            let content = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };
            if let Some(term) = normalize_term(content) {
                list.terms.insert(term);
            }
        }
        list
    }

    /// Adds a term. Returns `Ok(false)` if it was already present.
    pub fn insert(&mut self, term: &str) -> Result<bool, WordlistError> {
        let term = normalize_term(term).ok_or(WordlistError::EmptyTerm)?;
        Ok(self.terms.insert(term))
    }

    pub fn extend<I, S>(&mut self, terms: I) -> Result<(), WordlistError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.insert(term.as_ref())?;
        }
        Ok(())
    }

    /// Removes a term (case-insensitive). Returns whether it was present.
    pub fn remove(&mut self, term: &str) -> bool {
        match normalize_term(term) {
            Some(term) => self.terms.remove(&term),
            None => false,
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        normalize_term(term).map_or(false, |t| self.terms.contains(&t))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}
