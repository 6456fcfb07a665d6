// lessonguard-wordlist/src/scanner/mod.rs
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use daachorse::DoubleArrayAhoCorasick;

use crate::error::WordlistError;
use crate::normalize::{collapse_spaces, fold_for_matching, is_boundary_after, is_boundary_before};
use crate::wordlist::Wordlist;

/// Options controlling how text is folded before lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Fold common substitutions (`0→o 1→i 3→e 4→a 5→s 7→t @→a $→s`).
    pub leet_variants: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self { leet_variants: true }
    }
}

/// Byte span of a banned term in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfanityMatch {
    pub start: usize,
    pub end: usize,
}

/// Scans text for banned terms with word-boundary awareness.
///
/// Immutable once built and safe to share across threads.
pub struct ProfanityMatcher {
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
    options: ScannerOptions,
    term_count: usize,
}

impl fmt::Debug for ProfanityMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfanityMatcher")
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .field("options", &self.options)
         .field("term_count", &self.term_count)
         .finish()
    }
}

impl ProfanityMatcher {
    pub fn new(wordlist: &Wordlist, options: ScannerOptions) -> Result<Self, WordlistError> {
        // Folding can collapse distinct terms ("a55" and "ass"); the automaton rejects duplicates.
        let mut patterns: Vec<Vec<u8>> = wordlist
            .terms()
            .map(|t| fold_for_matching(t, options.leet_variants))
            .collect();
        patterns.sort();
        patterns.dedup();

        let term_count = patterns.len();
        let automaton = if patterns.is_empty() {
            None
        } else {
            Some(
                DoubleArrayAhoCorasick::new(patterns)
                    .map_err(|e| WordlistError::Automaton(e.to_string()))?,
            )
        };

        Ok(Self { automaton, options, term_count })
    }

    /// Matcher over the embedded default list with default options.
    pub fn with_default_list() -> Result<Self, WordlistError> {
        Self::new(&Wordlist::default_list(), ScannerOptions::default())
    }

    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Number of distinct folded terms compiled into the automaton.
    pub fn term_count(&self) -> usize {
        self.term_count
    }

    /// Finds all accepted matches: whole words only, non-overlapping, sorted
    /// by start, the longest term winning when several start together.
    pub fn find_matches(&self, text: &str) -> Vec<ProfanityMatch> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let folded = fold_for_matching(text, self.options.leet_variants);
        // Terms hold single spaces; "bloody\t\thell" must still match "bloody hell".
        let (compact, offsets) = collapse_spaces(&folded);
        let original = text.as_bytes();

        let mut candidates: Vec<ProfanityMatch> = automaton
            .find_overlapping_iter(&compact)
            .map(|m| ProfanityMatch {
                start: offsets[m.start()],
                end: offsets[m.end() - 1] + 1,
            })
            .filter(|m| {
                is_boundary_before(text, &folded, m.start) && is_boundary_after(text, &folded, m.end)
            })
            // A span with no letter in the source ("455", "$5") is a number, not a word.
            .filter(|m| original[m.start..m.end].iter().any(u8::is_ascii_alphabetic))
            .collect();

        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut accepted = Vec::with_capacity(candidates.len());
        let mut last_end = 0usize;
        for candidate in candidates {
            if candidate.start < last_end {
                continue;
            }
            last_end = candidate.end;
            accepted.push(candidate);
        }
        accepted
    }

    pub fn is_profane(&self, text: &str) -> bool {
        !self.find_matches(text).is_empty()
    }

    /// Replaces every match with `mask`, one mask per character of the span.
    pub fn censor(&self, text: &str, mask: char) -> String {
        let matches = self.find_matches(text);
        if matches.is_empty() {
            return String::from(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut last_end = 0usize;
        for m in matches {
            out.push_str(&text[last_end..m.start]);
            out.extend(text[m.start..m.end].chars().map(|_| mask));
            last_end = m.end;
        }
        out.push_str(&text[last_end..]);
        out
    }
}
