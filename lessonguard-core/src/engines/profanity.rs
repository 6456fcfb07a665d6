//! `ProfanityFilter` implementations backed by `lessonguard-wordlist`.

use anyhow::{Context, Result};
use lessonguard_wordlist::{ProfanityMatcher, ScannerOptions};
use log::debug;

use crate::config::ProfanityConfig;
use crate::engine::ProfanityFilter;

/// Word-list filter masking each term with a fixed character.
#[derive(Debug)]
pub struct WordlistFilter {
    matcher: ProfanityMatcher,
    mask_char: char,
}

impl WordlistFilter {
    pub fn new(matcher: ProfanityMatcher, mask_char: char) -> Self {
        Self { matcher, mask_char }
    }

    /// Builds the filter described by a `ProfanityConfig`.
    pub fn from_config(config: &ProfanityConfig) -> Result<Self> {
        config.validate()?;
        let wordlist = config.build_wordlist()?;
        let options = ScannerOptions { leet_variants: config.leet_variants };
        let matcher = ProfanityMatcher::new(&wordlist, options)
            .context("Failed to build profanity matcher")?;
        debug!(
            "Profanity filter ready: {} terms, mask '{}', leet variants {}.",
            matcher.term_count(),
            config.mask_char,
            config.leet_variants
        );
        Ok(Self::new(matcher, config.mask_char))
    }
}

impl ProfanityFilter for WordlistFilter {
    fn censor(&self, text: &str) -> String {
        self.matcher.censor(text, self.mask_char)
    }

    fn count_matches(&self, text: &str) -> usize {
        self.matcher.find_matches(text).len()
    }
}

/// A filter that leaves text untouched; used when the profanity pass is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProfanityFilter;

impl ProfanityFilter for NoProfanityFilter {
    fn censor(&self, text: &str) -> String {
        text.to_string()
    }

    fn count_matches(&self, _text: &str) -> usize {
        0
    }
}
