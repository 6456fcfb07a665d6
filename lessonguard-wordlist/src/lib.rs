// lessonguard-wordlist/src/lib.rs
//! A `no_std` banned-term scanner.
//!
//! Terms live in a [`Wordlist`]; a [`ProfanityMatcher`] compiles them into a
//! double-array Aho-Corasick automaton and reports whole-word, case-insensitive
//! matches, optionally folding common character substitutions ("sh1t", "a$$").
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod normalize;
pub mod scanner;
pub mod wordlist;

pub use error::WordlistError;
pub use normalize::fold_for_matching;
pub use scanner::{ProfanityMatch, ProfanityMatcher, ScannerOptions};
pub use wordlist::Wordlist;
