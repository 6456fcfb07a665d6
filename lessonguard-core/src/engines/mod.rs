//! Concrete implementations of the `SanitizationEngine` and `ProfanityFilter` traits.

pub mod pattern_matcher;
pub mod profanity;
