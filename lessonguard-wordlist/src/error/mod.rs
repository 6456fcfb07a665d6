use alloc::string::String;
use core::fmt;

/// Failures raised while building a word list or its automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistError {
    /// A term was empty after trimming.
    EmptyTerm,
    /// The automaton could not be constructed from the term set.
    Automaton(String),
}

impl fmt::Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordlistError::EmptyTerm => write!(f, "banned term is empty"),
            WordlistError::Automaton(msg) => write!(f, "failed to build banned-term automaton: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WordlistError {}
