//! Rule compilation for the lessonguard pattern matcher.
//!
//! This module turns configured `RedactionRule`s into compiled regular
//! expressions, preserving rule order, and caches the result process-wide so
//! repeated engine construction does not recompile identical rule sets.

pub mod compiler;
