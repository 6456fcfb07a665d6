//! Terminal output helpers: colored status lines and the redaction summary table.

pub mod output_format;
pub mod redaction_summary;
