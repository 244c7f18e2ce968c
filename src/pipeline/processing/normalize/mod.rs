//! Field-level normalizers for scraped job postings.
//!
//! Categorical fields are reduced with ordered keyword cascades ([`RuleTable`]);
//! the salary field has its own unit-aware parser. Unrecognized categorical text
//! is passed through, never discarded.

pub mod normalizers;
pub mod registry;
pub mod rules;

pub use registry::{Field, FieldNormalizers, RecordOutcome};
pub use rules::{KeywordRule, Label, Normalized, RuleTable};
