//! Core data structures and evaluation logic for Sieve.
//!
//! The engine keeps a registry of filter definitions (built-in and custom),
//! the criteria value bound to each definition, and evaluates records
//! against every active criterion.

mod confirm;
mod criteria;
mod definition;
mod display;
mod errors;
mod evaluate;
mod record;
mod registry;
mod session;
mod source;

pub use confirm::{AlwaysConfirm, Confirmation, NeverConfirm};
pub use criteria::*;
pub use definition::*;
pub use display::DisplayLimit;
pub use errors::{FilterError, SourceError};
pub use evaluate::Evaluator;
pub use record::{FieldId, FieldValue, Record};
pub use registry::DefinitionRegistry;
pub use session::{ClearPolicy, FilterSession};
pub use source::{JsonRecordSource, RecordSource, StaticRecordSource, parse_records};
