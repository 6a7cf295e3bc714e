//! Record filtering over in-memory collections.
//!
//! # Responsibility
//! - Decide per-record matches for free-text, facet, credibility-band and
//!   date-window criteria.
//! - Apply matches across ordered collections without reordering.
//!
//! # Invariants
//! - Every function here is total: unknown values and missing optional
//!   fields fail their criterion instead of erroring.
//! - Empty criteria match every record.
//! - Output order is always the input order.

pub mod collection;
pub mod criteria;
pub mod predicate;
pub mod record;

pub use collection::{filter_records, filter_refs};
pub use criteria::{Criteria, DateWindow, FacetChoice, FacetFilter, ALL_SENTINEL};
pub use predicate::matches;
pub use record::{FacetField, Filterable, NumericField, TextField};
