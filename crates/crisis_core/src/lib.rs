//! Core view-model logic for the crisis intelligence dashboard.
//! This crate is the single source of truth for filtering, aggregation and
//! per-page derived views; front ends only render what it returns.

pub mod aggregate;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod nav;
pub mod present;
pub mod session;
pub mod store;
pub mod view;

pub use aggregate::{
    average, count_by, count_where, format_average, format_percentage, percentage, share, sum,
    Tally,
};
pub use config::{ConfigError, CoreConfig, LoggingConfig};
pub use filter::{
    filter_records, filter_refs, matches, Criteria, DateWindow, FacetChoice, FacetField,
    Filterable, NumericField, TextField,
};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::dataset::Dataset;
pub use model::sample::sample_dataset;
pub use model::user::{Role, User};
pub use model::{RecordId, RecordKind, ValidationError};
pub use nav::{navigation_for, page_title, resolve_route, Page, Route, ShellState};
pub use session::{gate, AuthState, Screen, SessionProvider, StaticSession};
pub use store::{CommandOutcome, InMemoryStore, RecordStore, StoreCommand, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
