//! Per-page view state and derived views.
//!
//! # Responsibility
//! - Own each page's filter selections in a plain state container.
//! - Compute a fresh derived view from `(collections, state, now)`.
//!
//! # Invariants
//! - Views borrow records; they never copy or mutate the dataset.
//! - Filtered lists keep dataset order unless a page documents a sort.
//!
//! # See also
//! - `filter` and `aggregate` for the underlying passes.

pub mod admin;
pub mod dashboard;
pub mod reports;
pub mod sources;
pub mod workflows;
pub mod zone_detail;

use crate::present::Icon;

/// Summary card shown above page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub detail: String,
    pub icon: Icon,
}

impl StatCard {
    fn count(title: &'static str, value: usize, detail: String, icon: Icon) -> Self {
        Self {
            title,
            value: value.to_string(),
            detail,
            icon,
        }
    }
}

/// `"Showing X of Y <noun>"` caption above filtered lists.
pub fn showing_label(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {shown} of {total} {noun}")
}
