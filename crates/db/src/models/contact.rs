//! Contact entity model, list filter and query parameters.

use agency_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
    pub ip_address: Option<String>,
}

/// Which contacts a count or list call covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFilter {
    All,
    /// Substring of `name`, `email` or `phone` (case-sensitive).
    Search(String),
}

impl ContactFilter {
    /// Build a filter from an optional search box value.
    ///
    /// The term is trimmed; a blank term means no filter.
    pub fn from_search(term: Option<&str>) -> Self {
        match term.map(str::trim) {
            Some(t) if !t.is_empty() => ContactFilter::Search(t.to_string()),
            _ => ContactFilter::All,
        }
    }

    pub fn term(&self) -> Option<&str> {
        match self {
            ContactFilter::All => None,
            ContactFilter::Search(t) => Some(t),
        }
    }
}

/// Query parameters for the admin contact listing.
#[derive(Debug, Default, Deserialize)]
pub struct ContactListParams {
    pub page: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_means_all() {
        assert_eq!(ContactFilter::from_search(None), ContactFilter::All);
        assert_eq!(ContactFilter::from_search(Some("")), ContactFilter::All);
        assert_eq!(ContactFilter::from_search(Some("  \t")), ContactFilter::All);
    }

    #[test]
    fn search_term_is_trimmed() {
        let filter = ContactFilter::from_search(Some("  ivan "));
        assert_eq!(filter.term(), Some("ivan"));
    }
}
