//! Repository for the `contacts` table.

use agency_core::contact::NewContact;
use agency_core::types::DbId;
use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;

use crate::models::contact::{Contact, ContactFilter};

/// Column list for `contacts` queries.
const COLUMNS: &str = "id, name, email, phone, message, created_at, ip_address";

/// OR-match of one search term against the three searchable columns.
/// Binds the term three times.
const SEARCH_WHERE: &str =
    "WHERE instr(name, ?) > 0 OR instr(email, ?) > 0 OR instr(phone, ?) > 0";

/// Newest first; id breaks ties between rows written in the same instant.
const ORDER_BY: &str = "ORDER BY created_at DESC, id DESC";

/// Provides create, search, list and delete operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a validated contact, returning the full row.
    ///
    /// `created_at` is taken from the server clock and stored as fixed-width
    /// RFC 3339 text so that lexical order matches chronological order.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewContact,
        ip_address: Option<&str>,
    ) -> Result<Contact, sqlx::Error> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let query = format!(
            "INSERT INTO contacts (name, email, phone, message, created_at, ip_address) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(input.name())
            .bind(input.email())
            .bind(input.phone())
            .bind(input.message())
            .bind(created_at)
            .bind(ip_address)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = ?");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count contacts matching `filter` (for pagination metadata).
    pub async fn count(pool: &SqlitePool, filter: &ContactFilter) -> Result<i64, sqlx::Error> {
        match filter.term() {
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
                    .fetch_one(pool)
                    .await
            }
            Some(term) => {
                let query = format!("SELECT COUNT(*) FROM contacts {SEARCH_WHERE}");
                sqlx::query_scalar::<_, i64>(&query)
                    .bind(term)
                    .bind(term)
                    .bind(term)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// List one page of contacts matching `filter`, newest first.
    pub async fn list(
        pool: &SqlitePool,
        filter: &ContactFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, sqlx::Error> {
        match filter.term() {
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM contacts {ORDER_BY} LIMIT ? OFFSET ?");
                sqlx::query_as::<_, Contact>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM contacts {SEARCH_WHERE} {ORDER_BY} LIMIT ? OFFSET ?"
                );
                sqlx::query_as::<_, Contact>(&query)
                    .bind(term)
                    .bind(term)
                    .bind(term)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Permanently delete a contact. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
