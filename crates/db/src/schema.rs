//! Idempotent schema setup for the `contacts` table.

use crate::DbPool;

const CREATE_CONTACTS: &str = "\
    CREATE TABLE IF NOT EXISTS contacts ( \
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        name TEXT NOT NULL, \
        email TEXT NOT NULL, \
        phone TEXT, \
        message TEXT NOT NULL, \
        created_at TEXT NOT NULL, \
        ip_address TEXT \
    )";

const CREATE_CREATED_AT_INDEX: &str = "\
    CREATE INDEX IF NOT EXISTS idx_contacts_created_at \
    ON contacts (created_at DESC, id DESC)";

/// Ensure the `contacts` table and its index exist.
///
/// Safe to call on every start. Tables created before the `ip_address`
/// column existed get it added as a nullable column; existing rows are left
/// untouched.
pub async fn initialize(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_CONTACTS).execute(&mut *tx).await?;

    let has_ip_column = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM pragma_table_info('contacts') WHERE name = 'ip_address'",
    )
    .fetch_one(&mut *tx)
    .await?
        > 0;

    if !has_ip_column {
        sqlx::query("ALTER TABLE contacts ADD COLUMN ip_address TEXT")
            .execute(&mut *tx)
            .await?;
        tracing::info!("Added ip_address column to existing contacts table");
    }

    sqlx::query(CREATE_CREATED_AT_INDEX)
        .execute(&mut *tx)
        .await?;

    tx.commit().await
}
