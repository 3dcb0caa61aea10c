use async_trait::async_trait;
use roster_core::store::Result;
use roster_core::{NewRecord, Record, RecordId, RecordStore, StorageError};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::{debug, trace};

const SCHEMA: &str = include_str!("../ddl/mysql/records.sql");

/// MySQL implementation of the record store contract.
///
/// Identifiers are generated here rather than by the database so the store
/// stays the single assigner regardless of backend. The birthdate column is
/// plain text: values are only shape-checked and must round-trip unchanged.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Creates the `records` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

/// Builds a `%term%` LIKE pattern, escaping the wildcards in `term`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn encode_stack(stack: Option<&Vec<String>>) -> Result<Option<String>> {
    stack
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| StorageError::InvalidData(format!("failed to encode stack: {e}")))
}

fn decode_row(row: &MySqlRow) -> Result<Record> {
    let id: String = row.try_get("id").map_err(map_sqlx_error)?;
    let id = id
        .parse::<RecordId>()
        .map_err(|e| StorageError::InvalidData(format!("invalid record id '{id}': {e}")))?;

    let stack: Option<String> = row.try_get("stack").map_err(map_sqlx_error)?;
    let stack = stack
        .map(|raw| serde_json::from_str::<Vec<String>>(&raw))
        .transpose()
        .map_err(|e| StorageError::InvalidData(format!("invalid stack for {id}: {e}")))?;

    Ok(Record {
        id,
        name: row.try_get("name").map_err(map_sqlx_error)?,
        nickname: row.try_get("nickname").map_err(map_sqlx_error)?,
        birthdate: row.try_get("birthdate").map_err(map_sqlx_error)?,
        stack,
    })
}

#[async_trait]
impl RecordStore for MySqlStore {
    async fn save(&self, record: NewRecord) -> Result<RecordId> {
        let id = RecordId::new();
        let stack = encode_stack(record.stack.as_ref())?;

        sqlx::query(
            r#"
            INSERT INTO records (id, name, nickname, birthdate, stack)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(record.name)
        .bind(record.nickname)
        .bind(record.birthdate)
        .bind(stack)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(id = %id, "Saved record in MySQL");
        Ok(id)
    }

    async fn find_all(&self, term: &str) -> Result<Vec<Record>> {
        let pattern = like_pattern(&term.to_lowercase());
        trace!(pattern = %pattern, "Searching records in MySQL");

        let rows = sqlx::query(
            r#"
            SELECT id, name, nickname, birthdate, CAST(stack AS CHAR) AS stack
            FROM records
            WHERE LOWER(name) LIKE ?
               OR LOWER(nickname) LIKE ?
               OR JSON_SEARCH(LOWER(stack), 'one', ?) IS NOT NULL
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(decode_row).collect()
    }

    async fn count(&self) -> Result<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        u64::try_from(total)
            .map_err(|_| StorageError::InvalidData(format!("negative record count {total}")))
    }
}
