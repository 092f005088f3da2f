//! Word store
//!
//! Thin wrapper over a SQLite pool. Every operation is one SQL statement;
//! there are no transactions and concurrent writers to the same row race
//! (last write wins).

pub mod schema;

use std::str::FromStr;
use std::time::Duration;

use learn_words_core::{filter_by_tag, Tags, Word, WordDraft};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid database url: {0}")]
    Config(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

const SELECT_WORDS: &str = r#"SELECT "id", "english", "finnish", "swedish", "tags" FROM "words""#;

#[derive(Clone)]
pub struct WordStore {
    pool: SqlitePool,
}

impl WordStore {
    /// Opens the database at `url` and creates the schema if needed.
    ///
    /// An in-memory URL gets a single connection that is never recycled,
    /// since every SQLite memory connection is its own database.
    pub async fn open(url: &str) -> StoreResult<Self> {
        let in_memory = is_memory_url(url);

        let mut options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Config(e.to_string()))?
            .create_if_missing(true);
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(30));
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        schema::apply(&pool).await?;

        tracing::info!(in_memory, "word store opened");
        Ok(Self { pool })
    }

    pub async fn in_memory() -> StoreResult<Self> {
        Self::open("sqlite::memory:").await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Every word, ascending by id.
    pub async fn list_all(&self) -> StoreResult<Vec<Word>> {
        let rows = sqlx::query(&format!(r#"{SELECT_WORDS} ORDER BY "id""#))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_word).collect()
    }

    /// Words whose whole `tags` column equals `tag`. A word tagged
    /// `"animals, farm"` is not returned for `"animals"`.
    pub async fn list_by_tag(&self, tag: &str) -> StoreResult<Vec<Word>> {
        let rows = sqlx::query(&format!(r#"{SELECT_WORDS} WHERE "tags" = ?1 ORDER BY "id""#))
            .bind(tag)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(map_word).collect()
    }

    /// Words carrying `tag` as one of their comma-separated labels.
    pub async fn list_tagged(&self, tag: &str) -> StoreResult<Vec<Word>> {
        let words = self.list_all().await?;
        Ok(filter_by_tag(&words, tag))
    }

    pub async fn add(&self, draft: &WordDraft) -> StoreResult<Word> {
        let result = sqlx::query(
            r#"INSERT INTO "words" ("english", "finnish", "swedish", "tags") VALUES (?1, ?2, ?3, ?4)"#,
        )
        .bind(&draft.english)
        .bind(&draft.finnish)
        .bind(&draft.swedish)
        .bind(draft.tags.as_str())
        .execute(&self.pool)
        .await?;

        Ok(draft.clone().with_id(result.last_insert_rowid()))
    }

    /// Overwrites all four fields. Returns `false` when no row has `id`.
    pub async fn update(&self, id: i64, draft: &WordDraft) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"UPDATE "words" SET "english" = ?1, "finnish" = ?2, "swedish" = ?3, "tags" = ?4 WHERE "id" = ?5"#,
        )
        .bind(&draft.english)
        .bind(&draft.finnish)
        .bind(&draft.swedish)
        .bind(draft.tags.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when no row has `id`.
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM "words" WHERE "id" = ?1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM "words""#)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("word store closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn map_word(row: &SqliteRow) -> StoreResult<Word> {
    let tags: Option<String> = row.try_get("tags")?;
    Ok(Word {
        id: row.try_get("id")?,
        english: row.try_get("english")?,
        finnish: row.try_get("finnish")?,
        swedish: row.try_get("swedish")?,
        tags: Tags::from(tags),
    })
}
