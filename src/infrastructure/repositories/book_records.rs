use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{query_as, query_scalar};

use crate::domain::RepositoryError;
use crate::domain::ids::BookRecordId;
use crate::domain::records::{BookRecord, StoredBookRecord};
use crate::domain::repositories::BookRecordRepository;
use crate::infrastructure::database::DatabasePool;
use crate::infrastructure::repositories::db_err;

const COLUMNS: &str = "id, title, author, type, genres, year_read, rating, goodreads_rating, source, cover_url, num_ratings, num_editions, created_at";

const INSERT: &str = r"
    INSERT INTO books_read_ratings
        (title, author, type, genres, year_read, rating, goodreads_rating, source, cover_url, num_ratings, num_editions, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

#[derive(Clone)]
pub struct SqlBookRecordRepository {
    pool: DatabasePool,
}

impl SqlBookRecordRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    fn to_domain(row: BookRecordRow) -> StoredBookRecord {
        StoredBookRecord {
            id: BookRecordId::new(row.id),
            record: BookRecord {
                title: row.title,
                author: row.author,
                book_type: row.book_type,
                genre: row.genres,
                year_read: row.year_read,
                rating: row.rating,
                goodreads_rating: row.goodreads_rating,
                source: row.source,
                cover_url: row.cover_url,
                num_ratings: row.num_ratings,
                num_editions: row.num_editions,
            },
            created_at: row.created_at,
        }
    }
}

/// Bind a record's columns onto an insert statement, in [`INSERT`] order.
macro_rules! bind_record {
    ($query:expr, $record:expr, $created_at:expr) => {
        $query
            .bind($record.title)
            .bind($record.author)
            .bind($record.book_type)
            .bind($record.genre)
            .bind($record.year_read)
            .bind($record.rating)
            .bind($record.goodreads_rating)
            .bind($record.source)
            .bind($record.cover_url)
            .bind($record.num_ratings)
            .bind($record.num_editions)
            .bind($created_at)
    };
}

#[async_trait]
impl BookRecordRepository for SqlBookRecordRepository {
    async fn insert(&self, record: BookRecord) -> Result<StoredBookRecord, RepositoryError> {
        let query = format!("{INSERT} RETURNING {COLUMNS}");
        let mut conn = self.pool.acquire().await.map_err(db_err)?;

        let row = bind_record!(query_as::<_, BookRecordRow>(&query), record, Utc::now())
            .fetch_one(&mut *conn)
            .await
            .map_err(db_err)?;

        Ok(Self::to_domain(row))
    }

    async fn get(&self, id: BookRecordId) -> Result<StoredBookRecord, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM books_read_ratings WHERE id = ?");
        let mut conn = self.pool.acquire().await.map_err(db_err)?;

        let row = query_as::<_, BookRecordRow>(&query)
            .bind(id.into_inner())
            .fetch_optional(&mut *conn)
            .await
            .map_err(db_err)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(Self::to_domain(row))
    }

    async fn list(&self) -> Result<Vec<StoredBookRecord>, RepositoryError> {
        // Undated books sort after every dated one.
        let query = format!(
            "SELECT {COLUMNS} FROM books_read_ratings
             ORDER BY year_read IS NULL, year_read DESC, title ASC, id ASC"
        );
        let mut conn = self.pool.acquire().await.map_err(db_err)?;

        let rows = query_as::<_, BookRecordRow>(&query)
            .fetch_all(&mut *conn)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(Self::to_domain).collect())
    }

    async fn delete(&self, id: BookRecordId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(db_err)?;

        let result = sqlx::query("DELETE FROM books_read_ratings WHERE id = ?")
            .bind(id.into_inner())
            .execute(&mut *conn)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(db_err)?;

        let count: i64 = query_scalar("SELECT COUNT(*) FROM books_read_ratings")
            .fetch_one(&mut *conn)
            .await
            .map_err(db_err)?;

        Ok(count as u64)
    }

    async fn replace_all(&self, records: Vec<BookRecord>) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_err)?;

        sqlx::query("DELETE FROM books_read_ratings")
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;

        let now = Utc::now();
        let mut stored = 0_u64;
        for record in records {
            bind_record!(sqlx::query(INSERT), record, now)
                .execute(&mut *tx)
                .await
                .map_err(db_err)?;
            stored += 1;
        }

        tx.commit().await.map_err(db_err)?;
        Ok(stored)
    }
}

#[derive(sqlx::FromRow)]
struct BookRecordRow {
    id: i64,
    title: String,
    author: String,
    #[sqlx(rename = "type")]
    book_type: Option<String>,
    genres: Option<String>,
    year_read: Option<i32>,
    rating: Option<f64>,
    goodreads_rating: Option<f64>,
    source: Option<String>,
    cover_url: Option<String>,
    num_ratings: Option<i64>,
    num_editions: Option<i64>,
    created_at: DateTime<Utc>,
}
