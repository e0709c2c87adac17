use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::VideoRepository;
use crate::models::{Person, Video, VideoInput};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS videos (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(100) NOT NULL,
        description VARCHAR(200) NOT NULL DEFAULT '',
        url TEXT NOT NULL,
        author_first_name TEXT NOT NULL,
        author_last_name TEXT NOT NULL,
        author_age INTEGER NOT NULL,
        author_email TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const COLUMNS: &str = "id, title, description, url, author_first_name, author_last_name, \
                       author_age, author_email, created_at, updated_at";

#[derive(Debug, FromRow)]
struct VideoRow {
    id: i64,
    title: String,
    description: String,
    url: String,
    author_first_name: String,
    author_last_name: String,
    author_age: i32,
    author_email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            url: row.url,
            author: Person {
                first_name: row.author_first_name,
                last_name: row.author_last_name,
                age: row.author_age,
                email: row.author_email,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Postgres-backed video store.
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `videos` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn save(&self, input: VideoInput) -> Result<Video, sqlx::Error> {
        let sql = format!(
            r#"
            INSERT INTO videos (
                title, description, url,
                author_first_name, author_last_name, author_age, author_email
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, VideoRow>(&sql)
            .bind(input.title)
            .bind(input.description)
            .bind(input.url)
            .bind(input.author.first_name)
            .bind(input.author.last_name)
            .bind(input.author.age)
            .bind(input.author.email)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("Inserted video {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, id: i64, input: VideoInput) -> Result<Option<Video>, sqlx::Error> {
        let sql = format!(
            r#"
            UPDATE videos
            SET title = $1, description = $2, url = $3,
                author_first_name = $4, author_last_name = $5,
                author_age = $6, author_email = $7, updated_at = NOW()
            WHERE id = $8
            RETURNING {COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, VideoRow>(&sql)
            .bind(input.title)
            .bind(input.description)
            .bind(input.url)
            .bind(input.author.first_name)
            .bind(input.author.last_name)
            .bind(input.author.age)
            .bind(input.author.email)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Video::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_all(&self) -> Result<Vec<Video>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM videos ORDER BY id");
        let rows = sqlx::query_as::<_, VideoRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Video::from).collect())
    }
}
