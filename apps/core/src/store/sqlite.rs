use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::ResponseStore;
use crate::error::AppError;
use crate::models::{NewResponse, ResponseRecord, UnknownVariant};

const CREATE_RESPONSES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS survey_responses (
        id TEXT PRIMARY KEY,
        age TEXT NOT NULL CHECK (age IN ('20-35', '35-50', '50+')),
        gender TEXT NOT NULL CHECK (gender IN ('male', 'female')),
        location TEXT NOT NULL CHECK (location IN ('urban', 'rural')),
        income TEXT NOT NULL CHECK (income IN ('<20k', '20-50k', '50-100k', '>100k')),
        original_response TEXT NOT NULL,
        translated_response TEXT NOT NULL,
        sentiment TEXT NOT NULL CHECK (sentiment IN ('positive', 'negative', 'neutral')),
        language TEXT NOT NULL CHECK (language IN ('en', 'ur')),
        created_at INTEGER NOT NULL
    )
"#;

const CREATE_CREATED_AT_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_survey_responses_created_at
    ON survey_responses (created_at)
"#;

/// Raw `survey_responses` row.
#[derive(Debug, FromRow)]
struct ResponseRow {
    id: String,
    age: String,
    gender: String,
    location: String,
    income: String,
    original_response: String,
    translated_response: String,
    sentiment: String,
    language: String,
    /// Unix milliseconds.
    created_at: i64,
}

impl TryFrom<ResponseRow> for ResponseRecord {
    type Error = sqlx::Error;

    fn try_from(row: ResponseRow) -> Result<Self, Self::Error> {
        fn decode<T: FromStr<Err = UnknownVariant>>(raw: &str) -> Result<T, sqlx::Error> {
            raw.parse().map_err(|e: UnknownVariant| sqlx::Error::Decode(Box::new(e)))
        }

        let created_at = DateTime::<Utc>::from_timestamp_millis(row.created_at).ok_or_else(|| {
            sqlx::Error::Decode(format!("created_at out of range: {}", row.created_at).into())
        })?;

        Ok(ResponseRecord {
            age_group: decode(&row.age)?,
            gender: decode(&row.gender)?,
            location: decode(&row.location)?,
            income_band: decode(&row.income)?,
            sentiment: decode(&row.sentiment)?,
            submission_language: decode(&row.language)?,
            id: row.id,
            original_text: row.original_response,
            translated_text: row.translated_response,
            created_at,
        })
    }
}

/// Durable store backed by a SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects to `database_url`, creating the file if missing, and applies the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        info!("Initializing response database at: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, applying the schema.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, AppError> {
        sqlx::query(CREATE_RESPONSES_TABLE).execute(&pool).await?;
        sqlx::query(CREATE_CREATED_AT_INDEX).execute(&pool).await?;

        info!("Response database initialized and schema applied.");
        Ok(Self { pool })
    }
}

#[async_trait]
impl ResponseStore for SqliteStore {
    async fn insert(&self, response: NewResponse) -> Result<ResponseRecord, AppError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, ResponseRow>(
            r#"
            INSERT INTO survey_responses
                (id, age, gender, location, income, original_response,
                 translated_response, sentiment, language, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, age, gender, location, income, original_response,
                      translated_response, sentiment, language, created_at
            "#,
        )
        .bind(&id)
        .bind(response.age_group.as_str())
        .bind(response.gender.as_str())
        .bind(response.location.as_str())
        .bind(response.income_band.as_str())
        .bind(&response.original_text)
        .bind(&response.translated_text)
        .bind(response.sentiment.as_str())
        .bind(response.submission_language.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Error inserting survey response: {}", e);
            e
        })?;

        debug!("Inserted survey response {}", id);
        Ok(ResponseRecord::try_from(row)?)
    }

    async fn fetch_all(&self) -> Result<Vec<ResponseRecord>, AppError> {
        let rows = sqlx::query_as::<_, ResponseRow>(
            r#"
            SELECT id, age, gender, location, income, original_response,
                   translated_response, sentiment, language, created_at
            FROM survey_responses
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error fetching survey responses: {}", e);
            e
        })?;

        let records = rows
            .into_iter()
            .map(ResponseRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
