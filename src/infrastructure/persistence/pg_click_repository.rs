//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, DailyClicks};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    url_id: i64,
    clicked_at: DateTime<Utc>,
    ip: String,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click::new(row.id, row.url_id, row.clicked_at, row.ip)
    }
}

#[derive(sqlx::FromRow)]
struct DailyRow {
    day: NaiveDate,
    count: i64,
}

/// PostgreSQL repository for click events and aggregations.
///
/// Day bucketing uses `date_trunc('day', ...)`, so boundaries follow the
/// database session time zone.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (url_id, ip)
            VALUES ($1, $2)
            RETURNING id, url_id, clicked_at, ip
            "#,
        )
        .bind(new_click.url_id)
        .bind(&new_click.ip)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_for_url(&self, url_id: i64) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*)::bigint FROM clicks WHERE url_id = $1")
                .bind(url_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn recent_ips(&self, url_id: i64, limit: i64) -> Result<Vec<String>, AppError> {
        let ips: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT ip
            FROM clicks
            WHERE url_id = $1
            ORDER BY clicked_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(url_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(ips)
    }

    async fn daily_counts(&self, url_id: i64) -> Result<Vec<DailyClicks>, AppError> {
        let rows = sqlx::query_as::<_, DailyRow>(
            r#"
            SELECT date_trunc('day', clicked_at)::date AS day, COUNT(*)::bigint AS count
            FROM clicks
            WHERE url_id = $1
            GROUP BY day
            ORDER BY day DESC
            "#,
        )
        .bind(url_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DailyClicks {
                day: r.day,
                count: r.count,
            })
            .collect())
    }

    async fn list_for_urls(&self, url_ids: &[i64]) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, url_id, clicked_at, ip
            FROM clicks
            WHERE url_id = ANY($1)
            ORDER BY clicked_at DESC, id DESC
            "#,
        )
        .bind(url_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }
}
