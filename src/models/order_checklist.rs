//! Order checklist model.
//!
//! Maps to the `order_checklists` table. One checklist per order, enforced by
//! a unique constraint on `order_id`; the checklist service leans on that
//! constraint to resolve concurrent generation races.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderChecklist {
    pub checklist_id: i64,
    pub order_id: i64,
    pub created_at: DateTime<Utc>,
}

impl OrderChecklist {
    /// Insert a checklist row for an order unless one already exists.
    ///
    /// Returns `None` when the unique constraint on `order_id` swallowed the
    /// insert - i.e. another request created the checklist first. Takes any
    /// executor so the caller can run it inside a transaction alongside the
    /// item inserts.
    pub async fn try_create<'e, E>(
        executor: E,
        order_id: i64,
    ) -> Result<Option<OrderChecklist>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as::<_, OrderChecklist>(
            r#"
            INSERT INTO order_checklists (order_id)
            VALUES ($1)
            ON CONFLICT (order_id) DO NOTHING
            RETURNING checklist_id, order_id, created_at
            "#,
        )
        .bind(order_id)
        .fetch_optional(executor)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<OrderChecklist>, sqlx::Error> {
        sqlx::query_as::<_, OrderChecklist>(
            r#"
            SELECT checklist_id, order_id, created_at
            FROM order_checklists
            WHERE checklist_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_order(
        pool: &PgPool,
        order_id: i64,
    ) -> Result<Option<OrderChecklist>, sqlx::Error> {
        sqlx::query_as::<_, OrderChecklist>(
            r#"
            SELECT checklist_id, order_id, created_at
            FROM order_checklists
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(pool)
        .await
    }
}
