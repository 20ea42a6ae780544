//! Checklist item model.
//!
//! Maps to the `checklist_items` table: the mutable, order-specific instance
//! of a fulfillment step. Items are snapshots taken from a product's template
//! at generation time (or from the configured default steps, in which case
//! `template_item_id` is NULL); later template edits never touch them.
//!
//! A single item is a two-state machine, `pending <-> completed`. The
//! completion stamp (`completed_at`/`completed_by`) is written only on the
//! pending -> completed edge: redundant completes keep the original stamp,
//! and reopening clears it. Toggles are last-write-wins; two staff racing on
//! the same item is accepted behavior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ChecklistItem {
    pub checklist_item_id: i64,
    pub checklist_id: i64,
    /// Back-reference to the template item this was generated from; NULL for
    /// default-checklist items.
    pub template_item_id: Option<i64>,
    pub description: String,
    /// Dense position within the checklist: `0..n-1` in generation order
    pub order_index: i32,
    pub is_optional: bool,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    /// Opaque staff identity supplied by the caller
    pub completed_by: Option<i64>,
}

/// New ChecklistItem for creation (checklist id supplied separately)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChecklistItem {
    pub template_item_id: Option<i64>,
    pub description: String,
    pub order_index: i32,
    pub is_optional: bool,
}

impl ChecklistItem {
    /// Insert one checklist item. Takes any executor so generation can insert
    /// the whole batch inside the checklist-creation transaction.
    pub async fn create<'e, E>(
        executor: E,
        checklist_id: i64,
        new_item: NewChecklistItem,
    ) -> Result<ChecklistItem, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as::<_, ChecklistItem>(
            r#"
            INSERT INTO checklist_items
                (checklist_id, template_item_id, description, order_index, is_optional)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING checklist_item_id, checklist_id, template_item_id, description,
                      order_index, is_optional, completed, completed_at, completed_by
            "#,
        )
        .bind(checklist_id)
        .bind(new_item.template_item_id)
        .bind(new_item.description)
        .bind(new_item.order_index)
        .bind(new_item.is_optional)
        .fetch_one(executor)
        .await
    }

    /// Items of a checklist in display order
    pub async fn list_for_checklist(
        pool: &PgPool,
        checklist_id: i64,
    ) -> Result<Vec<ChecklistItem>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(
            r#"
            SELECT checklist_item_id, checklist_id, template_item_id, description,
                   order_index, is_optional, completed, completed_at, completed_by
            FROM checklist_items
            WHERE checklist_id = $1
            ORDER BY order_index ASC
            "#,
        )
        .bind(checklist_id)
        .fetch_all(pool)
        .await
    }

    /// Fetch an item only if it belongs to the given checklist. External
    /// endpoints use this to reject toggles against the wrong checklist.
    pub async fn find_in_checklist(
        pool: &PgPool,
        checklist_id: i64,
        checklist_item_id: i64,
    ) -> Result<Option<ChecklistItem>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(
            r#"
            SELECT checklist_item_id, checklist_id, template_item_id, description,
                   order_index, is_optional, completed, completed_at, completed_by
            FROM checklist_items
            WHERE checklist_id = $1 AND checklist_item_id = $2
            "#,
        )
        .bind(checklist_id)
        .bind(checklist_item_id)
        .fetch_optional(pool)
        .await
    }

    /// Mark an item completed by the given staff member.
    ///
    /// Idempotent with respect to the stamp: the timestamp and staff identity
    /// are written only when the item transitions pending -> completed.
    pub async fn complete(
        pool: &PgPool,
        checklist_item_id: i64,
        staff_id: i64,
    ) -> Result<ChecklistItem, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(
            r#"
            UPDATE checklist_items
            SET completed = TRUE,
                completed_at = CASE WHEN completed THEN completed_at ELSE NOW() END,
                completed_by = CASE WHEN completed THEN completed_by ELSE $2 END
            WHERE checklist_item_id = $1
            RETURNING checklist_item_id, checklist_id, template_item_id, description,
                      order_index, is_optional, completed, completed_at, completed_by
            "#,
        )
        .bind(checklist_item_id)
        .bind(staff_id)
        .fetch_one(pool)
        .await
    }

    /// Un-check an item, clearing the completion stamp
    pub async fn reopen(
        pool: &PgPool,
        checklist_item_id: i64,
    ) -> Result<ChecklistItem, sqlx::Error> {
        sqlx::query_as::<_, ChecklistItem>(
            r#"
            UPDATE checklist_items
            SET completed = FALSE, completed_at = NULL, completed_by = NULL
            WHERE checklist_item_id = $1
            RETURNING checklist_item_id, checklist_id, template_item_id, description,
                      order_index, is_optional, completed, completed_at, completed_by
            "#,
        )
        .bind(checklist_item_id)
        .fetch_one(pool)
        .await
    }
}
