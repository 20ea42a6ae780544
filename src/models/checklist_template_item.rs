//! Checklist template item model.
//!
//! Administrator-defined fulfillment steps attached to a product. The
//! checklist engine reads these and snapshots them into per-order checklist
//! items at generation time; it never mutates them.
//!
//! Maps to the `checklist_template_items` table. Deletion is referentially
//! protected: a template item that has spawned checklist items cannot be
//! removed (FK `ON DELETE RESTRICT`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::product::ProductRef;
use crate::error::CartCoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ChecklistTemplateItem {
    pub template_item_id: i64,
    pub product_type: String,
    pub product_id: i64,
    /// Display name; this is what generation snapshots into the checklist
    /// item's description.
    pub name: String,
    pub description: String,
    /// Ordering key within the product's template, ascending. Ties break by
    /// `template_item_id` (insertion order).
    pub position: i32,
    pub is_optional: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New ChecklistTemplateItem for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChecklistTemplateItem {
    pub product: ProductRef,
    pub name: String,
    pub description: String,
    pub position: i32,
    pub is_optional: bool,
}

impl ChecklistTemplateItem {
    pub async fn create(
        pool: &PgPool,
        new_item: NewChecklistTemplateItem,
    ) -> Result<ChecklistTemplateItem, sqlx::Error> {
        sqlx::query_as::<_, ChecklistTemplateItem>(
            r#"
            INSERT INTO checklist_template_items
                (product_type, product_id, name, description, position, is_optional)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING template_item_id, product_type, product_id, name, description,
                      position, is_optional, created_at, updated_at
            "#,
        )
        .bind(new_item.product.product_type.as_str())
        .bind(new_item.product.product_id)
        .bind(new_item.name)
        .bind(new_item.description)
        .bind(new_item.position)
        .bind(new_item.is_optional)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: i64,
    ) -> Result<Option<ChecklistTemplateItem>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistTemplateItem>(
            r#"
            SELECT template_item_id, product_type, product_id, name, description,
                   position, is_optional, created_at, updated_at
            FROM checklist_template_items
            WHERE template_item_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// The ordered template for one product: position ascending, ties broken
    /// by creation order.
    pub async fn list_for_product(
        pool: &PgPool,
        product: ProductRef,
    ) -> Result<Vec<ChecklistTemplateItem>, sqlx::Error> {
        sqlx::query_as::<_, ChecklistTemplateItem>(
            r#"
            SELECT template_item_id, product_type, product_id, name, description,
                   position, is_optional, created_at, updated_at
            FROM checklist_template_items
            WHERE product_type = $1 AND product_id = $2
            ORDER BY position ASC, template_item_id ASC
            "#,
        )
        .bind(product.product_type.as_str())
        .bind(product.product_id)
        .fetch_all(pool)
        .await
    }

    /// Update the editable fields of a template item. Edits never propagate
    /// to checklist items generated from it.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: &str,
        description: &str,
        position: i32,
        is_optional: bool,
    ) -> Result<ChecklistTemplateItem, sqlx::Error> {
        sqlx::query_as::<_, ChecklistTemplateItem>(
            r#"
            UPDATE checklist_template_items
            SET name = $2, description = $3, position = $4, is_optional = $5,
                updated_at = NOW()
            WHERE template_item_id = $1
            RETURNING template_item_id, product_type, product_id, name, description,
                      position, is_optional, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(position)
        .bind(is_optional)
        .fetch_one(pool)
        .await
    }

    /// Delete a template item. Fails with [`CartCoreError::TemplateItemInUse`]
    /// when any generated checklist item still references it.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), CartCoreError> {
        let result = sqlx::query("DELETE FROM checklist_template_items WHERE template_item_id = $1")
            .bind(id)
            .execute(pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_error)) if db_error.code().as_deref() == Some("23503") => {
                Err(CartCoreError::TemplateItemInUse {
                    template_item_id: id,
                })
            }
            Err(e) => Err(CartCoreError::Database(e)),
        }
    }
}
