//! Order model.
//!
//! Maps to the `orders` table. Orders move through the lifecycle defined by
//! [`OrderStatus`](crate::constants::OrderStatus): payment, resource
//! collection, then staff-assigned fulfillment.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::order_item::OrderItem;
use crate::constants::{OrderStatus, ORDER_NUMBER_PREFIX};

/// Generate a unique order number with format `EC-YYYYMMDD-XXXXXXXX`
pub fn generate_order_number() -> String {
    let date_str = Utc::now().format("%Y%m%d");
    let unique_id = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("{ORDER_NUMBER_PREFIX}-{date_str}-{unique_id}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i64,
    /// Opaque customer identity supplied by the (external) auth layer
    pub user_id: i64,
    pub order_number: String,
    pub total_amount: Decimal,
    pub status: String,
    /// Staff member fulfilling the order, once assigned
    pub assigned_to: Option<i64>,
    pub payment_completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New Order for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub user_id: i64,
    pub total_amount: Decimal,
}

impl Order {
    pub async fn create(pool: &PgPool, new_order: NewOrder) -> Result<Order, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id, order_number, total_amount)
            VALUES ($1, $2, $3)
            RETURNING order_id, user_id, order_number, total_amount, status,
                      assigned_to, payment_completed_at, created_at, updated_at
            "#,
        )
        .bind(new_order.user_id)
        .bind(generate_order_number())
        .bind(new_order.total_amount)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, user_id, order_number, total_amount, status,
                   assigned_to, payment_completed_at, created_at, updated_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_order_number(
        pool: &PgPool,
        order_number: &str,
    ) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, user_id, order_number, total_amount, status,
                   assigned_to, payment_completed_at, created_at, updated_at
            FROM orders
            WHERE order_number = $1
            "#,
        )
        .bind(order_number)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_for_user(pool: &PgPool, user_id: i64) -> Result<Vec<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT order_id, user_id, order_number, total_amount, status,
                   assigned_to, payment_completed_at, created_at, updated_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update_status(
        pool: &PgPool,
        id: i64,
        status: OrderStatus,
    ) -> Result<Order, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $2, updated_at = NOW()
            WHERE order_id = $1
            RETURNING order_id, user_id, order_number, total_amount, status,
                      assigned_to, payment_completed_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_one(pool)
        .await
    }

    /// Record successful payment: stamps `payment_completed_at` and moves the
    /// order on to resource collection.
    pub async fn mark_payment_completed(pool: &PgPool, id: i64) -> Result<Order, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $2, payment_completed_at = NOW(), updated_at = NOW()
            WHERE order_id = $1
            RETURNING order_id, user_id, order_number, total_amount, status,
                      assigned_to, payment_completed_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(OrderStatus::PendingResources.as_str())
        .fetch_one(pool)
        .await
    }

    /// Assign the order to a staff member and mark it assigned.
    pub async fn assign_to(pool: &PgPool, id: i64, staff_id: i64) -> Result<Order, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET assigned_to = $2, status = $3, updated_at = NOW()
            WHERE order_id = $1
            RETURNING order_id, user_id, order_number, total_amount, status,
                      assigned_to, payment_completed_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(staff_id)
        .bind(OrderStatus::Assigned.as_str())
        .fetch_one(pool)
        .await
    }

    /// The typed view of the stored status string, when recognized.
    pub fn order_status(&self) -> Option<OrderStatus> {
        OrderStatus::from_str(&self.status)
    }

    /// Number of line items in the order
    pub async fn total_line_items(&self, pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM order_items WHERE order_id = $1")
                .bind(self.order_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Whether every line item has its resources uploaded
    pub async fn all_resources_uploaded(&self, pool: &PgPool) -> Result<bool, sqlx::Error> {
        let (pending,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM order_items WHERE order_id = $1 AND resources_uploaded = FALSE",
        )
        .bind(self.order_id)
        .fetch_one(pool)
        .await?;

        Ok(pending == 0)
    }

    /// Resource upload progress as an integer percentage.
    ///
    /// An order with no items reports 100 (nothing left to upload); the
    /// division truncates rather than rounds.
    pub async fn resource_upload_progress(&self, pool: &PgPool) -> Result<i32, sqlx::Error> {
        let (total, uploaded): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*),
                   COUNT(CASE WHEN resources_uploaded THEN 1 END)
            FROM order_items
            WHERE order_id = $1
            "#,
        )
        .bind(self.order_id)
        .fetch_one(pool)
        .await?;

        if total == 0 {
            return Ok(100);
        }

        Ok((uploaded * 100 / total) as i32)
    }

    /// Line items that still need resources
    pub async fn pending_resource_items(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        OrderItem::list_pending_resources(pool, self.order_id).await
    }
}
