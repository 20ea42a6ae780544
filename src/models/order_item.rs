//! Order line item model.
//!
//! Maps to the `order_items` table. Each line item carries a polymorphic
//! product reference and a `resources_uploaded` flag tracking whether the
//! customer has supplied the materials needed to fulfill it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::product::{ProductRef, ProductType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub product_type: String,
    pub product_id: i64,
    pub quantity: i32,
    pub price: Decimal,
    pub resources_uploaded: bool,
}

/// New OrderItem for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub order_id: i64,
    pub product: ProductRef,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItem {
    pub async fn create(pool: &PgPool, new_item: NewOrderItem) -> Result<OrderItem, sqlx::Error> {
        sqlx::query_as::<_, OrderItem>(
            r#"
            INSERT INTO order_items (order_id, product_type, product_id, quantity, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING order_item_id, order_id, product_type, product_id, quantity,
                      price, resources_uploaded
            "#,
        )
        .bind(new_item.order_id)
        .bind(new_item.product.product_type.as_str())
        .bind(new_item.product.product_id)
        .bind(new_item.quantity)
        .bind(new_item.price)
        .fetch_one(pool)
        .await
    }

    /// Line items for an order, in insertion order
    pub async fn list_for_order(
        pool: &PgPool,
        order_id: i64,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_item_id, order_id, product_type, product_id, quantity,
                   price, resources_uploaded
            FROM order_items
            WHERE order_id = $1
            ORDER BY order_item_id ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(pool)
        .await
    }

    /// Line items for an order that still need resources uploaded
    pub async fn list_pending_resources(
        pool: &PgPool,
        order_id: i64,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT order_item_id, order_id, product_type, product_id, quantity,
                   price, resources_uploaded
            FROM order_items
            WHERE order_id = $1 AND resources_uploaded = FALSE
            ORDER BY order_item_id ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(pool)
        .await
    }

    pub async fn mark_resources_uploaded(
        pool: &PgPool,
        order_item_id: i64,
    ) -> Result<OrderItem, sqlx::Error> {
        sqlx::query_as::<_, OrderItem>(
            r#"
            UPDATE order_items
            SET resources_uploaded = TRUE
            WHERE order_item_id = $1
            RETURNING order_item_id, order_id, product_type, product_id, quantity,
                      price, resources_uploaded
            "#,
        )
        .bind(order_item_id)
        .fetch_one(pool)
        .await
    }

    /// The typed product reference, when the stored discriminant is known.
    /// `None` marks a line item the checklist engine must skip.
    pub fn product_ref(&self) -> Option<ProductRef> {
        ProductType::from_str(&self.product_type)
            .map(|product_type| ProductRef::new(product_type, self.product_id))
    }

    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
