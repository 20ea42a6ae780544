//! Payment history model.
//!
//! Maps to the `payment_histories` table: one transaction record per order
//! with an invoice number and free-form metadata. Gateway-specific plumbing
//! (signatures, gateway order ids) lives with the gateway integration, not
//! here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::constants::{PaymentStatus, INVOICE_NUMBER_PREFIX};

/// Generate a unique invoice number with format `INV-YYYYMMDD-XXXXXXXX`
pub fn generate_invoice_number() -> String {
    let date_str = Utc::now().format("%Y%m%d");
    let unique_id = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("{INVOICE_NUMBER_PREFIX}-{date_str}-{unique_id}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PaymentHistory {
    pub payment_id: i64,
    pub order_id: i64,
    pub payment_method: String,
    pub transaction_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub status: String,
    pub payment_date: DateTime<Utc>,
    pub invoice_number: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New PaymentHistory for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPaymentHistory {
    pub order_id: i64,
    pub payment_method: String,
    pub transaction_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub payment_date: DateTime<Utc>,
    pub metadata: serde_json::Value,
}

impl PaymentHistory {
    /// Record a payment against an order, generating the invoice number.
    /// Starts in `pending` status.
    pub async fn record(
        pool: &PgPool,
        new_payment: NewPaymentHistory,
    ) -> Result<PaymentHistory, sqlx::Error> {
        sqlx::query_as::<_, PaymentHistory>(
            r#"
            INSERT INTO payment_histories
                (order_id, payment_method, transaction_id, amount, currency,
                 payment_date, invoice_number, metadata)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING payment_id, order_id, payment_method, transaction_id, amount,
                      currency, status, payment_date, invoice_number, metadata,
                      created_at, updated_at
            "#,
        )
        .bind(new_payment.order_id)
        .bind(new_payment.payment_method)
        .bind(new_payment.transaction_id)
        .bind(new_payment.amount)
        .bind(new_payment.currency)
        .bind(new_payment.payment_date)
        .bind(generate_invoice_number())
        .bind(new_payment.metadata)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_order(
        pool: &PgPool,
        order_id: i64,
    ) -> Result<Option<PaymentHistory>, sqlx::Error> {
        sqlx::query_as::<_, PaymentHistory>(
            r#"
            SELECT payment_id, order_id, payment_method, transaction_id, amount,
                   currency, status, payment_date, invoice_number, metadata,
                   created_at, updated_at
            FROM payment_histories
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_invoice_number(
        pool: &PgPool,
        invoice_number: &str,
    ) -> Result<Option<PaymentHistory>, sqlx::Error> {
        sqlx::query_as::<_, PaymentHistory>(
            r#"
            SELECT payment_id, order_id, payment_method, transaction_id, amount,
                   currency, status, payment_date, invoice_number, metadata,
                   created_at, updated_at
            FROM payment_histories
            WHERE invoice_number = $1
            "#,
        )
        .bind(invoice_number)
        .fetch_optional(pool)
        .await
    }

    pub async fn update_status(
        pool: &PgPool,
        payment_id: i64,
        status: PaymentStatus,
    ) -> Result<PaymentHistory, sqlx::Error> {
        sqlx::query_as::<_, PaymentHistory>(
            r#"
            UPDATE payment_histories
            SET status = $2, updated_at = NOW()
            WHERE payment_id = $1
            RETURNING payment_id, order_id, payment_method, transaction_id, amount,
                      currency, status, payment_date, invoice_number, metadata,
                      created_at, updated_at
            "#,
        )
        .bind(payment_id)
        .bind(status.as_str())
        .fetch_one(pool)
        .await
    }

    /// The typed view of the stored status string, when recognized.
    pub fn payment_status(&self) -> Option<PaymentStatus> {
        PaymentStatus::from_str(&self.status)
    }
}
