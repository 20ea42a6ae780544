//! Campaign model - a per-unit campaign service (e.g. priced "per day").
//!
//! Maps to the `campaigns` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Campaign {
    pub campaign_id: i64,
    pub name: String,
    pub price: Decimal,
    /// Pricing unit, e.g. "per day" or "per event"
    pub unit: String,
    pub description: String,
    pub is_active: bool,
    pub is_popular: bool,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New Campaign for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    pub price: Decimal,
    pub unit: String,
    pub description: String,
    pub created_by: Option<i64>,
}

impl Campaign {
    pub async fn create(pool: &PgPool, new_campaign: NewCampaign) -> Result<Campaign, sqlx::Error> {
        sqlx::query_as::<_, Campaign>(
            r#"
            INSERT INTO campaigns (name, price, unit, description, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING campaign_id, name, price, unit, description, is_active, is_popular,
                      created_by, created_at, updated_at
            "#,
        )
        .bind(new_campaign.name)
        .bind(new_campaign.price)
        .bind(new_campaign.unit)
        .bind(new_campaign.description)
        .bind(new_campaign.created_by)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Campaign>, sqlx::Error> {
        sqlx::query_as::<_, Campaign>(
            r#"
            SELECT campaign_id, name, price, unit, description, is_active, is_popular,
                   created_by, created_at, updated_at
            FROM campaigns
            WHERE campaign_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Campaign>, sqlx::Error> {
        sqlx::query_as::<_, Campaign>(
            r#"
            SELECT campaign_id, name, price, unit, description, is_active, is_popular,
                   created_by, created_at, updated_at
            FROM campaigns
            WHERE is_active = TRUE
            ORDER BY name ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn set_active(
        pool: &PgPool,
        id: i64,
        is_active: bool,
    ) -> Result<Campaign, sqlx::Error> {
        sqlx::query_as::<_, Campaign>(
            r#"
            UPDATE campaigns
            SET is_active = $2, updated_at = NOW()
            WHERE campaign_id = $1
            RETURNING campaign_id, name, price, unit, description, is_active, is_popular,
                      created_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(is_active)
        .fetch_one(pool)
        .await
    }

    pub async fn set_popular(
        pool: &PgPool,
        id: i64,
        is_popular: bool,
    ) -> Result<Campaign, sqlx::Error> {
        sqlx::query_as::<_, Campaign>(
            r#"
            UPDATE campaigns
            SET is_popular = $2, updated_at = NOW()
            WHERE campaign_id = $1
            RETURNING campaign_id, name, price, unit, description, is_active, is_popular,
                      created_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(is_popular)
        .fetch_one(pool)
        .await
    }
}
