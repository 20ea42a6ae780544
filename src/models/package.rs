//! Package model - a bundled campaign-materials product.
//!
//! Maps to the `packages` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Package {
    pub package_id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub is_active: bool,
    pub is_popular: bool,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New Package for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPackage {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub created_by: Option<i64>,
}

impl Package {
    pub async fn create(pool: &PgPool, new_package: NewPackage) -> Result<Package, sqlx::Error> {
        sqlx::query_as::<_, Package>(
            r#"
            INSERT INTO packages (name, price, description, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING package_id, name, price, description, is_active, is_popular,
                      created_by, created_at, updated_at
            "#,
        )
        .bind(new_package.name)
        .bind(new_package.price)
        .bind(new_package.description)
        .bind(new_package.created_by)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Package>, sqlx::Error> {
        sqlx::query_as::<_, Package>(
            r#"
            SELECT package_id, name, price, description, is_active, is_popular,
                   created_by, created_at, updated_at
            FROM packages
            WHERE package_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<Package>, sqlx::Error> {
        sqlx::query_as::<_, Package>(
            r#"
            SELECT package_id, name, price, description, is_active, is_popular,
                   created_by, created_at, updated_at
            FROM packages
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
    ) -> Result<Package, sqlx::Error> {
        sqlx::query_as::<_, Package>(
            r#"
            UPDATE packages
            SET is_active = $2, updated_at = NOW()
            WHERE package_id = $1
            RETURNING package_id, name, price, description, is_active, is_popular,
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
    ) -> Result<Package, sqlx::Error> {
        sqlx::query_as::<_, Package>(
            r#"
            UPDATE packages
            SET is_popular = $2, updated_at = NOW()
            WHERE package_id = $1
            RETURNING package_id, name, price, description, is_active, is_popular,
                      created_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(is_popular)
        .fetch_one(pool)
        .await
    }
}
