//! Polymorphic product references.
//!
//! Order line items and checklist template items point at a product through a
//! `(product_type, product_id)` pair rather than a concrete foreign key, so
//! packages and campaigns (and any future product variant) can share the cart
//! and checklist machinery. The [`Product`] enum is the tagged-union view of
//! a resolved reference, and [`ChecklistTemplated`] is the capability every
//! variant exposes to the checklist engine.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::campaign::Campaign;
use super::checklist_template_item::ChecklistTemplateItem;
use super::package::Package;

/// Discriminant for the polymorphic product reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Package,
    Campaign,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Package => "package",
            ProductType::Campaign => "campaign",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "package" => Some(ProductType::Package),
            "campaign" => Some(ProductType::Campaign),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed `(product_type, product_id)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductRef {
    pub product_type: ProductType,
    pub product_id: i64,
}

impl ProductRef {
    pub fn new(product_type: ProductType, product_id: i64) -> Self {
        Self {
            product_type,
            product_id,
        }
    }
}

impl std::fmt::Display for ProductRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.product_type, self.product_id)
    }
}

/// Capability shared by every product variant: an ordered checklist template.
///
/// The checklist engine only ever talks to products through this trait, so
/// adding a product type means implementing `product_ref` and nothing else.
#[async_trait]
pub trait ChecklistTemplated {
    fn product_ref(&self) -> ProductRef;

    /// The product's template items, ordered by position (ties by identity).
    async fn checklist_template_items(
        &self,
        pool: &PgPool,
    ) -> Result<Vec<ChecklistTemplateItem>, sqlx::Error> {
        ChecklistTemplateItem::list_for_product(pool, self.product_ref()).await
    }
}

#[async_trait]
impl ChecklistTemplated for Package {
    fn product_ref(&self) -> ProductRef {
        ProductRef::new(ProductType::Package, self.package_id)
    }
}

#[async_trait]
impl ChecklistTemplated for Campaign {
    fn product_ref(&self) -> ProductRef {
        ProductRef::new(ProductType::Campaign, self.campaign_id)
    }
}

/// A resolved product reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Product {
    Package(Package),
    Campaign(Campaign),
}

impl Product {
    /// Resolve a product reference against the store. Returns `None` when the
    /// referenced row no longer exists (deleted product).
    pub async fn resolve(
        pool: &PgPool,
        product_ref: ProductRef,
    ) -> Result<Option<Product>, sqlx::Error> {
        let product = match product_ref.product_type {
            ProductType::Package => Package::find_by_id(pool, product_ref.product_id)
                .await?
                .map(Product::Package),
            ProductType::Campaign => Campaign::find_by_id(pool, product_ref.product_id)
                .await?
                .map(Product::Campaign),
        };

        Ok(product)
    }

    pub fn name(&self) -> &str {
        match self {
            Product::Package(package) => &package.name,
            Product::Campaign(campaign) => &campaign.name,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Product::Package(package) => package.is_active,
            Product::Campaign(campaign) => campaign.is_active,
        }
    }
}

#[async_trait]
impl ChecklistTemplated for Product {
    fn product_ref(&self) -> ProductRef {
        match self {
            Product::Package(package) => package.product_ref(),
            Product::Campaign(campaign) => campaign.product_ref(),
        }
    }
}
