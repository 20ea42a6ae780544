//! # Checklist Service
//!
//! Materializes a per-order fulfillment checklist from the products'
//! checklist templates and computes weighted completion progress.
//!
//! ## Generation
//!
//! When an order becomes fulfillment-ready, [`generate_checklist_for_order`]
//! walks the order's line items, resolves each polymorphic product reference,
//! and concatenates the products' template items (each product's template is
//! a contiguous block, in line-item order). The concatenation is projected
//! into checklist items with densely reassigned indices `0..n-1`; template
//! `position` values are an ordering key, not a stored index, so two
//! independent templates still yield a dense checklist. When no product in
//! the order carries a template, the configured default steps are used
//! instead (no template back-reference, all required).
//!
//! Generation is create-if-absent: an order that already has a checklist gets
//! its existing checklist back unchanged. The unique constraint on
//! `order_checklists.order_id` is the safety net for concurrent generation;
//! losing that race is resolved locally by fetching the winner's checklist,
//! never surfaced to the caller.
//!
//! ## Progress
//!
//! [`get_checklist_progress`] is a pure read. Optional items count toward
//! `total_items`/`completed_items` only; the percentage is always
//! `completed_required / required_items`, rounded half away from zero, and
//! defined as 0 when there are no required items.
//!
//! [`generate_checklist_for_order`]: ChecklistService::generate_checklist_for_order
//! [`get_checklist_progress`]: ChecklistService::get_checklist_progress

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::config::CartConfig;
use crate::models::checklist_item::{ChecklistItem, NewChecklistItem};
use crate::models::checklist_template_item::ChecklistTemplateItem;
use crate::models::order::Order;
use crate::models::order_checklist::OrderChecklist;
use crate::models::order_item::OrderItem;
use crate::models::product::{ChecklistTemplated, Product};

/// Error types for checklist operations
#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    /// The order has no line items to build a checklist from. Surfaced to
    /// the caller; whether to block assignment is the caller's policy.
    #[error("order {order_id} has no line items to generate a checklist from")]
    NoLineItems { order_id: i64 },

    /// Lost the generation race but the winner's checklist could not be
    /// fetched afterwards. Indicates the checklist row was deleted between
    /// the conflict and the fallback read.
    #[error("checklist for order {order_id} disappeared after a concurrent generation")]
    MissingAfterConflict { order_id: i64 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Progress snapshot for a checklist.
///
/// Optional items never influence `progress_percentage`; they are visible
/// only through `total_items` and `completed_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistProgress {
    pub total_items: u32,
    pub required_items: u32,
    pub completed_items: u32,
    pub completed_required: u32,
    /// `round(100 * completed_required / required_items)`, half away from
    /// zero; 0 when `required_items` is 0.
    pub progress_percentage: u32,
}

impl ChecklistProgress {
    /// Compute progress from a checklist's current items. Total function:
    /// every input, including an empty or all-optional checklist, yields a
    /// defined percentage.
    pub fn from_items(items: &[ChecklistItem]) -> Self {
        let total_items = items.len() as u32;
        let required_items = items.iter().filter(|item| !item.is_optional).count() as u32;
        let completed_items = items.iter().filter(|item| item.completed).count() as u32;
        let completed_required = items
            .iter()
            .filter(|item| !item.is_optional && item.completed)
            .count() as u32;

        let progress_percentage = if required_items == 0 {
            0
        } else {
            (f64::from(completed_required) * 100.0 / f64::from(required_items)).round() as u32
        };

        Self {
            total_items,
            required_items,
            completed_items,
            completed_required,
            progress_percentage,
        }
    }
}

/// Service that generates per-order checklists and reports their progress
#[derive(Debug, Clone)]
pub struct ChecklistService {
    pool: PgPool,
    default_steps: Vec<String>,
}

impl ChecklistService {
    /// Create a service with the built-in default checklist steps
    pub fn new(pool: PgPool) -> Self {
        Self::with_default_steps(pool, CartConfig::default().default_checklist_steps)
    }

    /// Create a service with configured fallback steps
    pub fn with_default_steps(pool: PgPool, default_steps: Vec<String>) -> Self {
        Self {
            pool,
            default_steps,
        }
    }

    /// Create or return the order's checklist.
    ///
    /// See the module docs for the full contract. Line items whose product
    /// reference cannot be resolved are skipped with a warning; generation
    /// continues with the remaining items (degraded, not failed).
    pub async fn generate_checklist_for_order(
        &self,
        order: &Order,
    ) -> Result<OrderChecklist, ChecklistError> {
        let line_items = OrderItem::list_for_order(&self.pool, order.order_id).await?;
        if line_items.is_empty() {
            return Err(ChecklistError::NoLineItems {
                order_id: order.order_id,
            });
        }

        if let Some(existing) = OrderChecklist::find_by_order(&self.pool, order.order_id).await? {
            debug!(
                order_id = order.order_id,
                checklist_id = existing.checklist_id,
                "checklist already generated, returning existing"
            );
            return Ok(existing);
        }

        let template_items = self.collect_template_items(order, &line_items).await?;

        let new_items = if template_items.is_empty() {
            debug!(
                order_id = order.order_id,
                "no template items found, falling back to default checklist"
            );
            default_items(&self.default_steps)
        } else {
            project_template_items(&template_items)
        };

        let mut tx = self.pool.begin().await?;

        let Some(checklist) = OrderChecklist::try_create(&mut *tx, order.order_id).await? else {
            // Another request created the checklist between our existence
            // check and the insert; hand back theirs.
            tx.rollback().await?;
            let existing = OrderChecklist::find_by_order(&self.pool, order.order_id)
                .await?
                .ok_or(ChecklistError::MissingAfterConflict {
                    order_id: order.order_id,
                })?;
            debug!(
                order_id = order.order_id,
                checklist_id = existing.checklist_id,
                "concurrent generation detected, returning existing checklist"
            );
            return Ok(existing);
        };

        let item_count = new_items.len();
        for new_item in new_items {
            ChecklistItem::create(&mut *tx, checklist.checklist_id, new_item).await?;
        }

        tx.commit().await?;

        info!(
            order_id = order.order_id,
            order_number = %order.order_number,
            checklist_id = checklist.checklist_id,
            item_count = item_count,
            from_template = !template_items.is_empty(),
            "generated order checklist"
        );

        Ok(checklist)
    }

    /// Compute a progress snapshot from the checklist's current items.
    /// Read-only; safe to call at any time and repeatedly.
    pub async fn get_checklist_progress(
        &self,
        checklist: &OrderChecklist,
    ) -> Result<ChecklistProgress, ChecklistError> {
        let items = ChecklistItem::list_for_checklist(&self.pool, checklist.checklist_id).await?;
        Ok(ChecklistProgress::from_items(&items))
    }

    /// Gather template items across the order's line items, one contiguous
    /// block per product, skipping unresolvable references.
    async fn collect_template_items(
        &self,
        order: &Order,
        line_items: &[OrderItem],
    ) -> Result<Vec<ChecklistTemplateItem>, ChecklistError> {
        let mut collected = Vec::new();

        for line_item in line_items {
            let Some(product_ref) = line_item.product_ref() else {
                warn!(
                    order_id = order.order_id,
                    order_item_id = line_item.order_item_id,
                    product_type = %line_item.product_type,
                    "skipping line item with unknown product type"
                );
                continue;
            };

            match Product::resolve(&self.pool, product_ref).await? {
                Some(product) => {
                    collected.extend(product.checklist_template_items(&self.pool).await?);
                }
                None => {
                    warn!(
                        order_id = order.order_id,
                        order_item_id = line_item.order_item_id,
                        product = %product_ref,
                        "skipping line item with unresolvable product"
                    );
                }
            }
        }

        Ok(collected)
    }
}

/// Project template items into new checklist items.
///
/// Descriptions snapshot the template item's name, the optional flag is
/// copied, and indices are reassigned densely across the concatenation so the
/// checklist's `order_index` values are exactly `0..n-1` even when multiple
/// templates contribute.
fn project_template_items(template_items: &[ChecklistTemplateItem]) -> Vec<NewChecklistItem> {
    template_items
        .iter()
        .enumerate()
        .map(|(index, template_item)| NewChecklistItem {
            template_item_id: Some(template_item.template_item_id),
            description: template_item.name.clone(),
            order_index: index as i32,
            is_optional: template_item.is_optional,
        })
        .collect()
}

/// Build the fallback checklist: every step required, no template reference.
fn default_items(default_steps: &[String]) -> Vec<NewChecklistItem> {
    default_steps
        .iter()
        .enumerate()
        .map(|(index, step)| NewChecklistItem {
            template_item_id: None,
            description: step.clone(),
            order_index: index as i32,
            is_optional: false,
        })
        .collect()
}
