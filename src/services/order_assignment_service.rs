//! # Order Assignment Service
//!
//! Assigns fulfillment-ready orders to staff and kicks off checklist
//! generation. Checklist generation is create-if-absent, so re-assigning an
//! order to different staff cannot duplicate its checklist.

use sqlx::PgPool;
use tracing::info;

use crate::models::order::Order;
use crate::models::order_checklist::OrderChecklist;

use super::checklist_service::{ChecklistError, ChecklistService};

/// Error types for order assignment
#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("order {order_id} not found")]
    OrderNotFound { order_id: i64 },

    #[error("order {order_id} is not ready for assignment (status: {status})")]
    NotAssignable { order_id: i64, status: String },

    #[error(transparent)]
    Checklist(#[from] ChecklistError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Service that moves orders into staff-assigned fulfillment
#[derive(Debug, Clone)]
pub struct OrderAssignmentService {
    pool: PgPool,
    checklists: ChecklistService,
}

impl OrderAssignmentService {
    pub fn new(pool: PgPool) -> Self {
        let checklists = ChecklistService::new(pool.clone());
        Self { pool, checklists }
    }

    /// Use an explicitly configured checklist service (e.g. custom default
    /// steps) for generation.
    pub fn with_checklist_service(pool: PgPool, checklists: ChecklistService) -> Self {
        Self { pool, checklists }
    }

    /// Assign an order to a staff member and ensure its checklist exists.
    ///
    /// The order must be `ready_for_processing` (or already assigned, for
    /// re-assignment). A `NoLineItems` failure from generation propagates to
    /// the caller, leaving the assignment in place; the caller decides
    /// whether that blocks the workflow.
    pub async fn assign_order_to_staff(
        &self,
        order_id: i64,
        staff_id: i64,
    ) -> Result<(Order, OrderChecklist), AssignmentError> {
        let order = Order::find_by_id(&self.pool, order_id)
            .await?
            .ok_or(AssignmentError::OrderNotFound { order_id })?;

        let assignable = order
            .order_status()
            .is_some_and(|status| status.is_assignable());
        if !assignable {
            return Err(AssignmentError::NotAssignable {
                order_id,
                status: order.status.clone(),
            });
        }

        let order = Order::assign_to(&self.pool, order_id, staff_id).await?;
        let checklist = self.checklists.generate_checklist_for_order(&order).await?;

        info!(
            order_id = order.order_id,
            order_number = %order.order_number,
            staff_id = staff_id,
            checklist_id = checklist.checklist_id,
            "assigned order to staff"
        );

        Ok((order, checklist))
    }
}
