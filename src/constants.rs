//! # System Constants and Status Enums
//!
//! Core constants and enums that define the operational boundaries of the
//! storefront order lifecycle.
//!
//! Status values are stored as strings in the relational store; the enums
//! here provide the type-safe Rust equivalents with round-trip conversions.

use serde::{Deserialize, Serialize};

/// Prefix for generated order numbers (`EC-YYYYMMDD-XXXXXXXX`)
pub const ORDER_NUMBER_PREFIX: &str = "EC";

/// Prefix for generated invoice numbers (`INV-YYYYMMDD-XXXXXXXX`)
pub const INVOICE_NUMBER_PREFIX: &str = "INV";

/// Fallback checklist used when none of an order's products carries a
/// checklist template. Every default step is required.
///
/// Overridable through configuration (`CartConfig::default_checklist_steps`).
pub const DEFAULT_CHECKLIST_STEPS: [&str; 4] = [
    "Review order details",
    "Verify uploaded resources",
    "Prepare campaign materials",
    "Deliver to customer",
];

/// Order lifecycle states, from checkout through fulfillment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingPayment,
    PendingResources,
    ReadyForProcessing,
    Assigned,
    InProgress,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingPayment => "pending_payment",
            OrderStatus::PendingResources => "pending_resources",
            OrderStatus::ReadyForProcessing => "ready_for_processing",
            OrderStatus::Assigned => "assigned",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending_payment" => Some(OrderStatus::PendingPayment),
            "pending_resources" => Some(OrderStatus::PendingResources),
            "ready_for_processing" => Some(OrderStatus::ReadyForProcessing),
            "assigned" => Some(OrderStatus::Assigned),
            "in_progress" => Some(OrderStatus::InProgress),
            "completed" => Some(OrderStatus::Completed),
            _ => None,
        }
    }

    /// Whether an order in this state may be assigned to fulfillment staff.
    /// Re-assigning an already-assigned order is allowed; checklist
    /// generation is create-if-absent so no duplication can occur.
    pub fn is_assignable(&self) -> bool {
        matches!(self, OrderStatus::ReadyForProcessing | OrderStatus::Assigned)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment transaction states recorded against an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "completed" => Some(PaymentStatus::Completed),
            "failed" => Some(PaymentStatus::Failed),
            "refunded" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
