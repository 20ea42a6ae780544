//! Business services built over the data layer.

pub mod checklist_service;
pub mod order_assignment_service;

pub use checklist_service::{ChecklistError, ChecklistProgress, ChecklistService};
pub use order_assignment_service::{AssignmentError, OrderAssignmentService};
