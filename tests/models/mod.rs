//! Model tests using SQLx native testing for automatic database isolation.

pub mod checklist_item;
pub mod checklist_template_item;
pub mod order;
