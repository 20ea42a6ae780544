//! Crate-wide error type and result alias.
//!
//! Service modules define their own narrower error enums (see
//! [`crate::services::checklist_service::ChecklistError`]); this type covers
//! model-level and configuration failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartCoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("validation error: {0}")]
    Validation(String),

    /// Template items are referentially protected: they cannot be deleted
    /// while any generated checklist item still points at them.
    #[error("checklist template item {template_item_id} is referenced and cannot be deleted")]
    TemplateItemInUse { template_item_id: i64 },
}

pub type Result<T> = std::result::Result<T, CartCoreError>;
