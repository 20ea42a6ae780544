#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Cart Core
//!
//! Order management and fulfillment core for a campaign-materials
//! storefront: product catalog (packages and campaigns), orders with
//! polymorphic line items, payment records, and staff fulfillment
//! checklists.
//!
//! ## Architecture
//!
//! The centerpiece is the **checklist engine**
//! ([`services::checklist_service`]): per-product checklist templates are
//! projected into per-order checklist instances exactly once per order, and
//! completion progress is computed with optional items excluded from the
//! percentage basis.
//!
//! ## Module Organization
//!
//! - [`models`] - Data layer, one module per table (SQLx/PostgreSQL)
//! - [`services`] - Checklist generation/progress and order assignment
//! - [`config`] - Environment-driven configuration
//! - [`constants`] - Status enums and default checklist steps
//! - [`database`] - Pool construction, migrations, health check
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cart_core::config::CartConfig;
//! use cart_core::database::DatabaseConnection;
//! use cart_core::services::ChecklistService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cart_config = CartConfig::from_env()?;
//! let db = DatabaseConnection::connect(&cart_config).await?;
//! db.run_migrations().await?;
//!
//! let checklists = ChecklistService::with_default_steps(
//!     db.pool().clone(),
//!     cart_config.default_checklist_steps.clone(),
//! );
//! # let _ = checklists;
//! # Ok(())
//! # }
//! ```
//!
//! External concerns - HTTP routing, authentication, payment-gateway
//! callbacks, file storage - live in the surrounding application. They call
//! into this crate through the services and models only.

pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::CartConfig;
pub use constants::{OrderStatus, PaymentStatus, DEFAULT_CHECKLIST_STEPS};
pub use database::DatabaseConnection;
pub use error::{CartCoreError, Result};
pub use services::{
    AssignmentError, ChecklistError, ChecklistProgress, ChecklistService, OrderAssignmentService,
};
