//! Data layer for the storefront core.
//!
//! One module per table, following the same conventions throughout: a
//! `FromRow` struct mirroring the schema, a `NewX` struct for creation, and
//! async accessors taking a `PgPool` (or any `PgExecutor` where inserts must
//! join a caller's transaction).

pub mod campaign;
pub mod checklist_item;
pub mod checklist_template_item;
pub mod order;
pub mod order_checklist;
pub mod order_item;
pub mod package;
pub mod payment_history;
pub mod product;

pub use campaign::{Campaign, NewCampaign};
pub use checklist_item::{ChecklistItem, NewChecklistItem};
pub use checklist_template_item::{ChecklistTemplateItem, NewChecklistTemplateItem};
pub use order::{Order, NewOrder};
pub use order_checklist::OrderChecklist;
pub use order_item::{NewOrderItem, OrderItem};
pub use package::{NewPackage, Package};
pub use payment_history::{NewPaymentHistory, PaymentHistory};
pub use product::{ChecklistTemplated, Product, ProductRef, ProductType};
