//! Service tests: checklist generation/progress and order assignment.

pub mod progress_properties;
