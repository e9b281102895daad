//! Merging of database values with default templates.

mod merge_policy;

pub use merge_policy::overlay_on_templates;
