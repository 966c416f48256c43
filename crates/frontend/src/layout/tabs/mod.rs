//! Tab management
//!
//! - `page`: TabPage wrapper that shows or hides one tab's content
//! - `registry`: tab key to view mapping
//! - `tab_labels`: tab key to title mapping

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
