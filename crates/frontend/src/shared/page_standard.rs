//! Page categories for tab pages.
//!
//! Every page rendered inside a tab carries an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a004_class--list"`) and a
//! `data-page-category` attribute with one of the constants below.

/// Resource table with search, filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview tiles and printable reports.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration of accounts.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// `{entity}--{category}` with both halves non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a004_class--list"));
        assert!(is_valid_page_id("d401_attendance_report--dashboard"));
        assert!(!is_valid_page_id("a004_class"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_class--"));
    }
}
