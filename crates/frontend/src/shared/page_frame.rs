//! Root wrapper for every page rendered inside a tab.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_branch--list" category=PAGE_CAT_LIST>
//!         <PageHeader title="Branches">...</PageHeader>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

fn frame_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a006_play_kid--list"`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("Page id '{}' is not in entity--category form", page_id);
    }

    view! {
        <div
            id=page_id
            class=frame_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(frame_class(PAGE_CAT_DASHBOARD, "report"), "page page--dashboard report");
        assert_eq!(frame_class(PAGE_CAT_SYSTEM, ""), "page page--system");
    }
}
