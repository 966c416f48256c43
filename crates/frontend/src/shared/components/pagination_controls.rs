use crate::shared::data_table::{page_window, PageItem};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pages shown on each side of the current one.
const SIBLINGS: usize = 1;

/// Page selector with a compressed window of page numbers.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let items = move || page_window(current_page.get(), total_pages.get(), SIBLINGS);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                items()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=move || current_page.get() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
