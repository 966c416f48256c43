//! Header cell that cycles a column through ascending, descending and unsorted.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     direction=Signal::derive(move || query.with(|q| q.sort_direction("name")))
//!     on_sort=Callback::new(move |_| query.update(|q| q.toggle_sort("name")))
//! />
//! ```

use crate::shared::data_table::SortDirection;
use leptos::prelude::*;
use thaw::*;

pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

pub fn sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Sort direction of this column, `None` when another column (or none) sorts
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    on_sort: Callback<()>,
) -> impl IntoView {
    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || sort_class(direction.get())>
                    {move || sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
