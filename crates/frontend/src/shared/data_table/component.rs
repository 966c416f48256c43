use super::query::{filter_options, run_query, Column, TableQuery, ALL};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use serde::Serialize;
use thaw::*;

/// Generic list table.
///
/// Owns its interaction state (search, filters, sort, page); the caller only
/// provides rows and the column schema. Row actions render when the matching
/// callback is supplied.
#[component]
pub fn DataTable<T>(
    #[prop(into)]
    rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(optional)]
    on_edit: Option<Callback<T>>,
    #[prop(optional)]
    on_delete: Option<Callback<T>>,
    #[prop(optional, into)]
    search_placeholder: Option<String>,
) -> impl IntoView
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let query = RwSignal::new(TableQuery::new(config().page_size));
    let search = RwSignal::new(String::new());
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let span = columns.len() + usize::from(has_actions);

    let filter_columns: Vec<(&'static str, &'static str)> = columns
        .iter()
        .filter(|c| c.filterable)
        .map(|c| (c.key, c.label))
        .collect();
    let columns = StoredValue::new(columns);

    Effect::new(move |_| {
        let text = search.get();
        if query.with_untracked(|q| q.search != text) {
            query.update(|q| q.set_search(text));
        }
    });

    let table = Signal::derive(move || {
        let q = query.get();
        rows.with(|rows| columns.with_value(|cols| run_query(rows, cols, &q)))
    });

    let options_for = move |key: &'static str| {
        rows.with(|rows| {
            columns.with_value(|cols| {
                cols.iter()
                    .find(|c| c.key == key)
                    .map(|c| filter_options(rows, c))
                    .unwrap_or_default()
            })
        })
    };

    let filters_view = filter_columns
        .into_iter()
        .map(|(key, label)| {
            let options = Signal::derive(move || options_for(key));
            // a selection that is no longer offered shows as "all"
            let selected = Signal::derive(move || {
                let current = query.with(|q| q.filter_value(key).to_string());
                if options.with(|o| o.contains(&current)) {
                    current
                } else {
                    ALL.to_string()
                }
            });
            view! {
                <label class="data-table__filter">
                    <span class="data-table__filter-label">{label}</span>
                    <select
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            query.update(|q| q.set_filter(key, &value));
                        }
                        prop:value=move || selected.get()
                    >
                        <option value=ALL selected=move || selected.get() == ALL>
                            {format!("All {}", label)}
                        </option>
                        {move || {
                            options
                                .get()
                                .into_iter()
                                .map(|opt| {
                                    let is_selected = {
                                        let opt = opt.clone();
                                        move || selected.get() == opt
                                    };
                                    view! {
                                        <option value=opt.clone() selected=is_selected>
                                            {opt.clone()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
            }
        })
        .collect_view();

    let header_view = columns.with_value(|cols| {
        cols.iter()
            .map(|col| {
                let key = col.key;
                let label = col.label;
                if col.sortable {
                    view! {
                        <SortableHeaderCell
                            label=label
                            direction=Signal::derive(move || query.with(|q| q.sort_direction(key)))
                            on_sort=Callback::new(move |_| query.update(|q| q.toggle_sort(key)))
                        />
                    }
                    .into_any()
                } else {
                    view! { <TableHeaderCell>{label}</TableHeaderCell> }.into_any()
                }
            })
            .collect_view()
    });

    let body_view = move || {
        if loading.get() {
            return view! {
                <TableRow>
                    <TableCell attr:colspan=span.to_string()>
                        <div class="data-table__placeholder"><Spinner /></div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        let data = table.get();
        if data.rows.is_empty() {
            return view! {
                <TableRow>
                    <TableCell attr:colspan=span.to_string()>
                        <div class="data-table__placeholder">"No data"</div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        data.rows
            .into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|c| c.value(&row).display())
                        .collect::<Vec<_>>()
                });
                let actions = has_actions.then(|| {
                    let edit = on_edit.map(|cb| {
                        let row = row.clone();
                        view! {
                            <button
                                class="data-table__action"
                                title="Edit"
                                on:click=move |_| cb.run(row.clone())
                            >
                                {icon("edit")}
                            </button>
                        }
                    });
                    let remove = on_delete.map(|cb| {
                        let row = row.clone();
                        view! {
                            <button
                                class="data-table__action data-table__action--danger"
                                title="Delete"
                                on:click=move |_| cb.run(row.clone())
                            >
                                {icon("trash")}
                            </button>
                        }
                    });
                    view! {
                        <TableCell>
                            <div class="data-table__actions">{edit}{remove}</div>
                        </TableCell>
                    }
                });
                view! {
                    <TableRow>
                        {cells
                            .into_iter()
                            .map(|text| view! {
                                <TableCell>
                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                </TableCell>
                            })
                            .collect_view()}
                        {actions}
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    let placeholder = search_placeholder.unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <div class="data-table__search">
                    {icon("search")}
                    <Input value=search placeholder=placeholder />
                </div>
                <div class="data-table__filters">{filters_view}</div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {header_view}
                            {has_actions.then(|| view! {
                                <TableHeaderCell attr:style="width: 96px;">"Actions"</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body_view}</TableBody>
                </Table>
            </div>

            <div class="data-table__footer">
                <span class="data-table__summary">{move || table.with(|t| t.summary())}</span>
                <PaginationControls
                    current_page=Signal::derive(move || table.with(|t| t.page))
                    total_pages=Signal::derive(move || table.with(|t| t.total_pages))
                    on_page_change=Callback::new(move |page| query.update(|q| q.set_page(page)))
                />
            </div>
        </div>
    }
}
