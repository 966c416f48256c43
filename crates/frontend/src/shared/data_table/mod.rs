//! Generic client-side table: search, per-column filters, sorting and a
//! page window, all computed from the full row set on every change.

pub mod component;
pub mod pagination;
pub mod query;

pub use component::DataTable;
pub use pagination::{page_window, total_pages, PageItem};
pub use query::{
    filter_options, run_query, CellValue, Column, SortDirection, SortState, TableQuery, TableView,
    ALL,
};
