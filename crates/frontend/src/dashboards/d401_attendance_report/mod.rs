pub mod api;
pub mod sheet;
pub mod ui;
