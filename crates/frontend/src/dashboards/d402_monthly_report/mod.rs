pub mod api;
pub mod layout;
pub mod ui;
