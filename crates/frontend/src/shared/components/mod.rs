pub mod confirm_dialog;
pub mod details_form;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;
