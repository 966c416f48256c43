pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod data_table;
pub mod date_utils;
pub mod icons;
pub mod lookups;
pub mod modal_frame;
pub mod modal_stack;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
pub mod request_guard;
