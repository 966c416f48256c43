//! Common types and traits for all REST resources

pub mod resource;

pub use resource::{RecordId, Resource};
