//! Wire types shared by the admin frontend: REST resources, auth payloads,
//! report DTOs and the backend's response envelopes.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
