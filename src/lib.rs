//! Resource-aware admin panel components for Dioxus.
//!
//! [`CreateButton`](client::CreateButton) links to a resource's create page and
//! consults the host's access control provider before letting the user through.

pub mod client;
pub mod model;
