pub mod access;
pub mod api;
pub mod resource;
