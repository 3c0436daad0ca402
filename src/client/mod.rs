pub mod api;
pub mod component;
pub mod config;
pub mod constant;
pub mod model;
pub mod provider;

pub use component::{CreateButton, PanelProvider, ResourceScope};
