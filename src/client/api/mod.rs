#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod access_control;

#[cfg(feature = "web")]
pub use access_control::{check_access, HttpAccessControl};
