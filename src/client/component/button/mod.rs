pub mod create;
pub mod primitive;


pub use create::{CreateButton, SvgIconProps};
pub use primitive::Button;
