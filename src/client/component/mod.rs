pub mod button;
pub mod panel;

pub use button::{Button, CreateButton, SvgIconProps};
pub use panel::{PanelProvider, ResourceScope};
