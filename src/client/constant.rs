/// Marker value of the `data-testid` attribute on the create button
pub const CREATE_BUTTON_TEST_ID: &str = "create-button";

pub const CREATE_LABEL_KEY: &str = "buttons.create";
pub const CREATE_LABEL_FALLBACK: &str = "Create";

pub const NOT_ACCESS_TITLE_KEY: &str = "buttons.notAccessTitle";
pub const NOT_ACCESS_TITLE_FALLBACK: &str = "You don't have permission to access";
