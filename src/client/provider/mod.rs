pub mod access_control;
pub mod i18n;
pub mod navigation;
pub mod resource;

pub use access_control::{
    use_can, AccessControl, AccessControlProvider, CachedAccessControl, CanAnswer,
    StaticAccessControl,
};
pub use i18n::{use_translate, I18n, StaticTranslations, Translate, TranslationProvider};
pub use navigation::{use_navigation, Navigation};
pub use resource::{
    use_resource_descriptor, CurrentResource, ResolvedResource, ResourceRegistry,
};
