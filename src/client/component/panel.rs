use dioxus::prelude::*;

use crate::{
    client::{
        config::PanelConfig,
        provider::{AccessControl, CurrentResource, I18n, Navigation, ResourceRegistry},
    },
    model::resource::ResourceDescriptor,
};

/// Installs the resource registry, navigation, access control and translation
/// contexts for everything rendered beneath it.
#[component]
pub fn PanelProvider(
    #[props(default)] resources: Vec<ResourceDescriptor>,
    #[props(default)] config: PanelConfig,
    #[props(default)] access_control: Option<AccessControl>,
    #[props(default)] i18n: Option<I18n>,
    children: Element,
) -> Element {
    use_context_provider(|| ResourceRegistry::new(resources.clone()));
    use_context_provider(|| Navigation::new(&config));
    use_hook(|| {
        if let Some(access_control) = access_control.clone() {
            provide_context(access_control);
        }
        if let Some(i18n) = i18n.clone() {
            provide_context(i18n);
        }
    });

    rsx! {
        {children}
    }
}

/// Marks the resource a page renders so resource-aware components can omit it.
#[component]
pub fn ResourceScope(name: String, children: Element) -> Element {
    use_context_provider(|| CurrentResource(name.clone()));

    rsx! {
        {children}
    }
}
