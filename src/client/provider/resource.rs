use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::model::resource::ResourceDescriptor;

/// Every resource the host application registered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceRegistry {
    resources: Vec<ResourceDescriptor>,
}

impl ResourceRegistry {
    pub fn new(resources: Vec<ResourceDescriptor>) -> Self {
        Self { resources }
    }

    /// Find a resource by its name or its route
    pub fn find(&self, name_or_route: &str) -> Option<&ResourceDescriptor> {
        self.resources
            .iter()
            .find(|resource| resource.matches(name_or_route))
    }

    /// Like [`ResourceRegistry::find`], but unknown identifiers resolve to an
    /// ad-hoc resource whose name and route are the identifier itself.
    pub fn resolve(&self, name_or_route: &str) -> ResourceDescriptor {
        self.find(name_or_route).cloned().unwrap_or_else(|| {
            ResourceDescriptor::new(name_or_route).with_route(name_or_route)
        })
    }
}

/// The resource a page is rendering, provided by the page for the components
/// beneath it.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentResource(pub String);

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedResource {
    pub resource: ResourceDescriptor,
    pub resource_name: String,
}

/// Resolution order: explicit identifier, then the page's current resource.
pub fn resolve_resource(
    registry: &ResourceRegistry,
    current: Option<&CurrentResource>,
    name_or_route: Option<&str>,
) -> ResolvedResource {
    let identifier = name_or_route.or(current.map(|current| current.0.as_str()));

    let resource = match identifier {
        Some(identifier) => registry.resolve(identifier),
        None => ResourceDescriptor::new(""),
    };

    ResolvedResource {
        resource_name: resource.name.clone(),
        resource,
    }
}

pub fn use_resource_descriptor(name_or_route: Option<String>) -> ResolvedResource {
    let registry = try_use_context::<ResourceRegistry>().unwrap_or_default();
    let current = try_use_context::<CurrentResource>();

    let resolved = resolve_resource(&registry, current.as_ref(), name_or_route.as_deref());

    let unresolved = resolved.resource_name.is_empty();
    use_hook(move || {
        if unresolved {
            tracing::warn!("No resource given and no current resource in context");
        }
    });

    resolved
}

#[cfg(test)]
mod test {
    use super::*;

    fn registry() -> ResourceRegistry {
        ResourceRegistry::new(vec![
            ResourceDescriptor::new("posts").with_label("Blog posts"),
            ResourceDescriptor::new("categories").with_route("blog/categories"),
        ])
    }

    #[test]
    fn resolves_by_name() {
        let resolved = resolve_resource(&registry(), None, Some("posts"));

        assert_eq!(resolved.resource_name, "posts");
        assert_eq!(resolved.resource.label.as_deref(), Some("Blog posts"));
    }

    #[test]
    fn resolves_by_route() {
        let resolved = resolve_resource(&registry(), None, Some("/blog/categories"));

        assert_eq!(resolved.resource_name, "categories");
        assert_eq!(resolved.resource.route_or_name(), "blog/categories");
    }

    #[test]
    fn override_wins_over_current_resource() {
        let current = CurrentResource("posts".to_string());

        let resolved = resolve_resource(&registry(), Some(&current), Some("categories"));

        assert_eq!(resolved.resource_name, "categories");
    }

    #[test]
    fn falls_back_to_current_resource() {
        let current = CurrentResource("posts".to_string());

        let resolved = resolve_resource(&registry(), Some(&current), None);

        assert_eq!(resolved.resource_name, "posts");
    }

    #[test]
    fn nothing_to_resolve_yields_unnamed_resource() {
        let resolved = resolve_resource(&registry(), None, None);

        assert_eq!(resolved.resource_name, "");
        assert_eq!(resolved.resource.route, None);
    }

    #[test]
    fn unknown_identifier_becomes_its_own_route() {
        let resolved = resolve_resource(&registry(), None, Some("users"));

        assert_eq!(resolved.resource.name, "users");
        assert_eq!(resolved.resource.route.as_deref(), Some("users"));
    }
}
