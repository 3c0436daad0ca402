use serde::{Deserialize, Serialize};

/// A named entity type managed by the host application, along with the route
/// its CRUD pages live under.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ResourceDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: None,
            label: None,
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Route segment used for URL building, falling back to the resource name
    pub fn route_or_name(&self) -> &str {
        self.route.as_deref().unwrap_or(&self.name)
    }

    /// Whether this descriptor is addressed by `name_or_route`
    pub fn matches(&self, name_or_route: &str) -> bool {
        let trimmed = name_or_route.trim_matches('/');
        self.name == name_or_route
            || self
                .route
                .as_deref()
                .is_some_and(|route| route.trim_matches('/') == trimmed)
    }
}
