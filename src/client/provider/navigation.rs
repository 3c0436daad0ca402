use dioxus::prelude::*;

use crate::client::config::PanelConfig;

/// Builds the URLs of a resource's CRUD pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigation {
    base_path: String,
}

impl Navigation {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            base_path: config.base_path.clone(),
        }
    }

    pub fn list_url(&self, route: &str) -> String {
        self.join(&[route])
    }

    pub fn create_url(&self, route: &str) -> String {
        self.join(&[route, "create"])
    }

    pub fn edit_url(&self, route: &str, id: &str) -> String {
        self.join(&[route, "edit", id])
    }

    pub fn show_url(&self, route: &str, id: &str) -> String {
        self.join(&[route, "show", id])
    }

    /// Joins segments with exactly one slash between them, dropping empty ones
    fn join(&self, segments: &[&str]) -> String {
        let mut url = String::new();

        for segment in std::iter::once(self.base_path.as_str()).chain(segments.iter().copied()) {
            let segment = segment.trim_matches('/');
            if segment.is_empty() {
                continue;
            }
            url.push('/');
            url.push_str(segment);
        }

        if url.is_empty() {
            url.push('/');
        }
        url
    }
}

/// Navigation from the nearest [`Navigation`] context, or an unprefixed one
pub fn use_navigation() -> Navigation {
    try_use_context::<Navigation>().unwrap_or_default()
}
