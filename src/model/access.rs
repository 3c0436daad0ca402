use serde::{Deserialize, Serialize};

use crate::model::resource::ResourceDescriptor;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    List,
    Create,
    Edit,
    Show,
    Delete,
    Clone,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Show => "show",
            Action::Delete => "delete",
            Action::Clone => "clone",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CanParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// "May the current actor perform `action` on `resource`?"
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanRequest {
    pub resource: String,
    pub action: Action,
    #[serde(default)]
    pub params: CanParams,
}

impl CanRequest {
    pub fn new(resource: impl Into<String>, action: Action) -> Self {
        Self {
            resource: resource.into(),
            action,
            params: CanParams::default(),
        }
    }

    pub fn with_params(mut self, params: CanParams) -> Self {
        self.params = params;
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CanResponse {
    pub can: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CanResponse {
    pub fn allow() -> Self {
        Self {
            can: true,
            reason: None,
        }
    }

    pub fn deny(reason: Option<String>) -> Self {
        Self { can: false, reason }
    }
}
