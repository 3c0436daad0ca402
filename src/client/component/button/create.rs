use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaSquarePlus, Icon};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::button::primitive::Button,
        constant::{
            CREATE_BUTTON_TEST_ID, CREATE_LABEL_FALLBACK, CREATE_LABEL_KEY,
            NOT_ACCESS_TITLE_FALLBACK, NOT_ACCESS_TITLE_KEY,
        },
        model::query::QueryState,
        provider::{
            use_can, use_navigation, use_resource_descriptor, use_translate, ResolvedResource,
            Translate,
        },
    },
    model::access::{Action, CanParams, CanRequest, CanResponse},
};

/// Sizing and styling forwarded to the button's icon.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgIconProps {
    pub width: u32,
    pub height: u32,
    pub fill: String,
    pub class: String,
}

impl Default for SvgIconProps {
    fn default() -> Self {
        Self {
            width: 18,
            height: 18,
            fill: "currentColor".to_string(),
            class: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ButtonLabel {
    /// Only the icon, no text
    IconOnly,
    /// Caller supplied children
    Custom,
    Text(String),
}

/// Everything the create button shows for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateButtonView {
    pub disabled: bool,
    pub title: String,
    pub show_left_icon: bool,
    pub label: ButtonLabel,
}

impl CreateButtonView {
    pub fn resolve(
        can: &QueryState<CanResponse>,
        hide_text: bool,
        has_children: bool,
        translate: &Translate,
    ) -> Self {
        let label = if hide_text {
            ButtonLabel::IconOnly
        } else if has_children {
            ButtonLabel::Custom
        } else {
            ButtonLabel::Text(translate.t(CREATE_LABEL_KEY, CREATE_LABEL_FALLBACK))
        };

        Self {
            disabled: is_denied(can),
            title: disabled_title(can, translate),
            show_left_icon: !hide_text,
            label,
        }
    }
}

/// Only an explicit `can: false` disables; pending, skipped and failed checks don't.
pub fn is_denied(can: &QueryState<CanResponse>) -> bool {
    can.map(|response| !response.can).unwrap_or(false)
}

pub fn disabled_title(can: &QueryState<CanResponse>, translate: &Translate) -> String {
    match can.data() {
        Some(CanResponse {
            can: false,
            reason: Some(reason),
        }) => reason.clone(),
        Some(CanResponse { can: false, .. }) => {
            translate.t(NOT_ACCESS_TITLE_KEY, NOT_ACCESS_TITLE_FALLBACK)
        }
        _ => String::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Let the link push the create route
    Navigate,
    /// Swallow the click
    Suppress,
    /// Hand the event to the caller's handler instead of navigating
    Delegate,
}

pub fn click_action(disabled: bool, has_handler: bool) -> ClickAction {
    if disabled {
        ClickAction::Suppress
    } else if has_handler {
        ClickAction::Delegate
    } else {
        ClickAction::Navigate
    }
}

/// Link to the create page of a resource, disabled when the access control
/// provider denies `create`.
#[component]
pub fn CreateButton(
    /// Resource name or route, defaults to the page's current resource
    #[props(default)]
    resource_name_or_route_name: Option<String>,
    /// Show only the icon
    #[props(default)]
    hide_text: bool,
    /// Skip the permission check entirely
    #[props(default)]
    ignore_access_control_provider: bool,
    #[props(default)] svg_icon_props: Option<SvgIconProps>,
    /// Replaces navigation when set
    #[props(default)]
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] children: Option<Element>,
    #[props(extends = GlobalAttributes, extends = button)] attributes: Vec<Attribute>,
) -> Element {
    let ResolvedResource {
        resource,
        resource_name,
    } = use_resource_descriptor(resource_name_or_route_name);
    let navigation = use_navigation();
    let translate = use_translate();

    let create_url = navigation.create_url(resource.route_or_name());

    let request = CanRequest::new(resource_name, Action::Create).with_params(CanParams {
        resource: Some(resource),
        id: None,
    });
    let can = use_can(request, !ignore_access_control_provider);

    let view = CreateButtonView::resolve(&can, hide_text, children.is_some(), &translate);
    let icon = svg_icon_props.unwrap_or_default();
    let disabled = view.disabled;

    let left_icon = view
        .show_left_icon
        .then(|| rsx! { CreateIcon { icon: icon.clone() } });
    let label = match &view.label {
        ButtonLabel::IconOnly => rsx! { CreateIcon { icon: icon.clone() } },
        ButtonLabel::Custom => children.unwrap_or_else(|| rsx! {}),
        ButtonLabel::Text(text) => rsx! { "{text}" },
    };

    rsx! {
        Link {
            to: create_url,
            onclick_only: disabled || onclick.is_some(),
            onclick: move |evt: MouseEvent| match click_action(disabled, onclick.is_some()) {
                ClickAction::Navigate => {}
                ClickAction::Suppress => evt.prevent_default(),
                ClickAction::Delegate => {
                    evt.prevent_default();
                    if let Some(handler) = onclick {
                        tracing::debug!("Create button click handled by caller");
                        handler.call(evt);
                    }
                }
            },
            style: "text-decoration: none",
            Button {
                disabled,
                title: view.title.clone(),
                class: "min-w-0".to_string(),
                test_id: CREATE_BUTTON_TEST_ID,
                left_icon,
                attributes,
                {label}
            }
        }
    }
}

#[component]
fn CreateIcon(icon: SvgIconProps) -> Element {
    rsx! {
        Icon {
            width: icon.width,
            height: icon.height,
            fill: icon.fill.clone(),
            class: icon.class.clone(),
            icon: FaSquarePlus
        }
    }
}
