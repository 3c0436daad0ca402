use dioxus::prelude::*;

/// Themed button. Extra attributes are spread onto the `button` element
/// after the themed ones. Clicks bubble to the enclosing element.
#[component]
pub fn Button(
    #[props(default)] disabled: bool,
    #[props(default)] title: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] test_id: Option<&'static str>,
    #[props(default)] left_icon: Option<Element>,
    #[props(default)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class = match &class {
        Some(extra) => format!("btn btn-primary inline-flex items-center gap-2 {extra}"),
        None => "btn btn-primary inline-flex items-center gap-2".to_string(),
    };
    let title = title.filter(|title| !title.is_empty());

    rsx! {
        button {
            class,
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            "data-testid": test_id,
            ..attributes,
            if let Some(icon) = left_icon {
                {icon}
            }
            {children}
        }
    }
}
