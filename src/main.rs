use dioxus::prelude::*;
use dioxus_logger::tracing;

use panelkit::{
    client::{
        component::{CreateButton, PanelProvider, ResourceScope, SvgIconProps},
        config::PanelConfig,
        provider::{AccessControl, CachedAccessControl, StaticAccessControl},
    },
    model::{access::Action, resource::ResourceDescriptor},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::PostList {})]
    #[route("/posts")]
    PostList {},

    #[route("/posts/create")]
    PostCreate {},

    #[route("/categories")]
    CategoryList {},

    #[route("/categories/create")]
    CategoryCreate {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::launch(App);
}

fn resources() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor::new("posts").with_label("Posts"),
        ResourceDescriptor::new("categories").with_label("Categories"),
    ]
}

#[component]
fn App() -> Element {
    let access_control = use_hook(|| {
        AccessControl::new(CachedAccessControl::new(StaticAccessControl::default().deny(
            "categories",
            Action::Create,
            Some("Only editors can add categories"),
        )))
    });

    rsx! {
        PanelProvider {
            resources: resources(),
            config: PanelConfig::default(),
            access_control,
            Router::<Route> {}
        }
    }
}

#[component]
fn PostList() -> Element {
    let mut quick_drafts = use_signal(|| 0u32);

    rsx! {
        ResourceScope {
            name: "posts".to_string(),
            div {
                class: "p-4 flex flex-col gap-4",
                h1 { class: "text-xl font-bold", "Posts" }
                div {
                    class: "flex gap-2",
                    CreateButton {}
                    CreateButton { hide_text: true }
                    CreateButton {
                        ignore_access_control_provider: true,
                        svg_icon_props: SvgIconProps { width: 14, height: 14, ..Default::default() },
                        onclick: move |_| {
                            quick_drafts += 1;
                            tracing::info!("Quick draft #{} started", quick_drafts());
                        },
                        children: rsx! { "Quick draft" },
                    }
                }
                if quick_drafts() > 0 {
                    p { "Quick drafts started: {quick_drafts}" }
                }
                Link { to: Route::CategoryList {}, "Categories" }
            }
        }
    }
}

#[component]
fn PostCreate() -> Element {
    rsx! {
        div { class: "p-4", h1 { class: "text-xl font-bold", "New post" } }
    }
}

#[component]
fn CategoryList() -> Element {
    rsx! {
        div {
            class: "p-4 flex flex-col gap-4",
            h1 { class: "text-xl font-bold", "Categories" }
            CreateButton { resource_name_or_route_name: "categories".to_string() }
            Link { to: Route::PostList {}, "Posts" }
        }
    }
}

#[component]
fn CategoryCreate() -> Element {
    rsx! {
        div { class: "p-4", h1 { class: "text-xl font-bold", "New category" } }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "p-4", "No page at /{path}" }
    }
}
