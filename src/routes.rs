use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, Router};

use crate::config::{use_runtime_config, RuntimeConfig};
use crate::contact::ContactPage;
use crate::education::EducationPage;
use crate::experience::ExperiencePage;
use crate::home::HomePage;
use crate::navigation::NavBar;
use crate::projects::ProjectsPage;
use crate::scroll::use_scroll_offset_provider;
use crate::toast::{use_toaster_provider, ToastHost};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "Sadman Sakib" }
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div { class: "boot-screen",
                    div { class: "loader-ring" }
                }
            }
        }
        Some(Ok(config)) => config,
        Some(Err(message)) => {
            tracing::warn!("runtime config unavailable, using defaults: {message}");
            RuntimeConfig::default()
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#111827" }
        ConfiguredApp { config }
    }
}

#[component]
fn ConfiguredApp(config: RuntimeConfig) -> Element {
    use_context_provider(|| config);
    rsx! { Router::<Route> {} }
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/education")]
        Education {},
        #[route("/experience")]
        Experience {},
        #[route("/projects")]
        Projects {},
        #[route("/contact")]
        Contact {},
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

/// Persistent chrome around every page: toasts, navigation, then the matched view.
#[component]
fn Shell() -> Element {
    use_scroll_offset_provider();
    use_toaster_provider();
    rsx! {
        ToastHost {}
        NavBar {}
        main { class: "shell-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { HomePage {} }
}

#[component]
fn Education() -> Element {
    rsx! { EducationPage {} }
}

#[component]
fn Experience() -> Element {
    rsx! { ExperiencePage {} }
}

#[component]
fn Projects() -> Element {
    rsx! { ProjectsPage {} }
}

#[component]
fn Contact() -> Element {
    rsx! { ContactPage {} }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found | Sadman Sakib" }
        div { class: "page",
            div { class: "page-inner not-found",
                div { class: "page-header-icon", aria_hidden: "true", "🧭" }
                h1 { "404" }
                p { class: "page-lead", "Nothing lives at /{path}." }
                Link { to: Route::Home {}, class: "button button-primary", "Back to Home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn resolve(path: &str) -> Route {
        Route::from_str(path).unwrap_or_else(|_| panic!("{path} did not resolve"))
    }

    #[test]
    fn registered_paths_resolve_to_their_pages() {
        assert_eq!(resolve("/"), Route::Home {});
        assert_eq!(resolve("/education"), Route::Education {});
        assert_eq!(resolve("/experience"), Route::Experience {});
        assert_eq!(resolve("/projects"), Route::Projects {});
        assert_eq!(resolve("/contact"), Route::Contact {});
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        for path in ["/experienc", "/projects/42", "/blog", "/contact/form/extra"] {
            assert!(
                matches!(resolve(path), Route::NotFound { .. }),
                "{path} should be not-found"
            );
        }
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Projects {}.to_string(), "/projects");
        assert_eq!(Route::Home {}.to_string(), "/");
    }
}
