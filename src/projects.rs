use dioxus::prelude::*;
use dioxus_router::Link;

use crate::content::projects::{filter_projects, CategoryFilter, Project, ProjectStatus, PROJECTS};
use crate::routes::Route;

const FEATURE_PREVIEW: usize = 3;

#[component]
pub fn ProjectsPage() -> Element {
    let mut selected = use_signal(CategoryFilter::default);
    let visible = filter_projects(PROJECTS, selected());

    rsx! {
        document::Title { "Projects | Sadman Sakib" }
        document::Meta { name: "description", content: "Mobile apps, web applications, and other work." }
        div { class: "page",
            div { class: "page-inner",
                header { class: "page-header",
                    div { class: "page-header-icon", aria_hidden: "true", "🚀" }
                    h1 { "Projects" }
                    p { class: "page-lead",
                        "A showcase of my work spanning mobile apps, web applications, and innovative solutions across various domains."
                    }
                }
                div { class: "filter-row", role: "toolbar", aria_label: "Filter projects by category",
                    for option in CategoryFilter::options() {
                        button {
                            key: "{option.label()}",
                            r#type: "button",
                            class: if selected() == option { "filter-button filter-button-active" } else { "filter-button" },
                            aria_pressed: "{selected() == option}",
                            onclick: move |_| selected.set(option),
                            "{option.label()}"
                        }
                    }
                }
                div { class: "project-grid",
                    for project in visible {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
                div { class: "card cta",
                    h2 { "Interested in Working Together?" }
                    p { class: "muted",
                        "I'm always open to discussing new opportunities and exciting projects. Let's create something amazing together!"
                    }
                    Link { to: Route::Contact {}, class: "button button-primary", "Get In Touch" }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let status_class = match project.status {
        ProjectStatus::Completed => "badge badge-success",
        ProjectStatus::InProgress => "badge badge-warning",
    };
    rsx! {
        article { class: "card project-card",
            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
                span { class: "{status_class} project-status", "{project.status.label()}" }
                span { class: "badge badge-accent project-category", "{project.category}" }
            }
            div { class: "project-content",
                h3 { class: "card-title", "{project.title}" }
                p { class: "muted clamp-3", "{project.description}" }
                div { class: "meta-row faint",
                    span { "📅 {project.duration}" }
                    span { "👥 {project.team}" }
                }
                div { class: "chip-row",
                    for tech in project.technologies.iter() {
                        span { class: "chip", "{tech}" }
                    }
                }
                div {
                    h4 { class: "card-subtitle", "Key Features:" }
                    ul { class: "plain-list small",
                        for feature in project.features.iter().take(FEATURE_PREVIEW) {
                            li {
                                span { class: "bullet-dot", aria_hidden: "true", "•" }
                                span { "{feature}" }
                            }
                        }
                    }
                }
                div { class: "metric-grid",
                    for (name, value) in project.metrics.iter() {
                        div { class: "metric",
                            div { class: "metric-value", "{value}" }
                            div { class: "metric-name", "{name}" }
                        }
                    }
                }
                div { class: "project-actions",
                    a {
                        href: "{project.links.live}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "button button-primary",
                        "↗ Live Demo"
                    }
                    a {
                        href: "{project.links.source}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "button button-outline",
                        "⌥ Code"
                    }
                }
            }
        }
    }
}
