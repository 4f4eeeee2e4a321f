use dioxus::prelude::*;

use crate::content::experience::{EXPERIENCE, SKILLS};

#[component]
pub fn ExperiencePage() -> Element {
    rsx! {
        document::Title { "Experience | Sadman Sakib" }
        document::Meta { name: "description", content: "Professional experience and technical skills." }
        div { class: "page",
            div { class: "page-inner",
                header { class: "page-header",
                    div { class: "page-header-icon", aria_hidden: "true", "💼" }
                    h1 { "Experience" }
                    p { class: "page-lead",
                        "My professional journey and the impact I've made in various roles across different organizations."
                    }
                }
                section { class: "timeline-section", aria_label: "Work history",
                    div { class: "timeline",
                        for (index, job) in EXPERIENCE.iter().enumerate() {
                            article { key: "{index}", class: "timeline-item", style: "--i: {index}",
                                span { class: "timeline-dot", aria_hidden: "true" }
                                div { class: "card timeline-card",
                                    h3 { class: "card-title", "{job.title}" }
                                    div { class: "meta-row",
                                        span { "💼 {job.company}" }
                                        span { "📍 {job.location}" }
                                    }
                                    div { class: "meta-row",
                                        span { "📅 {job.period}" }
                                        span { class: "badge badge-accent", "{job.employment}" }
                                    }
                                    p { class: "card-body", "{job.description}" }
                                    div { class: "three-column",
                                        div {
                                            h4 { class: "card-subtitle", "Key Responsibilities" }
                                            ul { class: "plain-list",
                                                for item in job.responsibilities.iter() {
                                                    li {
                                                        span { class: "bullet-dot", aria_hidden: "true", "•" }
                                                        span { "{item}" }
                                                    }
                                                }
                                            }
                                        }
                                        div {
                                            h4 { class: "card-subtitle", "Technologies" }
                                            div { class: "chip-row",
                                                for tech in job.technologies.iter() {
                                                    span { class: "chip", "{tech}" }
                                                }
                                            }
                                        }
                                        div {
                                            h4 { class: "card-subtitle", "Key Achievements" }
                                            ul { class: "plain-list",
                                                for item in job.achievements.iter() {
                                                    li {
                                                        span { class: "bullet-check", aria_hidden: "true", "✓" }
                                                        span { "{item}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                section { aria_label: "Technical Skills",
                    h2 { class: "section-title", "Technical Skills" }
                    div { class: "skills-grid",
                        for group in SKILLS.iter() {
                            div { class: "card",
                                h3 { class: "card-title", "{group.category}" }
                                div { class: "chip-row",
                                    for skill in group.skills.iter() {
                                        span { class: "chip", "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
