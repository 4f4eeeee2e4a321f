use dioxus::prelude::*;

use crate::content::education::{CERTIFICATIONS, EDUCATION};

#[component]
pub fn EducationPage() -> Element {
    rsx! {
        document::Title { "Education | Sadman Sakib" }
        document::Meta { name: "description", content: "Academic background and certifications." }
        div { class: "page",
            div { class: "page-inner",
                header { class: "page-header",
                    div { class: "page-header-icon", aria_hidden: "true", "🎓" }
                    h1 { "Education" }
                    p { class: "page-lead",
                        "My academic journey and continuous learning path in technology and computer science."
                    }
                }
                section { class: "timeline-section", aria_label: "Academic Background",
                    h2 { class: "section-title", "Academic Background" }
                    div { class: "timeline",
                        for (index, entry) in EDUCATION.iter().enumerate() {
                            article { key: "{index}", class: "timeline-item", style: "--i: {index}",
                                span { class: "timeline-dot", aria_hidden: "true" }
                                div { class: "card timeline-card",
                                    h3 { class: "card-title", "{entry.degree}" }
                                    div { class: "meta-row",
                                        span { "🏛 {entry.institution}" }
                                        span { "📍 {entry.location}" }
                                    }
                                    div { class: "meta-row",
                                        span { "📅 {entry.period}" }
                                        span { "🏅 GPA: {entry.score}" }
                                    }
                                    p { class: "card-body", "{entry.description}" }
                                    div { class: "two-column",
                                        div {
                                            h4 { class: "card-subtitle", "Achievements" }
                                            ul { class: "plain-list",
                                                for achievement in entry.achievements.iter() {
                                                    li {
                                                        span { class: "bullet-star", aria_hidden: "true", "⭐" }
                                                        span { "{achievement}" }
                                                    }
                                                }
                                            }
                                        }
                                        div {
                                            h4 { class: "card-subtitle", "Key Courses" }
                                            div { class: "chip-row",
                                                for course in entry.courses.iter() {
                                                    span { class: "chip", "{course}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                section { aria_label: "Certifications",
                    h2 { class: "section-title", "Certifications" }
                    div { class: "cert-grid",
                        for cert in CERTIFICATIONS.iter() {
                            div { class: "card cert-card",
                                div { class: "cert-icon", aria_hidden: "true", "{cert.icon}" }
                                h3 { class: "card-title", "{cert.name}" }
                                p { class: "muted", "{cert.issuer}" }
                                p { class: "faint", "{cert.date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
