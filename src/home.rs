use dioxus::prelude::*;
use dioxus_router::Link;

use crate::config::RuntimeConfig;
use crate::content::profile::{services, DISPLAY_NAME, ROLES, SOCIAL_LINKS, TAGLINE};
use crate::routes::Route;
use crate::scroll::{hero_parallax, use_scroll_offset, viewport_height};
use crate::typewriter::Typewriter;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const LOADING_MS: u32 = 1800;
const LOADING_LABEL: &str = "Loading Sakib Portfolio";
const NBSP: &str = "\u{a0}";

struct FloatingDot {
    top: &'static str,
    left: &'static str,
    tone: &'static str,
}

const FLOATING_DOTS: &[FloatingDot] = &[
    FloatingDot { top: "30%", left: "25%", tone: "dot-pink" },
    FloatingDot { top: "55%", left: "70%", tone: "dot-purple" },
    FloatingDot { top: "40%", left: "60%", tone: "dot-pink" },
    FloatingDot { top: "65%", left: "35%", tone: "dot-purple" },
    FloatingDot { top: "50%", left: "15%", tone: "dot-pink" },
];

/// One span per character so CSS can stagger the reveal by `--i`.
#[component]
fn AnimatedText(text: String, class: String) -> Element {
    rsx! {
        span { class: "{class}", aria_label: "{text}",
            for (index, ch) in text.chars().enumerate() {
                span {
                    class: "animated-letter",
                    style: "--i: {index}",
                    aria_hidden: "true",
                    if ch == ' ' { "{NBSP}" } else { "{ch}" }
                }
            }
        }
    }
}

#[component]
fn LoadingOverlay() -> Element {
    rsx! {
        div { class: "loading-overlay", role: "status",
            div { class: "loader-ring" }
            AnimatedText { text: LOADING_LABEL.to_string(), class: "loader-title".to_string() }
            p { class: "loader-subtitle", "Preparing Experience..." }
        }
    }
}

#[component]
pub fn HomePage() -> Element {
    let config = use_context::<RuntimeConfig>();
    let scroll = use_scroll_offset();
    let hero_style = use_memo(move || hero_parallax(scroll.get(), viewport_height()).style());

    #[cfg(target_arch = "wasm32")]
    let is_loading = {
        let mut is_loading = use_signal(|| true);
        use_future(move || async move {
            gloo_timers::future::TimeoutFuture::new(LOADING_MS).await;
            is_loading.set(false);
        });
        is_loading
    };
    #[cfg(not(target_arch = "wasm32"))]
    let is_loading = use_signal(|| false);

    let roles: Vec<String> = ROLES.iter().map(|role| role.to_string()).collect();
    let content_class = if is_loading() {
        "hero-content is-hidden"
    } else {
        "hero-content"
    };

    rsx! {
        document::Title { "Sadman Sakib | Portfolio" }
        document::Meta { name: "description", content: "{TAGLINE}" }
        div { class: "home",
            if is_loading() {
                LoadingOverlay {}
            }
            section { class: "{content_class}", style: "{hero_style}",
                div { class: "hero-grid",
                    div { class: "hero-copy",
                        h1 {
                            AnimatedText { text: DISPLAY_NAME.to_string(), class: "gradient-name".to_string() }
                        }
                        p { class: "hero-role",
                            "I'm "
                            span { class: "accent",
                                Typewriter {
                                    words: roles,
                                    type_speed: 85,
                                    delete_speed: 45,
                                    delay_between: 1400,
                                }
                            }
                            span { class: "type-cursor", aria_hidden: "true" }
                        }
                        p { class: "hero-tagline", "{TAGLINE}" }
                        div { class: "social-row",
                            for link in SOCIAL_LINKS.iter() {
                                a {
                                    href: "{link.href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "social-link",
                                    aria_label: "{link.label}",
                                    "{link.glyph}"
                                }
                            }
                        }
                        div { class: "hero-actions",
                            a {
                                href: "{config.resume_url}",
                                download: "true",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "button button-primary",
                                span { aria_hidden: "true", "⬇" }
                                span { "Download Resume" }
                            }
                            Link { to: Route::Projects {}, class: "button button-outline", "View Projects" }
                        }
                    }
                    div { class: "hero-visual",
                        div { class: "profile-float",
                            div { class: "profile-halo",
                                div { class: "profile-frame",
                                    img {
                                        src: "{config.profile_image_url}",
                                        alt: "Portrait of {DISPLAY_NAME}",
                                        class: "profile-image",
                                    }
                                }
                            }
                        }
                        for (index, dot) in FLOATING_DOTS.iter().enumerate() {
                            span {
                                class: "floating-dot {dot.tone}",
                                style: "top: {dot.top}; left: {dot.left}; --i: {index};",
                                aria_hidden: "true",
                            }
                        }
                    }
                }
            }
            if !is_loading() {
                div { class: "scroll-indicator", aria_hidden: "true",
                    span { "Scroll to explore" }
                    span { class: "scroll-arrow", "↓" }
                }
            }
            section { class: "services", aria_label: "What I do",
                h2 { class: "section-title", "What I Do" }
                div { class: "services-grid",
                    for service in services() {
                        Link { to: service.route.clone(), class: "card service-card",
                            div { class: "service-icon", aria_hidden: "true", "{service.icon}" }
                            h3 { "{service.title}" }
                            p { class: "muted", "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}
