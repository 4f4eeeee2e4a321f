use dioxus::prelude::*;
use dioxus_router::{use_route, Link};

use crate::content::profile::BRAND;
use crate::routes::Route;
use crate::scroll::{is_scrolled, use_scroll_offset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub to: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", to: "/" },
    NavItem { name: "Education", to: "/education" },
    NavItem { name: "Experience", to: "/experience" },
    NavItem { name: "Projects", to: "/projects" },
    NavItem { name: "Contact", to: "/contact" },
];

/// Index of the item whose path equals `current` exactly; prefixes never match.
pub fn active_index(items: &[NavItem], current: &str) -> Option<usize> {
    items.iter().position(|item| item.to == current)
}

fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} {base}-active")
    } else {
        base.to_string()
    }
}

/// Mobile menu: flips on the toggle button, collapses on any navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    last_path: String,
}

impl MenuState {
    pub fn new(path: &str) -> Self {
        Self {
            open: false,
            last_path: path.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// True when `path` differs from the last one seen.
    pub fn is_stale(&self, path: &str) -> bool {
        self.last_path != path
    }

    pub fn on_path(&mut self, path: &str) {
        if self.is_stale(path) {
            self.last_path = path.to_string();
            self.open = false;
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();
    let mut menu = use_signal(|| MenuState::new(&current_path));
    let scroll = use_scroll_offset();
    let scrolled = use_memo(move || is_scrolled(scroll.get()));

    use_effect(use_reactive((&current_path,), move |(path,)| {
        if menu.peek().is_stale(&path) {
            menu.write().on_path(&path);
        }
    }));

    let menu_open = menu.read().is_open();

    let active = active_index(NAV_ITEMS, &current_path);
    let nav_class = if scrolled() {
        "navbar navbar-scrolled"
    } else {
        "navbar"
    };

    rsx! {
        nav { class: "{nav_class}", aria_label: "Main navigation",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "navbar-brand", "{BRAND}" }
                div { class: "navbar-links",
                    for (index, item) in NAV_ITEMS.iter().enumerate() {
                        Link {
                            key: "{item.to}",
                            to: item.to.to_string(),
                            class: "{link_class(\"nav-link\", active == Some(index))}",
                            "{item.name}"
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "navbar-toggle",
                    aria_label: "Toggle navigation menu",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu.write().toggle(),
                    if menu_open { "✕" } else { "☰" }
                }
            }
            if menu_open {
                div { class: "navbar-mobile",
                    for (index, item) in NAV_ITEMS.iter().enumerate() {
                        Link {
                            key: "{item.to}",
                            to: item.to.to_string(),
                            class: "{link_class(\"mobile-link\", active == Some(index))}",
                            "{item.name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_path_is_active() {
        assert_eq!(active_index(NAV_ITEMS, "/projects"), Some(3));
        assert_eq!(active_index(NAV_ITEMS, "/"), Some(0));
    }

    #[test]
    fn prefix_and_unknown_paths_are_not_active() {
        assert_eq!(active_index(NAV_ITEMS, "/projects/extra"), None);
        assert_eq!(active_index(NAV_ITEMS, "/proj"), None);
        assert_eq!(active_index(NAV_ITEMS, "/nowhere"), None);
        assert_eq!(active_index(NAV_ITEMS, ""), None);
    }

    #[test]
    fn at_most_one_item_is_active() {
        for path in ["/", "/education", "/experience", "/projects", "/contact", "/x"] {
            let matches = NAV_ITEMS.iter().filter(|item| item.to == path).count();
            assert!(matches <= 1);
            assert_eq!(active_index(NAV_ITEMS, path).is_some(), matches == 1);
        }
    }

    #[test]
    fn menu_starts_closed_and_toggle_twice_closes_it() {
        let mut menu = MenuState::new("/");
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn navigating_closes_an_open_menu() {
        let mut menu = MenuState::new("/");
        menu.toggle();
        menu.on_path("/projects");
        assert!(!menu.is_open());
        assert!(!menu.is_stale("/projects"));
    }

    #[test]
    fn same_path_keeps_menu_open() {
        let mut menu = MenuState::new("/contact");
        menu.toggle();
        assert!(!menu.is_stale("/contact"));
        menu.on_path("/contact");
        assert!(menu.is_open());
    }

    #[test]
    fn nav_paths_resolve_to_routes() {
        for item in NAV_ITEMS {
            let route: Route = item.to.parse().unwrap_or_else(|_| panic!("{}", item.to));
            assert_eq!(route.to_string(), item.to);
        }
    }
}
