use crate::routes::Route;

pub const DISPLAY_NAME: &str = "Sadman Sakib";
pub const BRAND: &str = "< Sakib />";
pub const TAGLINE: &str =
    "Focused on providing programming excellence with modern technologies and innovative solutions.";

pub const ROLES: &[&str] = &[
    "Web Developer",
    "Frontend Engineer",
    "MERN Stack Developer",
    "Open Source Contributor",
];

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        glyph: "GH",
        href: "https://github.com/Sadman-Sakib748",
    },
    SocialLink {
        label: "LinkedIn",
        glyph: "in",
        href: "https://www.linkedin.com/in/sadman-sakib-442804372/",
    },
    SocialLink {
        label: "Twitter",
        glyph: "X",
        href: "https://x.com/Sadmansakib6163",
    },
    SocialLink {
        label: "Instagram",
        glyph: "IG",
        href: "https://www.instagram.com/sakib1223123/",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email",
        icon: "✉",
        value: "sadman.sakib34523@gmail.com",
        href: "mailto:sadman.sakib34523@gmail.com",
    },
    ContactChannel {
        title: "Phone",
        icon: "☎",
        value: "+8801703104167",
        href: "tel:+8801703104167",
    },
    ContactChannel {
        title: "Location",
        icon: "⌖",
        value: "Tangail, Dhaka, Bangladesh",
        href: "#",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Mobile Development",
            description: "Creating beautiful and functional mobile apps using Flutter and React Native",
            icon: "📱",
            route: Route::Experience {},
        },
        Service {
            title: "Web Development",
            description: "Building responsive and modern web applications with React and Node.js",
            icon: "💻",
            route: Route::Projects {},
        },
        Service {
            title: "Data Science",
            description: "Analyzing data and building ML models using Python and modern frameworks",
            icon: "📊",
            route: Route::Education {},
        },
    ]
}
