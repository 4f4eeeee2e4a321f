use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    MobileApp,
    WebApp,
    SaasPlatform,
    Blockchain,
    Iot,
    Education,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 6] = [
        ProjectCategory::MobileApp,
        ProjectCategory::WebApp,
        ProjectCategory::SaasPlatform,
        ProjectCategory::Blockchain,
        ProjectCategory::Iot,
        ProjectCategory::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::MobileApp => "Mobile App",
            ProjectCategory::WebApp => "Web App",
            ProjectCategory::SaasPlatform => "SaaS Platform",
            ProjectCategory::Blockchain => "Blockchain",
            ProjectCategory::Iot => "IoT",
            ProjectCategory::Education => "Education",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter button state; `All` is the implicit union of every category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Buttons in display order, `All` first.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectLinks {
    pub live: &'static str,
    pub source: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub duration: &'static str,
    pub team: &'static str,
    pub features: &'static [&'static str],
    /// Display-only; kept in layout order.
    pub metrics: &'static [(&'static str, &'static str)],
    pub links: ProjectLinks,
}

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const NO_LINKS: ProjectLinks = ProjectLinks {
    live: "#",
    source: "#",
};

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Mobile App",
        description: "A full-featured e-commerce mobile application built with Flutter and Firebase, featuring real-time inventory, payment integration, and user analytics.",
        image: PLACEHOLDER_IMAGE,
        technologies: &["Flutter", "Firebase", "Stripe", "Node.js", "MongoDB"],
        category: ProjectCategory::MobileApp,
        status: ProjectStatus::Completed,
        duration: "4 months",
        team: "5 developers",
        features: &[
            "Real-time inventory management",
            "Secure payment processing",
            "Push notifications",
            "Analytics dashboard",
            "Multi-language support",
        ],
        metrics: &[("downloads", "10K+"), ("rating", "4.8/5"), ("users", "5K+ active")],
        links: NO_LINKS,
    },
    Project {
        title: "AI-Powered Analytics Dashboard",
        description: "A comprehensive analytics dashboard with machine learning capabilities for business intelligence and data visualization.",
        image: PLACEHOLDER_IMAGE,
        technologies: &["React", "Python", "TensorFlow", "D3.js", "PostgreSQL"],
        category: ProjectCategory::WebApp,
        status: ProjectStatus::Completed,
        duration: "6 months",
        team: "3 developers",
        features: &[
            "Predictive analytics",
            "Interactive data visualization",
            "Real-time data processing",
            "Custom report generation",
            "API integrations",
        ],
        metrics: &[
            ("accuracy", "94%"),
            ("performance", "2x faster"),
            ("users", "500+ companies"),
        ],
        links: NO_LINKS,
    },
    Project {
        title: "Social Media Management Tool",
        description: "A comprehensive social media management platform for scheduling posts, analyzing engagement, and managing multiple accounts.",
        image: PLACEHOLDER_IMAGE,
        technologies: &["Next.js", "Express.js", "Redis", "AWS", "React Native"],
        category: ProjectCategory::SaasPlatform,
        status: ProjectStatus::InProgress,
        duration: "8 months",
        team: "7 developers",
        features: &[
            "Multi-platform posting",
            "Engagement analytics",
            "Content calendar",
            "Team collaboration",
            "Automated responses",
        ],
        metrics: &[
            ("posts", "1M+ scheduled"),
            ("accounts", "50K+ managed"),
            ("engagement", "+150%"),
        ],
        links: NO_LINKS,
    },
    Project {
        title: "Blockchain Voting System",
        description: "A secure and transparent voting system built on blockchain technology ensuring vote integrity and anonymity.",
        image: PLACEHOLDER_IMAGE,
        technologies: &["Solidity", "Web3.js", "React", "Ethereum", "IPFS"],
        category: ProjectCategory::Blockchain,
        status: ProjectStatus::Completed,
        duration: "5 months",
        team: "4 developers",
        features: &[
            "Immutable vote records",
            "Anonymous voting",
            "Real-time results",
            "Smart contract validation",
            "Audit trail",
        ],
        metrics: &[
            ("votes", "100K+ cast"),
            ("security", "Zero breaches"),
            ("transparency", "100%"),
        ],
        links: NO_LINKS,
    },
    Project {
        title: "IoT Home Automation",
        description: "Smart home automation system with mobile app control, voice commands, and energy monitoring capabilities.",
        image: PLACEHOLDER_IMAGE,
        technologies: &["React Native", "Arduino", "Raspberry Pi", "MQTT", "Firebase"],
        category: ProjectCategory::Iot,
        status: ProjectStatus::Completed,
        duration: "3 months",
        team: "2 developers",
        features: &[
            "Voice control integration",
            "Energy monitoring",
            "Automated scheduling",
            "Security alerts",
            "Remote access",
        ],
        metrics: &[
            ("devices", "50+ supported"),
            ("energy", "30% savings"),
            ("response", "<100ms"),
        ],
        links: NO_LINKS,
    },
    Project {
        title: "Learning Management System",
        description: "A comprehensive LMS platform for online education with video streaming, assessments, and progress tracking.",
        image: PLACEHOLDER_IMAGE,
        technologies: &["Vue.js", "Django", "PostgreSQL", "Redis", "AWS S3"],
        category: ProjectCategory::Education,
        status: ProjectStatus::Completed,
        duration: "7 months",
        team: "6 developers",
        features: &[
            "Video streaming",
            "Interactive assessments",
            "Progress tracking",
            "Discussion forums",
            "Certificate generation",
        ],
        metrics: &[
            ("students", "10K+ enrolled"),
            ("courses", "500+ available"),
            ("completion", "85% rate"),
        ],
        links: NO_LINKS,
    },
];

pub fn filter_projects(projects: &[Project], filter: CategoryFilter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|project| project.title).collect()
    }

    #[test]
    fn single_category_keeps_only_its_projects() {
        let filtered = filter_projects(PROJECTS, CategoryFilter::Only(ProjectCategory::Iot));
        assert_eq!(titles(&filtered), vec!["IoT Home Automation"]);
        assert!(filtered
            .iter()
            .all(|project| project.category == ProjectCategory::Iot));
    }

    #[test]
    fn all_restores_full_list_in_order() {
        let _ = filter_projects(PROJECTS, CategoryFilter::Only(ProjectCategory::Iot));
        let all = filter_projects(PROJECTS, CategoryFilter::All);
        let expected: Vec<&'static str> = PROJECTS.iter().map(|project| project.title).collect();
        assert_eq!(titles(&all), expected);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let projects = [
            Project {
                title: "first",
                ..PROJECTS[4].clone()
            },
            PROJECTS[0].clone(),
            Project {
                title: "second",
                ..PROJECTS[4].clone()
            },
        ];
        let filtered = filter_projects(&projects, CategoryFilter::Only(ProjectCategory::Iot));
        assert_eq!(titles(&filtered), vec!["first", "second"]);
    }

    #[test]
    fn every_category_is_reachable_from_a_filter_button() {
        let options: Vec<CategoryFilter> = CategoryFilter::options().collect();
        assert_eq!(options.first(), Some(&CategoryFilter::All));
        for project in PROJECTS {
            assert!(options.contains(&CategoryFilter::Only(project.category)));
        }
        let labels: Vec<&str> = options.iter().map(|option| option.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Mobile App", "Web App", "SaaS Platform", "Blockchain", "IoT", "Education"]
        );
    }
}
