#[derive(Clone, Debug, PartialEq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub score: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub courses: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub icon: &'static str,
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "Master of Science in Computer Science",
        institution: "University of Technology",
        location: "Dhaka, Bangladesh",
        period: "2020 - 2022",
        score: "3.85/4.00",
        description: "Specialized in Machine Learning and Data Science with focus on deep learning algorithms and neural networks.",
        achievements: &["Dean's List", "Research Assistant", "Published 2 papers"],
        courses: &[
            "Advanced Algorithms",
            "Machine Learning",
            "Data Mining",
            "Computer Vision",
        ],
    },
    EducationEntry {
        degree: "Bachelor of Science in Computer Science",
        institution: "National University",
        location: "Dhaka, Bangladesh",
        period: "2016 - 2020",
        score: "3.72/4.00",
        description: "Strong foundation in computer science fundamentals with emphasis on software engineering and programming.",
        achievements: &[
            "Magna Cum Laude",
            "Programming Contest Winner",
            "Student Council Member",
        ],
        courses: &[
            "Data Structures",
            "Software Engineering",
            "Database Systems",
            "Web Development",
        ],
    },
    EducationEntry {
        degree: "Higher Secondary Certificate (HSC)",
        institution: "Dhaka College",
        location: "Dhaka, Bangladesh",
        period: "2014 - 2016",
        score: "5.00/5.00",
        description: "Science background with mathematics, physics, and chemistry as major subjects.",
        achievements: &["Board Scholarship", "Science Olympiad Winner"],
        courses: &["Mathematics", "Physics", "Chemistry", "Biology"],
    },
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "AWS Certified Solutions Architect",
        issuer: "Amazon Web Services",
        date: "2023",
        icon: "☁️",
    },
    Certification {
        name: "Google Cloud Professional Developer",
        issuer: "Google Cloud",
        date: "2023",
        icon: "🌐",
    },
    Certification {
        name: "Meta React Native Specialist",
        issuer: "Meta",
        date: "2022",
        icon: "📱",
    },
    Certification {
        name: "TensorFlow Developer Certificate",
        issuer: "TensorFlow",
        date: "2022",
        icon: "🤖",
    },
];
