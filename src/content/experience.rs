#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub employment: &'static str,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[ExperienceEntry {
    title: "MERN-Stack Developer",
    company: "softworldit.com",
    location: "Dhaka, Bangladesh",
    period: "2022 - Present",
    employment: "REMOTE",
    description: "Building and maintaining scalable full-stack web applications with modern technologies and frameworks.",
    responsibilities: &[
        "Developed and deployed full-stack applications using Next.js, Node.js, Express, and MongoDB",
        "Implemented RESTful APIs and optimized database queries with Mongoose and PostgreSQL",
        "Designed responsive and user-friendly UIs with Ant Design, Material UI, Shadcn, DaisyUI, and NextUI",
        "Integrated Redux for state management and TypeScript for type safety in large-scale projects",
        "Collaborated with cross-functional teams to define technical requirements and deliver solutions",
        "Mentored junior developers, performed code reviews, and ensured best practices",
    ],
    technologies: &[
        "JavaScript (ES6+)",
        "TypeScript",
        "Next.js",
        "Node.js",
        "Express",
        "MongoDB",
        "Mongoose",
        "PostgreSQL",
        "Redux",
        "RESTful APIs",
        "Ant Design",
        "Material UI",
        "Shadcn",
        "DaisyUI",
        "NextUI",
    ],
    achievements: &[
        "Improved API performance by 45% through query optimization",
        "Delivered 5+ full-stack applications with seamless frontend-backend integration",
        "Reduced development time by introducing reusable UI components across projects",
    ],
}];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Programming Languages",
        skills: &["JavaScript (ES6+)", "TypeScript"],
    },
    SkillGroup {
        category: "Frontend Development",
        skills: &[
            "React.js",
            "Next.js",
            "Vue.js",
            "Nuxt.js",
            "Redux",
            "Tailwind CSS",
            "Bootstrap",
            "SCSS",
            "Material UI",
            "Ant Design",
            "Next UI",
            "ShadCN",
            "Material Tailwind",
            "DaisyUI",
        ],
    },
    SkillGroup {
        category: "Backend Development",
        skills: &[
            "Node.js",
            "Express.js",
            "Nest.js",
            "MongoDB",
            "Mongoose",
            "PostgreSQL",
            "Prisma",
            "Firebase",
            "Socket.io",
            "JWT",
            "RESTful APIs",
        ],
    },
    SkillGroup {
        category: "Concepts & Architecture",
        skills: &[
            "Full Stack Development",
            "SPA (Single Page Applications)",
            "Microservices",
            "API Development",
            "Async & Concurrency",
            "Design Patterns",
            "Distributed Systems",
            "Authentication",
            "Problem Solving",
        ],
    },
    SkillGroup {
        category: "Tools & Platforms",
        skills: &[
            "Git",
            "GitHub",
            "Docker",
            "Vercel",
            "Netlify",
            "CI/CD",
            "Hosting/Deployment",
            "CPanel",
            "Jest",
            "Axios",
        ],
    },
];
