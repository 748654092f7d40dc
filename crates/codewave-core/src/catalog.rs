//! Static content catalog.
//!
//! Everything the landing page shows is defined here once and borrowed by
//! every front-end. Lookups are plain slice accessors; there is no loading
//! step and nothing can fail.

use crate::types::{
    ContactChannel, MilestoneRecord, ProjectCategory, ProjectLinks, ProjectMetrics, ProjectRecord,
    ServiceRecord, StatRecord, TeamMember, TechCategory, TechnologyRecord, ValueRecord,
};

pub const COMPANY_NAME: &str = "CodeWave";
pub const TAGLINE: &str = "We craft digital experiences that transform businesses";
pub const COPYRIGHT: &str =
    "© 2025 CodeWave. All rights reserved. Built with passion and cutting-edge technology.";

/// Words cycled through by the hero headline.
pub const HERO_WORDS: &[&str] = &["Innovative", "Scalable", "Premium", "Cutting-Edge"];

const NO_LINKS: ProjectLinks = ProjectLinks {
    live: None,
    source: None,
};

pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "E-Commerce Platform",
        category: ProjectCategory::Web,
        description: "Modern e-commerce solution with real-time inventory and AI recommendations",
        tags: &["Next.js", "TypeScript", "Stripe", "PostgreSQL"],
        featured: true,
        metrics: ProjectMetrics {
            views: 12_500,
            likes: 342,
            comments: 28,
        },
        date: "2024-01",
        client: "TechStore Inc.",
        links: NO_LINKS,
    },
    ProjectRecord {
        id: 2,
        title: "Fitness Tracking App",
        category: ProjectCategory::Mobile,
        description: "Comprehensive fitness app with workout plans and progress tracking",
        tags: &["React Native", "Firebase", "Redux", "Charts.js"],
        featured: true,
        metrics: ProjectMetrics {
            views: 8_900,
            likes: 256,
            comments: 19,
        },
        date: "2024-02",
        client: "FitLife Studios",
        links: NO_LINKS,
    },
    ProjectRecord {
        id: 3,
        title: "SaaS Dashboard",
        category: ProjectCategory::Web,
        description: "Analytics dashboard for business intelligence and reporting",
        tags: &["React", "D3.js", "Node.js", "MongoDB"],
        featured: false,
        metrics: ProjectMetrics {
            views: 6_700,
            likes: 189,
            comments: 15,
        },
        date: "2023-12",
        client: "DataCorp",
        links: NO_LINKS,
    },
    ProjectRecord {
        id: 4,
        title: "Social Media App",
        category: ProjectCategory::Mobile,
        description: "Connect and share with friends in a modern social platform",
        tags: &["Flutter", "Dart", "WebSocket", "AWS"],
        featured: false,
        metrics: ProjectMetrics {
            views: 15_400,
            likes: 567,
            comments: 89,
        },
        date: "2023-11",
        client: "SocialConnect",
        links: NO_LINKS,
    },
    ProjectRecord {
        id: 5,
        title: "Real Estate Platform",
        category: ProjectCategory::Web,
        description: "Property listing platform with virtual tours and mortgage calculator",
        tags: &["Vue.js", "Laravel", "MySQL", "Mapbox"],
        featured: true,
        metrics: ProjectMetrics {
            views: 9_800,
            likes: 298,
            comments: 34,
        },
        date: "2023-10",
        client: "HomeHub Realty",
        links: NO_LINKS,
    },
    ProjectRecord {
        id: 6,
        title: "Food Delivery App",
        category: ProjectCategory::Mobile,
        description: "Order food from your favorite restaurants with real-time tracking",
        tags: &["Swift", "Kotlin", "Google Maps", "Node.js"],
        featured: false,
        metrics: ProjectMetrics {
            views: 11_200,
            likes: 412,
            comments: 56,
        },
        date: "2023-09",
        client: "QuickEats",
        links: NO_LINKS,
    },
];

pub const SERVICES: &[ServiceRecord] = &[
    ServiceRecord {
        title: "Custom Website Development",
        description: "Tailored web solutions built with modern frameworks and best practices",
        features: &[
            "Responsive Design",
            "SEO Optimized",
            "Fast Performance",
            "Cross-browser Compatible",
        ],
        tech: &["React", "Next.js", "TypeScript", "Tailwind CSS"],
    },
    ServiceRecord {
        title: "Mobile Application Development",
        description: "Native and cross-platform mobile apps for iOS and Android",
        features: &[
            "Native Performance",
            "Offline Support",
            "Push Notifications",
            "App Store Ready",
        ],
        tech: &["React Native", "Flutter", "Swift", "Kotlin"],
    },
    ServiceRecord {
        title: "Full-Stack Solutions",
        description: "End-to-end development from frontend to backend and database",
        features: &[
            "API Development",
            "Database Design",
            "Authentication",
            "Real-time Features",
        ],
        tech: &["Node.js", "PostgreSQL", "MongoDB", "GraphQL"],
    },
    ServiceRecord {
        title: "UI/UX Design",
        description: "Beautiful, intuitive interfaces that delight your users",
        features: &["User Research", "Wireframing", "Prototyping", "Design Systems"],
        tech: &["Figma", "Adobe XD", "Sketch", "Framer"],
    },
    ServiceRecord {
        title: "Cloud Solutions & Deployment",
        description: "Scalable cloud infrastructure and automated deployment",
        features: &["Auto-scaling", "CDN Integration", "Load Balancing", "Monitoring"],
        tech: &["AWS", "Vercel", "Docker", "Kubernetes"],
    },
    ServiceRecord {
        title: "API Development & Integration",
        description: "Robust APIs and seamless third-party integrations",
        features: &["RESTful APIs", "GraphQL", "Webhooks", "Documentation"],
        tech: &["REST", "GraphQL", "WebSocket", "gRPC"],
    },
];

macro_rules! tech {
    ($name:literal, $level:literal, $cat:ident) => {
        TechnologyRecord {
            name: $name,
            level: $level,
            category: TechCategory::$cat,
        }
    };
}

pub const TECHNOLOGIES: &[TechnologyRecord] = &[
    tech!("React", 95, Frontend),
    tech!("Next.js", 90, Frontend),
    tech!("TypeScript", 88, Frontend),
    tech!("Tailwind CSS", 92, Frontend),
    tech!("Vue.js", 85, Frontend),
    tech!("Angular", 80, Frontend),
    tech!("Node.js", 90, Backend),
    tech!("Python", 88, Backend),
    tech!("PostgreSQL", 85, Backend),
    tech!("MongoDB", 87, Backend),
    tech!("GraphQL", 82, Backend),
    tech!("Docker", 83, Backend),
    tech!("React Native", 86, Mobile),
    tech!("Flutter", 84, Mobile),
    tech!("Swift", 82, Mobile),
    tech!("Kotlin", 80, Mobile),
    tech!("Expo", 85, Mobile),
    tech!("Firebase", 88, Mobile),
    tech!("AWS", 87, DevOps),
    tech!("Vercel", 92, DevOps),
    tech!("GitHub Actions", 85, DevOps),
    tech!("Kubernetes", 78, DevOps),
    tech!("Nginx", 83, DevOps),
    tech!("Redis", 84, DevOps),
];

pub const STATS: &[StatRecord] = &[
    StatRecord {
        label: "Projects Completed",
        value: 150,
        suffix: "+",
    },
    StatRecord {
        label: "Happy Clients",
        value: 100,
        suffix: "+",
    },
    StatRecord {
        label: "Years Experience",
        value: 8,
        suffix: "+",
    },
    StatRecord {
        label: "Team Members",
        value: 12,
        suffix: "+",
    },
];

pub const VALUES: &[ValueRecord] = &[
    ValueRecord {
        title: "Innovation",
        description:
            "We push boundaries and explore new technologies to deliver cutting-edge solutions.",
    },
    ValueRecord {
        title: "Passion",
        description: "We love what we do and pour our hearts into every project we undertake.",
    },
    ValueRecord {
        title: "Excellence",
        description: "We strive for perfection in every line of code and every pixel we design.",
    },
    ValueRecord {
        title: "Global Impact",
        description: "We build solutions that make a difference across the globe.",
    },
];

pub const MILESTONES: &[MilestoneRecord] = &[
    MilestoneRecord {
        year: "2016",
        title: "CodeWave Founded",
        description: "Started with a small team and big dreams.",
    },
    MilestoneRecord {
        year: "2018",
        title: "First Major Client",
        description: "Landed our first enterprise project.",
    },
    MilestoneRecord {
        year: "2020",
        title: "Team Expansion",
        description: "Grew to 10+ talented professionals.",
    },
    MilestoneRecord {
        year: "2022",
        title: "International Recognition",
        description: "Received awards for innovative solutions.",
    },
    MilestoneRecord {
        year: "2024",
        title: "Full-Service Agency",
        description: "Complete end-to-end digital solutions.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Khalil Alhanafi",
        role: "CEO & Lead Developer",
        bio: "Full-stack developer with 10+ years of experience in building scalable web applications.",
        skills: &["React", "Node.js", "Cloud Architecture"],
    },
    TeamMember {
        name: "Ibrahim Lotfi",
        role: "Backend Engineer",
        bio: "Specialized in building robust APIs and scalable cloud infrastructure.",
        skills: &["Python", "PostgreSQL", "AWS"],
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "codewave@gmail.com",
        href: Some("mailto:codewave@gmail.com"),
    },
    ContactChannel {
        label: "Phone",
        value: "+963 932534193",
        href: Some("tel:+963932534193"),
    },
    ContactChannel {
        label: "Office",
        value: "Damascus, Syria",
        href: None,
    },
    ContactChannel {
        label: "Business Hours",
        value: "Sat-Thu 9AM-6PM",
        href: None,
    },
];

/// Technologies in one showcase tab, in catalog order.
pub fn technologies_in(category: TechCategory) -> impl Iterator<Item = &'static TechnologyRecord> {
    TECHNOLOGIES.iter().filter(move |t| t.category == category)
}

pub fn project_by_id(id: u32) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|p| p.id == id)
}
