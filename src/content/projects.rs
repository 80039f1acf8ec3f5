/// Project ("quest") records for the projects screen.

use super::Accent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
    Fullstack,
}

pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tags: &'static [&'static str],
    pub category: Category,
    pub featured: bool,
    pub year: &'static str,
    pub role: &'static str,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub metrics: &'static [Metric],
}

pub fn category_label(c: Category) -> &'static str {
    match c {
        Category::Web => "FRONTEND",
        Category::Fullstack => "FULL STACK",
    }
}

/// Quest status badge derived from the record, never stored.
pub fn quest_status(p: &Project) -> (&'static str, Accent) {
    if p.featured {
        ("LEGENDARY", Accent::Rare)
    } else if p.year >= "2023" {
        ("ACTIVE", Accent::Gold)
    } else {
        ("COMPLETE", Accent::Heal)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "zentive",
        title: "Zentive",
        description: "An all-in-one Field Service Management Software for the green industry.",
        long_description: "Zentive is an all-in-one Field Service Management Software designed \
specifically for the green industry. It automates daily business operations for landscaping, \
lawn care, tree service, and snow removal businesses. Features job scheduling, financial \
management, customer tracking, and reporting dashboards.",
        tags: &["React", "TypeScript", "Golang", "PostgreSQL", "Tailwind"],
        category: Category::Fullstack,
        featured: true,
        year: "2025",
        role: "Mid Level Full Stack Developer",
        challenges: &[
            "Building a comprehensive job scheduling system with real-time updates",
            "Implementing financial management with invoicing and revenue tracking",
            "Creating an intuitive UI for non-technical field service workers",
        ],
        solutions: &[
            "React with TypeScript for a type-safe, maintainable frontend",
            "Golang backend with PostgreSQL for reliable data processing",
            "Tailwind CSS for rapid, responsive UI development",
        ],
        metrics: &[
            Metric { label: "Modules", value: "6+" },
            Metric { label: "Role", value: "Lead" },
            Metric { label: "Status", value: "Active" },
        ],
    },
    Project {
        id: "vecos",
        title: "Vecos Locker Platform",
        description: "A digital locker access management platform with reservation and access control.",
        long_description: "Vecos Locker Access Platform is a digital locker access management \
platform that provides secure access control and user management for locker systems. Users can \
reserve, access, and manage lockers through a web-based interface with real-time availability, \
email/SMS access codes, and admin management dashboards.",
        tags: &["React", "TypeScript", ".NET", "REST API", "Jotai"],
        category: Category::Fullstack,
        featured: true,
        year: "2024",
        role: "Solo Dev - Senior Full Stack Developer",
        challenges: &[
            "Real-time locker availability tracking across multiple locations",
            "Secure access code generation and delivery via email/SMS",
            "Building an intuitive reservation flow for end users",
        ],
        solutions: &[
            "Jotai for lightweight state management of locker states",
            ".NET microservices for access code generation and validation",
            "Responsive grid layout showing locker availability at a glance",
        ],
        metrics: &[
            Metric { label: "Client", value: "Microsoft" },
            Metric { label: "Lockers", value: "21+" },
            Metric { label: "Role", value: "Lead" },
        ],
    },
    Project {
        id: "saasconsole",
        title: "SaaSConsole",
        description: "A platform for managing groups of users and collections of SaaS applications.",
        long_description: "SaaSConsole is a platform that manages groups of users and collections \
of SaaS apps. It helps organizations manage their users and groups, assign them to multiple SaaS \
applications with common rights, and monitor activity through a centralized dashboard with \
priority-based notifications.",
        tags: &["React", "TypeScript", "Redux Saga", "REST API", "Tailwind"],
        category: Category::Fullstack,
        featured: true,
        year: "2021",
        role: "Junior Full Stack Developer",
        challenges: &[
            "Complex user/group permission management across multiple SaaS apps",
            "Building a real-time notification system with priority filtering",
            "Managing complex state across deeply nested user hierarchies",
        ],
        solutions: &[
            "Redux Saga for managing complex async flows and side effects",
            "Priority-based notification engine with filtering and search",
            "Modular component architecture for reusable permission controls",
        ],
        metrics: &[
            Metric { label: "Apps Managed", value: "Multi" },
            Metric { label: "Users", value: "Groups" },
            Metric { label: "Notifications", value: "Real-time" },
        ],
    },
    Project {
        id: "loanwatch",
        title: "LoanWatch",
        description: "A fintech platform automating Asset-Based Lending calculations for financial institutions.",
        long_description: "LoanWatch is a financial technology platform that specializes in \
Asset-Based Lending (ABL) automation. It serves as a calculation engine that automates \
ineligibles and borrowing base calculations for financial institutions, streamlining the \
lending process with secure authentication and comprehensive reporting.",
        tags: &["React", "TypeScript", "Golang", "PostgreSQL", "REST API"],
        category: Category::Fullstack,
        featured: false,
        year: "2022",
        role: "Junior Full Stack Developer",
        challenges: &[
            "Implementing complex financial calculation engines accurately",
            "Ensuring data security for sensitive financial information",
            "Building intuitive interfaces for complex lending workflows",
        ],
        solutions: &[
            "Golang backend for precise, performant financial calculations",
            "Secure authentication with session management",
            "Step-by-step wizard UI for complex borrowing base workflows",
        ],
        metrics: &[
            Metric { label: "Client", value: "JP Morgan" },
            Metric { label: "Calculations", value: "ABL" },
            Metric { label: "Sector", value: "FinTech" },
        ],
    },
    Project {
        id: "snaptoapp",
        title: "SnaptoApp",
        description: "A no-code platform enabling users to create their own PWA apps without coding.",
        long_description: "SnaptoApp is a platform that helps users create their own Progressive \
Web Apps without the need to code. Features a visual editor for customizing appearance, themes, \
navigation, colors, fonts, and images, with live preview and one-click publishing to make app \
creation accessible to everyone.",
        tags: &["React", "JavaScript", "PWA", "REST API", "CSS"],
        category: Category::Web,
        featured: false,
        year: "2025",
        role: "Team Lead - Full Stack Developer",
        challenges: &[
            "Building a visual editor that generates valid PWA configurations",
            "Implementing live preview that accurately reflects published apps",
            "Making complex app customization accessible to non-technical users",
        ],
        solutions: &[
            "Component-based visual editor with drag-and-drop sections",
            "Real-time preview rendering matching actual PWA output",
            "Guided wizard flow breaking down app creation into simple steps",
        ],
        metrics: &[
            Metric { label: "Type", value: "No-Code" },
            Metric { label: "Output", value: "PWA" },
            Metric { label: "UX", value: "Visual" },
        ],
    },
    Project {
        id: "grubmarket",
        title: "GrubMarket Connect",
        description: "A proprietary platform built specifically for the GrubMarket Group.",
        long_description: "GrubMarket Connect is a proprietary platform made specifically for the \
GrubMarket Group. It handles external auditing workflows with branch management, period tracking, \
completion percentage monitoring, and reporting tools. Built to streamline operations across \
multiple branches with actionable data insights.",
        tags: &["React", "TypeScript", "Golang", "PostgreSQL", "Tailwind"],
        category: Category::Fullstack,
        featured: false,
        year: "2023",
        role: "Junior Full Stack Developer",
        challenges: &[
            "Managing multi-branch audit data with period-based tracking",
            "Building exportable reports with completion percentage analytics",
            "Integrating with existing GrubMarket infrastructure",
        ],
        solutions: &[
            "Branch-based data partitioning for organized audit management",
            "Exportable tables with CSV and attachment downloads",
            "Period-based filtering with status tracking across branches",
        ],
        metrics: &[
            Metric { label: "Branches", value: "Multi" },
            Metric { label: "Audits", value: "Tracked" },
            Metric { label: "Reports", value: "Export" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_quests_are_legendary() {
        let zentive = PROJECTS.iter().find(|p| p.id == "zentive").unwrap();
        assert_eq!(quest_status(zentive).0, "LEGENDARY");
    }

    #[test]
    fn recent_unfeatured_quests_are_active() {
        let grubmarket = PROJECTS.iter().find(|p| p.id == "grubmarket").unwrap();
        assert_eq!(quest_status(grubmarket).0, "ACTIVE");
    }

    #[test]
    fn old_unfeatured_quests_are_complete() {
        let loanwatch = PROJECTS.iter().find(|p| p.id == "loanwatch").unwrap();
        assert_eq!(quest_status(loanwatch).0, "COMPLETE");
    }
}
