/// Skill categories and experience timeline for the skills screen.

use super::Accent;

pub struct Skill {
    pub name: &'static str,
    /// 0-100
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    /// RPG shelf label (WEAPONS / MAGIC / SCROLLS / RELICS).
    pub label: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages & Frontend",
        label: "WEAPONS",
        description: "Core programming languages and frontend tools",
        accent: Accent::Hp,
        skills: &[
            Skill { name: "React", level: 98 },
            Skill { name: "TypeScript", level: 92 },
            Skill { name: "JavaScript", level: 95 },
            Skill { name: "HTML/CSS", level: 90 },
            Skill { name: "Next.js", level: 45 },
            Skill { name: "Tailwind CSS", level: 88 },
        ],
    },
    SkillCategory {
        title: "Backend & APIs",
        label: "MAGIC",
        description: "Server-side development and API design",
        accent: Accent::Mp,
        skills: &[
            Skill { name: "Golang", level: 95 },
            Skill { name: "Node.js", level: 45 },
            Skill { name: "REST APIs", level: 90 },
            Skill { name: "VB .NET", level: 50 },
            Skill { name: "PostgreSQL", level: 80 },
            Skill { name: "NoSQL", level: 70 },
        ],
    },
    SkillCategory {
        title: "State Management",
        label: "SCROLLS",
        description: "React state management expertise",
        accent: Accent::Heal,
        skills: &[
            Skill { name: "Redux Saga", level: 92 },
            Skill { name: "Tanstack Query", level: 85 },
            Skill { name: "Jotai", level: 75 },
            Skill { name: "Redux", level: 88 },
            Skill { name: "Git", level: 85 },
            Skill { name: "Terraform", level: 40 },
        ],
    },
    SkillCategory {
        title: "Tools & UI Libraries",
        label: "RELICS",
        description: "Development tools and UI frameworks",
        accent: Accent::Rare,
        skills: &[
            Skill { name: "Mantine", level: 82 },
            Skill { name: "shadcn/ui", level: 82 },
            Skill { name: "Bootstrap", level: 78 },
            Skill { name: "Jira", level: 85 },
            Skill { name: "GCP/AWS", level: 40 },
            Skill { name: "Accessibility", level: 72 },
        ],
    },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Full Stack Developer - Team Lead",
        company: "Hooli Software Inc",
        period: "2022 - Present",
        description: "Leading a team of developers, creating projects from scratch and helping \
other projects finish development. Building full-stack solutions with React and Golang.",
        technologies: &["React", "TypeScript", "Golang", "PostgreSQL"],
        achievements: &[
            "Led development of Zentive - field service management platform",
            "Built Vecos Locker Access Platform from scratch",
            "Promoted to Team Lead, mentoring junior developers",
        ],
    },
    Experience {
        role: "Junior Full Stack Developer",
        company: "Hooli Software",
        period: "2021 - 2022",
        description: "Worked on frontend development with React and built backend tools with \
GoLang. Also gained experience with Terraform for infrastructure.",
        technologies: &["React", "Redux Saga", "Golang", "Terraform"],
        achievements: &[
            "Built SaaSConsole user management platform",
            "Developed LoanWatch fintech calculation engine",
            "Created GrubMarket Connect audit platform",
        ],
    },
    Experience {
        role: "Intern Software Engineer",
        company: "Hooli Software",
        period: "Mar 2021 - May 2021",
        description: "Trained for 2 months on the basics of software development then started \
contributing to frontend projects.",
        technologies: &["React", "JavaScript", "HTML", "CSS"],
        achievements: &[
            "Completed intensive software development training",
            "Started contributing to production frontend code",
            "Learned team workflows with Git, Jira, and code reviews",
        ],
    },
];

/// Segments filled in a skill bar of the given width.
pub fn filled_segments(level: u8, total: usize) -> usize {
    ((level as f32 / 100.0) * total as f32).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_six_skills() {
        for cat in SKILL_CATEGORIES {
            assert_eq!(cat.skills.len(), 6, "{}", cat.label);
        }
    }

    #[test]
    fn levels_are_percentages() {
        for cat in SKILL_CATEGORIES {
            for s in cat.skills {
                assert!(s.level <= 100);
            }
        }
    }

    #[test]
    fn bar_fill_rounds_to_nearest_segment() {
        assert_eq!(filled_segments(0, 20), 0);
        assert_eq!(filled_segments(100, 20), 20);
        assert_eq!(filled_segments(50, 20), 10);
        assert_eq!(filled_segments(98, 20), 20);
        assert_eq!(filled_segments(45, 20), 9);
    }
}
