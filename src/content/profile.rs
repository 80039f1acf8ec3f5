/// Identity, hero copy, character sheet data and boot sequence text.

use super::Accent;

pub const SITE_TITLE: &str = "XANDER.DEV";
pub const HERO_NAME: &str = "XANDER";
pub const HERO_CLASS: &str = "FULL-STACK BATTLEMAGE";
pub const HERO_LEVEL: u32 = 26;
pub const HI_SCORE: &str = "99999";

/// Cycling typewriter subtitles on the hero screen.
pub const SUBTITLES: &[&str] = &[
    "FULL-STACK SOFTWARE ENGINEER",
    "FRONTEND ARCHITECT",
    "GOLANG BACKEND MAGE",
    "BUG SQUASHER",
    "TEAM LEAD",
    "AI-ASSISTED CODER",
];

pub const BIO: &str = "Full Stack Developer from the Philippines with a passion for \
building software that actually works. React and Golang are my main weapons — I've \
led teams, shipped platforms from scratch, and turned complex requirements into \
clean code. Quick learner who thrives under pressure. When I'm not coding, you'll \
find me gaming Wuthering Waves, riding motorcycles, or exploring Southeast Asia.";

// ── Character sheet ──

pub struct Gauge {
    pub label: &'static str,
    pub value: u32,
    pub max: u32,
    pub accent: Accent,
}

pub const GAUGES: &[Gauge] = &[
    Gauge { label: "HP", value: 950, max: 999, accent: Accent::Hp },
    Gauge { label: "MP", value: 420, max: 500, accent: Accent::Mp },
    Gauge { label: "EXP", value: 7800, max: 10_000, accent: Accent::Xp },
];

pub struct Attribute {
    pub label: &'static str,
    pub value: u32,
    pub description: &'static str,
}

pub const ATTRIBUTES: &[Attribute] = &[
    Attribute { label: "STR", value: 95, description: "React Mastery" },
    Attribute { label: "DEF", value: 92, description: "Golang Power" },
    Attribute { label: "INT", value: 88, description: "TypeScript" },
    Attribute { label: "AGI", value: 90, description: "Fast Learner" },
    Attribute { label: "LCK", value: 75, description: "Bug Finding" },
    Attribute { label: "VIT", value: 85, description: "Team Leading" },
];

pub struct Achievement {
    pub icon: char,
    pub name: &'static str,
    pub accent: Accent,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { icon: '★', name: "TEAM LEAD", accent: Accent::Gold },
    Achievement { icon: '⚔', name: "SHIP IT", accent: Accent::Heal },
    Achievement { icon: '✦', name: "BUG SLAYER", accent: Accent::Hp },
    Achievement { icon: '◆', name: "POLYGLOT", accent: Accent::Rare },
    Achievement { icon: '▲', name: "FULL CLEAR", accent: Accent::Mp },
    Achievement { icon: '●', name: "4YR VETERAN", accent: Accent::Xp },
];

pub struct Equipment {
    pub slot: &'static str,
    pub item: &'static str,
    pub detail: &'static str,
}

pub const EQUIPMENT: &[Equipment] = &[
    Equipment { slot: "WEAPON", item: "React", detail: "ATK +98" },
    Equipment { slot: "ARMOR", item: "Golang", detail: "DEF +95" },
    Equipment { slot: "SHIELD", item: "TypeScript", detail: "VIT +92" },
    Equipment { slot: "HELM", item: "Redux Saga", detail: "AGI +92" },
    Equipment { slot: "RELIC", item: "PostgreSQL", detail: "INT +80" },
];

// ── Contact save slots ──

pub struct SaveSlot {
    pub slot: u8,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: char,
}

pub const SAVE_SLOTS: &[SaveSlot] = &[
    SaveSlot {
        slot: 1,
        label: "EMAIL",
        value: "alexandervenus22@gmail.com",
        href: "mailto:alexandervenus22@gmail.com",
        icon: '◈',
    },
    SaveSlot {
        slot: 2,
        label: "LINKEDIN",
        value: "Alexander Venus",
        href: "https://www.linkedin.com/in/alexander-venus-338482150/",
        icon: '◆',
    },
    SaveSlot {
        slot: 3,
        label: "TWITTER/X",
        value: "@extrangxander22",
        href: "https://x.com/extrangxander22",
        icon: '⚔',
    },
];

// ── Boot sequence ──

/// Boot lines with their reveal offsets in milliseconds.
pub const BOOT_LINES: &[(u64, &str)] = &[
    (0, "BIOS v2.4.1 ── AMBER SYSTEMS"),
    (200, "MEM CHECK ......... 640K OK"),
    (500, "LOADING MODULES:"),
    (650, "  ├── portfolio.exe"),
    (800, "  ├── animations.dll"),
    (950, "  ├── style.css"),
    (1100, "  └── effects.wasm"),
    (1300, ""),
    (1400, "INITIALIZING ..."),
];

pub const CREDIT_LINES: &[&str] = &[
    "DESIGNED & BUILT BY",
    "ALEXANDER VENUS",
    "USING RUST & CROSSTERM",
];
