/// Static portfolio content, consumed read-only by the section screens.

pub mod profile;
pub mod projects;
pub mod skills;

/// RPG accent palette slots. The renderer maps these to concrete colors
/// so content stays presentation-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    /// Red — HP, errors, the contact section.
    Hp,
    /// Cyan — MP, the about section.
    Mp,
    /// Green — heal, success.
    Heal,
    /// Gold — highlights.
    Gold,
    /// Purple — rare, the projects section.
    Rare,
    /// Blue — experience.
    Xp,
}
