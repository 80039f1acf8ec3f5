/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub timing: TimingConfig,
    pub effects: EffectsConfig,
    /// Single static paint instead of repeating animation schedules.
    pub reduced_motion: bool,
    pub contact: ContactConfig,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    pub tick_rate_ms: u64,
    pub cat_frame_ms: u64,
}

#[derive(Clone, Debug)]
pub struct EffectsConfig {
    pub particle_count: usize,
    pub formation_cols: usize,
    pub formation_rows: usize,
}

#[derive(Clone, Debug)]
pub struct ContactConfig {
    /// Form backend that accepts URL-encoded POST bodies.
    pub endpoint: String,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    effects: TomlEffects,
    #[serde(default)]
    motion: TomlMotion,
    #[serde(default)]
    contact: TomlContact,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_cat_frame")]
    cat_frame_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlEffects {
    #[serde(default = "default_particle_count")]
    particle_count: usize,
    #[serde(default = "default_formation_cols")]
    formation_cols: usize,
    #[serde(default = "default_formation_rows")]
    formation_rows: usize,
}

#[derive(Deserialize, Debug)]
struct TomlMotion {
    #[serde(default)]
    reduced: bool,
}

#[derive(Deserialize, Debug)]
struct TomlContact {
    #[serde(default = "default_endpoint")]
    endpoint: String,
}

// ── Defaults ──

fn default_tick_rate() -> u64 { 66 }
fn default_cat_frame() -> u64 { 350 }

fn default_particle_count() -> usize { 60 }
fn default_formation_cols() -> usize { 6 }
fn default_formation_rows() -> usize { 3 }

fn default_endpoint() -> String { "https://xanderdev.netlify.app/".into() }

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            tick_rate_ms: default_tick_rate(),
            cat_frame_ms: default_cat_frame(),
        }
    }
}

impl Default for TomlEffects {
    fn default() -> Self {
        TomlEffects {
            particle_count: default_particle_count(),
            formation_cols: default_formation_cols(),
            formation_rows: default_formation_rows(),
        }
    }
}

impl Default for TomlMotion {
    fn default() -> Self {
        TomlMotion { reduced: false }
    }
}

impl Default for TomlContact {
    fn default() -> Self {
        TomlContact { endpoint: default_endpoint() }
    }
}

// ── Loading ──

impl AppConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let toml_cfg = load_toml(&search_dirs);
        Self::from_toml(toml_cfg)
    }

    fn from_toml(toml_cfg: TomlConfig) -> Self {
        AppConfig {
            timing: TimingConfig {
                tick_rate_ms: toml_cfg.timing.tick_rate_ms.max(16),
                cat_frame_ms: toml_cfg.timing.cat_frame_ms.max(50),
            },
            effects: EffectsConfig {
                particle_count: toml_cfg.effects.particle_count,
                formation_cols: toml_cfg.effects.formation_cols.max(1),
                formation_rows: toml_cfg.effects.formation_rows.max(1),
            },
            reduced_motion: toml_cfg.motion.reduced,
            contact: ContactConfig {
                endpoint: toml_cfg.contact.endpoint,
            },
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        // Resolve symlinks so an installed binary still finds its config.
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. Fallback
    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_sections_missing() {
        let cfg: TomlConfig = toml::from_str("").unwrap();
        let app = AppConfig::from_toml(cfg);
        assert_eq!(app.timing.tick_rate_ms, 66);
        assert_eq!(app.effects.particle_count, 60);
        assert!(!app.reduced_motion);
        assert!(!app.contact.endpoint.is_empty());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg: TomlConfig = toml::from_str(
            "[motion]\nreduced = true\n\n[effects]\nparticle_count = 12\n",
        ).unwrap();
        let app = AppConfig::from_toml(cfg);
        assert!(app.reduced_motion);
        assert_eq!(app.effects.particle_count, 12);
        assert_eq!(app.timing.cat_frame_ms, 350);
    }

    #[test]
    fn tick_rate_is_clamped_to_sane_floor() {
        let cfg: TomlConfig = toml::from_str("[timing]\ntick_rate_ms = 1\n").unwrap();
        let app = AppConfig::from_toml(cfg);
        assert_eq!(app.timing.tick_rate_ms, 16);
    }
}
