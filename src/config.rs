/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.
///
/// All timing thresholds are expressed in simulation ticks. At the default
/// 16 ms tick rate (~60 ticks/s) the defaults correspond to the tuned
/// values: 2 s stage advance, 0.75 s skip unlock, 0.25 s input-lock
/// recompute.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub scroll: ScrollConfig,
    pub debug: DebugConfig,
}

#[derive(Clone, Debug)]
pub struct ScrollConfig {
    pub tick_rate_ms: u64,
    pub fg_speed: f32,          // px/tick the foreground scrolls per advancing tick
    pub bg_speed: f32,          // px/tick the background segments shift (parallax)
    pub advance_ticks: u64,     // stage commit threshold
    pub skip_unlock_ticks: u64, // UI unlock after an explicit skip
    pub input_clear_ticks: u64, // input-lock recompute, nested inside the commit check
}

#[derive(Clone, Debug)]
pub struct DebugConfig {
    pub collision_borders: bool,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    scroll: TomlScroll,
    #[serde(default)]
    debug: TomlDebug,
}

#[derive(Deserialize, Debug)]
struct TomlScroll {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default = "default_fg_speed")]
    fg_speed: f32,
    #[serde(default = "default_bg_speed")]
    bg_speed: f32,
    #[serde(default = "default_advance")]
    advance_ticks: u64,
    #[serde(default = "default_skip_unlock")]
    skip_unlock_ticks: u64,
    #[serde(default = "default_input_clear")]
    input_clear_ticks: u64,
}

#[derive(Deserialize, Debug)]
struct TomlDebug {
    #[serde(default)]
    collision_borders: bool,
}

// ── Defaults ──

fn default_tick_rate() -> u64 { 16 }
fn default_fg_speed() -> f32 { 3.555 }
fn default_bg_speed() -> f32 { 1.78 }
fn default_advance() -> u64 { 120 }     // 2 s at 60 ticks/s
fn default_skip_unlock() -> u64 { 45 }  // 0.75 s
fn default_input_clear() -> u64 { 15 }  // 0.25 s

impl Default for TomlScroll {
    fn default() -> Self {
        TomlScroll {
            tick_rate_ms: default_tick_rate(),
            fg_speed: default_fg_speed(),
            bg_speed: default_bg_speed(),
            advance_ticks: default_advance(),
            skip_unlock_ticks: default_skip_unlock(),
            input_clear_ticks: default_input_clear(),
        }
    }
}

impl Default for TomlDebug {
    fn default() -> Self {
        TomlDebug { collision_borders: false }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            tick_rate_ms: default_tick_rate(),
            fg_speed: default_fg_speed(),
            bg_speed: default_bg_speed(),
            advance_ticks: default_advance(),
            skip_unlock_ticks: default_skip_unlock(),
            input_clear_ticks: default_input_clear(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let toml_cfg = load_toml(&candidate_dirs());

        GameConfig {
            scroll: ScrollConfig {
                tick_rate_ms: toml_cfg.scroll.tick_rate_ms,
                fg_speed: toml_cfg.scroll.fg_speed,
                bg_speed: toml_cfg.scroll.bg_speed,
                advance_ticks: toml_cfg.scroll.advance_ticks,
                skip_unlock_ticks: toml_cfg.scroll.skip_unlock_ticks,
                input_clear_ticks: toml_cfg.scroll.input_clear_ticks,
            },
            debug: DebugConfig {
                collision_borders: toml_cfg.debug.collision_borders,
            },
        }
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

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
    fn missing_keys_fall_back_per_key() {
        let cfg: TomlConfig = toml::from_str("[scroll]\nfg_speed = 5.0\n").unwrap();
        assert_eq!(cfg.scroll.fg_speed, 5.0);
        assert_eq!(cfg.scroll.advance_ticks, default_advance());
        assert!(!cfg.debug.collision_borders);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.scroll.tick_rate_ms, 16);
        assert_eq!(cfg.scroll.skip_unlock_ticks, 45);
        assert_eq!(cfg.scroll.input_clear_ticks, 15);
    }
}
