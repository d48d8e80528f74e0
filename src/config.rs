use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Fixed foreground/background pair used for the whole grid.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Black text on a yellow background.
    #[default]
    Light,
    /// Yellow text on a black background.
    Dark,
}

/// Flags that can be persisted as defaults in the config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub tab_width: Option<usize>,
    pub line_width: Option<usize>,
    pub theme: Option<ThemeMode>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins where both are set.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            tab_width: other.tab_width.or(self.tab_width),
            line_width: other.line_width.or(self.line_width),
            theme: other.theme.or(self.theme),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("hopline").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("hopline")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("hopline").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("hopline")
                .join("config");
        }
    }

    PathBuf::from(".hoplinerc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".hoplinerc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# hopline defaults (saved with --save)".to_string());
    if let Some(width) = flags.tab_width {
        lines.push(format!("--tab-width {width}"));
    }
    if let Some(width) = flags.line_width {
        lines.push(format!("--line-width {width}"));
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        lines.push(format!("--theme {theme_str}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--tab-width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.tab_width = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--tab-width=") {
            flags.tab_width = value.parse().ok();
        } else if token == "--line-width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.line_width = next.parse().ok();
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--line-width=") {
            flags.line_width = value.parse().ok();
        } else if token == "--theme" {
            if let Some(next) = tokens.get(i + 1) {
                flags.theme = parse_theme(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--theme=") {
            flags.theme = parse_theme(value);
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}
