use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    pub const fn to_tracing(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
}

impl ConfigFlags {
    /// Merge two flag sets; values in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
            log_level: other.log_level.or(self.log_level),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("tinytext").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("tinytext")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("tinytext").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("tinytext")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".tinytextrc")
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
    let mut lines = vec!["# tinytext defaults (saved with --save)".to_string()];
    if let Some(level) = flags.log_level {
        lines.push(format!("--log-level {}", level.as_str()));
    }
    if let Some(log_file) = &flags.log_file {
        lines.push(format!("--log-file {}", log_file.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
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

/// Pick out known flags from a token list, ignoring everything else.
///
/// Accepts both `--flag value` and `--flag=value`. Unknown log levels are
/// dropped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--log-level" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_level = parse_log_level(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-level=") {
            flags.log_level = parse_log_level(value);
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_log_level(s: &str) -> Option<LogLevel> {
    match s.to_ascii_lowercase().as_str() {
        "error" => Some(LogLevel::Error),
        "warn" => Some(LogLevel::Warn),
        "info" => Some(LogLevel::Info),
        "debug" => Some(LogLevel::Debug),
        "trace" => Some(LogLevel::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "tinytext".to_string(),
            "--log-level".to_string(),
            "debug".to_string(),
            "--log-file=editor.log".to_string(),
            "--save".to_string(),
            "notes.txt".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.log_level, Some(LogLevel::Debug));
        assert_eq!(flags.log_file, Some(PathBuf::from("editor.log")));
    }

    #[test]
    fn test_parse_flag_tokens_drops_unknown_level() {
        let args = vec!["--log-level".to_string(), "loud".to_string()];
        assert_eq!(parse_flag_tokens(&args), ConfigFlags::default());
    }

    #[test]
    fn test_parse_flag_tokens_ignores_trailing_flag_without_value() {
        let args = vec!["--log-file".to_string()];
        assert_eq!(parse_flag_tokens(&args).log_file, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            log_file: Some(PathBuf::from("file.log")),
            log_level: Some(LogLevel::Info),
        };
        let cli = ConfigFlags {
            log_level: Some(LogLevel::Trace),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert_eq!(merged.log_file, Some(PathBuf::from("file.log")));
        assert_eq!(merged.log_level, Some(LogLevel::Trace));
    }

    #[test]
    fn test_log_level_maps_to_tracing() {
        assert_eq!(LogLevel::Warn.to_tracing(), tracing::Level::WARN);
        assert_eq!(LogLevel::Trace.to_tracing(), tracing::Level::TRACE);
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            log_file: Some(PathBuf::from("editor.log")),
            log_level: Some(LogLevel::Debug),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
    }
}
