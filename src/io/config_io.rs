use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// `$XDG_CONFIG_HOME/dayplan/config.toml` (or the platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dayplan").join("config.toml"))
}

/// Load the config. An explicit path must exist; the default location is
/// optional and falls back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => read_config(&path),
        _ => Ok(AppConfig::default()),
    }
}

pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::SeedMode;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
        let config = AppConfig::default();
        assert_eq!(config.session.seed, SeedMode::Default);
        assert!(config.ui.mouse);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.file, None);
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r##"
[session]
seed = "empty"

[ui]
show_key_hints = false
mouse = false

[ui.colors]
highlight = "#112233"

[log]
level = "dayplan=debug"
file = "/tmp/dayplan.log"
"##,
        )
        .unwrap();
        assert_eq!(config.session.seed, SeedMode::Empty);
        assert!(!config.ui.show_key_hints);
        assert!(!config.ui.mouse);
        assert_eq!(config.ui.colors.get("highlight").map(String::as_str), Some("#112233"));
        assert_eq!(config.log.level, "dayplan=debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/dayplan.log")));
    }

    #[test]
    fn test_bad_seed_is_parse_error() {
        let err = parse_config("[session]\nseed = \"random\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_read_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[session]\nseed = \"empty\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.session.seed, SeedMode::Empty);
    }

    #[test]
    fn test_explicit_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }
}
