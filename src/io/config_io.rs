use std::fs;
use std::path::{Path, PathBuf};

use crate::model::BinderConfig;

/// Default config file name, looked up in the working directory.
const CONFIG_FILE: &str = "binder.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, `./binder.toml` is
/// used when present, and defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<BinderConfig, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(CONFIG_FILE);
            if !path.is_file() {
                return Ok(BinderConfig::default());
            }
            path
        }
    };

    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: BinderConfig = toml::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("binder.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_explicit_path_errors() {
        let dir = TempDir::new().unwrap();
        let result = load_config(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn explicit_path_parses_overrides() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r##"
[ui]
show_key_hints = false

[ui.colors]
background = "#000000"
"##,
        );
        let config = load_config(Some(&path)).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#000000")
        );
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        let config = load_config(Some(&path)).unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn malformed_toml_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[ui\nshow_key_hints = maybe");
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::ConfigParseError(_))));
    }
}
