//! Loading and saving the mining settings file.
//!
//! Settings live in a single TOML file. A missing file is not an error: the
//! defaults are used until the user saves something.

use std::fs;
use std::path::{Path, PathBuf};

use rockwatch_types::MiningConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

/// Load settings from `path`, falling back to defaults if it doesn't exist.
pub fn load_config(path: &Path) -> Result<MiningConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(?path, "No mining config, using defaults");
        return Ok(MiningConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write settings to `path`, creating parent directories as needed.
pub fn save_config(path: &Path, config: &MiningConfig) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Default settings location: `<config dir>/rockwatch/mining.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("rockwatch").join("mining.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rockwatch_types::WorldRock;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("rockwatch-config-{}-{}", std::process::id(), name))
            .join("mining.toml")
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = scratch_path("missing");
        let config = load_config(&path).unwrap();
        assert_eq!(config, MiningConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save");
        let config = MiningConfig {
            track_world_rock: WorldRock::Adamantite,
            stat_timeout_minutes: 12,
            ..MiningConfig::default()
        };

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_parse_error_names_file() {
        let path = scratch_path("bad");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "track_world_rock = 7").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("mining.toml"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
