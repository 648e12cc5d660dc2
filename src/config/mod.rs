mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/credit-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("credit-score"))
}

/// Get the default config file path (~/.config/credit-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// A missing file is not an error: scoring then runs on default weights.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    Ok(config)
}

/// Log one warning per weight override that matched no known weight.
///
/// Returns how many were reported. Call it once logging is installed.
pub fn warn_ignored_weights(config: &Config) -> usize {
    let ignored = config.weights.ignored_keys();
    for name in ignored {
        tracing::warn!(key = %name, "ignoring unknown weight override");
    }
    ignored.len()
}

/// Save configuration to a YAML file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let yaml = serde_saphyr::to_string(config).context("Failed to serialize config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{WeightConfig, WeightKey};
    use std::env;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_warnings(config: &Config) -> (usize, String) {
        let writer = CaptureWriter::default();
        let sink = writer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();
        let count = tracing::subscriber::with_default(subscriber, || warn_ignored_weights(config));
        let bytes = writer.0.lock().unwrap().clone();
        (count, String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_path = env::temp_dir().join("credit_score_test_missing_config.yaml");
        let _ = fs::remove_file(&temp_path);

        let config = load_config(&temp_path).unwrap();
        assert!(config.weights.is_empty());
        assert!(config.log_level.is_none());
        assert_eq!(config.effective_weights(), WeightConfig::default());
    }

    #[test]
    fn test_load_partial_weights() {
        let temp_path = env::temp_dir().join("credit_score_test_partial_config.yaml");
        fs::write(
            &temp_path,
            "log_level: info\nweights:\n  ageBonus: 40\n  minSubsistencePerPerson: 900\n",
        )
        .unwrap();

        let config = load_config(&temp_path).unwrap();
        let weights = config.effective_weights();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(weights.age_bonus, 40.0);
        assert_eq!(weights.min_subsistence_per_person, 900.0);
        assert_eq!(weights.contract_bonus, 50.0);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = env::temp_dir().join("credit_score_test_config_dir");
        let _ = fs::remove_dir_all(&dir);
        let temp_path = dir.join("config.yaml");

        let mut config = Config::default();
        config.weights.set(WeightKey::DelayMultiplier, 35.0);
        config.weights.set(WeightKey::B2bBonus, 45.5);

        save_config(&temp_path, &config).unwrap();
        let loaded = load_config(&temp_path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.effective_weights().delay_multiplier, 35.0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let temp_path = env::temp_dir().join("credit_score_test_bad_config.yaml");
        fs::write(&temp_path, "wieghts:\n  ageBonus: 40\n").unwrap();

        let err = load_config(&temp_path).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_unknown_weight_key_warned_after_load() {
        let temp_path = env::temp_dir().join("credit_score_test_typo_weight_config.yaml");
        fs::write(&temp_path, "weights:\n  ageBonus: 40\n  agebonsu: 99\n").unwrap();

        let config = load_config(&temp_path).unwrap();
        assert_eq!(config.weights.ignored_keys(), ["agebonsu".to_string()]);
        assert_eq!(config.effective_weights().age_bonus, 40.0);

        let (count, logged) = captured_warnings(&config);
        assert_eq!(count, 1);
        assert!(logged.contains("WARN"));
        assert!(logged.contains("ignoring unknown weight override"));
        assert!(logged.contains("agebonsu"));

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_no_warning_when_all_weight_keys_known() {
        let config = Config::default();
        let (count, logged) = captured_warnings(&config);
        assert_eq!(count, 0);
        assert!(logged.is_empty());
    }
}
