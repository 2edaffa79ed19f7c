//! Sunrise configuration: defaults, optional file, then `SUNRISE__*` environment.
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | host | SUNRISE__HOST | 127.0.0.1 |
//! | port | SUNRISE__PORT | 5000 |
//! | debug | SUNRISE__DEBUG | false |
//! | api_base | SUNRISE__API_BASE | https://api.openai.com/v1 |
//! | api_key | SUNRISE__API_KEY, then OPENAI_API_KEY | unset |
//! | chat_model | SUNRISE__CHAT_MODEL | gpt-4o |
//! | temperature | SUNRISE__TEMPERATURE | 0.9 |
//! | max_tokens | SUNRISE__MAX_TOKENS | 500 |
//! | image_model | SUNRISE__IMAGE_MODEL | dall-e-3 |
//! | image_size | SUNRISE__IMAGE_SIZE | 1024x1024 |
//! | image_quality | SUNRISE__IMAGE_QUALITY | standard |
//! | log_dir | SUNRISE__LOG_DIR | unset (stdout only) |

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Env var naming the config file (without extension is fine; `config` probes toml/json/yaml).
pub const CONFIG_PATH_ENV: &str = "SUNRISE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/sunrise";
/// Provider credential read when `api_key` is not set through the config sources.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunriseConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
    /// Base URL of the OpenAI-compatible API (no trailing `/chat/completions`).
    pub api_base: String,
    /// Never serialized back out; comes from the file, `SUNRISE__API_KEY` or `OPENAI_API_KEY`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    pub chat_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub image_model: String,
    pub image_size: String,
    pub image_quality: String,
    /// Directory for the daily-rolling log file. Unset = stdout only.
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl SunriseConfig {
    /// Load from `SUNRISE_CONFIG` (default `config/sunrise`) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load with an explicit file path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5000_i64)?
            .set_default("debug", false)?
            .set_default("api_base", "https://api.openai.com/v1")?
            .set_default("chat_model", "gpt-4o")?
            .set_default("temperature", 0.9_f64)?
            .set_default("max_tokens", 500_i64)?
            .set_default("image_model", "dall-e-3")?
            .set_default("image_size", "1024x1024")?
            .set_default("image_quality", "standard")?;

        let built = builder
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("SUNRISE").separator("__"))
            .build()?;

        let mut cfg: SunriseConfig = built.try_deserialize()?;
        cfg.api_key = normalize_key(cfg.api_key.take())
            .or_else(|| normalize_key(std::env::var(API_KEY_ENV).ok()));
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::Invalid(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::Invalid("max_tokens must be positive".into()));
        }
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base must not be empty".into()));
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn normalize_key(key: Option<String>) -> Option<String> {
    key.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    // Environment variables are process-wide; every test that loads config holds this.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets variables for one test and removes them again on drop.
    struct ScopedEnv {
        keys: Vec<&'static str>,
        _lock: MutexGuard<'static, ()>,
    }

    impl ScopedEnv {
        fn new(vars: &[(&'static str, &str)]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
            Self {
                keys: vars.iter().map(|(k, _)| *k).collect(),
                _lock: lock,
            }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for k in &self.keys {
                std::env::remove_var(k);
            }
        }
    }

    #[test]
    fn defaults_when_file_missing() {
        let _env = ScopedEnv::new(&[]);
        let dir = tempfile::tempdir().unwrap();
        let cfg = SunriseConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.chat_model, "gpt-4o");
        assert_eq!(cfg.image_size, "1024x1024");
        assert!((cfg.temperature - 0.9).abs() < f32::EPSILON);
        assert_eq!(cfg.max_tokens, 500);
    }

    #[test]
    fn file_overrides_defaults() {
        let _env = ScopedEnv::new(&[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sunrise.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "port = 8088\nchat_model = \"gpt-4o-mini\"\napi_key = \"  sk-test  \"").unwrap();

        let cfg = SunriseConfig::load_from(&path).unwrap();
        assert_eq!(cfg.port, 8088);
        assert_eq!(cfg.chat_model, "gpt-4o-mini");
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8088");
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let _env = ScopedEnv::new(&[]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sunrise.toml");
        std::fs::write(&path, "temperature = 3.5\n").unwrap();

        let err = SunriseConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn environment_overrides_file_and_defaults() {
        let _env = ScopedEnv::new(&[
            ("SUNRISE__PORT", "8089"),
            ("SUNRISE__TEMPERATURE", "0.5"),
            ("SUNRISE__DEBUG", "true"),
            ("SUNRISE__CHAT_MODEL", "gpt-4o-mini"),
        ]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sunrise.toml");
        std::fs::write(&path, "port = 7000\nimage_size = \"512x512\"\n").unwrap();

        let cfg = SunriseConfig::load_from(&path).unwrap();
        assert_eq!(cfg.port, 8089);
        assert!((cfg.temperature - 0.5).abs() < f32::EPSILON);
        assert!(cfg.debug);
        assert_eq!(cfg.chat_model, "gpt-4o-mini");
        assert_eq!(cfg.image_size, "512x512");
    }

    #[test]
    fn api_key_falls_back_to_openai_env_trimmed() {
        let _env = ScopedEnv::new(&[(API_KEY_ENV, " sk-env ")]);
        let dir = tempfile::tempdir().unwrap();

        let cfg = SunriseConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("sk-env"));
        assert!(cfg.has_api_key());
    }

    #[test]
    fn sunrise_api_key_wins_over_openai_env() {
        let _env = ScopedEnv::new(&[
            ("SUNRISE__API_KEY", "sk-sunrise"),
            (API_KEY_ENV, "sk-openai"),
        ]);
        let dir = tempfile::tempdir().unwrap();

        let cfg = SunriseConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("sk-sunrise"));
    }

    #[test]
    fn blank_openai_key_counts_as_missing() {
        let _env = ScopedEnv::new(&[(API_KEY_ENV, "   ")]);
        let dir = tempfile::tempdir().unwrap();

        let cfg = SunriseConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.api_key, None);
        assert!(!cfg.has_api_key());
    }
}
