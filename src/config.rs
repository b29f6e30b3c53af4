use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Model used when the config does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
/// Gemini REST root; `/models/{model}:generateContent` is appended.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key_env: String,
    pub model: String,
    /// Optional API root override, e.g. a local proxy.
    pub base_url: Option<String>,
    /// Request timeout. 0 disables it.
    pub timeout_ms: u64,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Append logs here instead of stderr.
    pub file: Option<PathBuf>,
}

// --- Defaults ---

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: API_KEY_ENV.into(),
            model: DEFAULT_MODEL.into(),
            base_url: None,
            timeout_ms: 60_000,
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: None,
        }
    }
}

// --- Methods ---

impl Config {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load from `path`. A missing file yields defaults; a broken one is
    /// reported on stderr and also yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("[plangen] Failed to parse {}: {e}", path.display());
                }
            },
            Err(e) => {
                eprintln!("[plangen] Failed to read {}: {e}", path.display());
            }
        }

        Config::default()
    }

    pub fn default_path() -> PathBuf {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|d| !d.is_empty())
            .map(|d| PathBuf::from(d).join("plangen").join("config.toml"))
            .or_else(|| dirs::config_dir().map(|d| d.join("plangen").join("config.toml")))
            .unwrap_or_else(|| PathBuf::from("~/.config/plangen/config.toml"))
    }
}

impl GeminiConfig {
    /// API root with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url(), self.model)
    }
}
