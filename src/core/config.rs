use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

/// Which datastore adapter the gateway talks to.
///
/// Exactly one backend is active per deployment. `Memory` keeps everything
/// in-process and exists for local development and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Tabular,
    Document,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub kind: BackendKind,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_users_table")]
    pub users_table: String,
    #[serde(default = "default_responses_table")]
    pub responses_table: String,
    /// Database name, used by the document backend only.
    #[serde(default = "default_database")]
    pub database: String,
}

/// How user secrets are stored and compared.
///
/// `PlaintextLegacy` reproduces deployments that stored the secret verbatim.
/// It is insecure and only kept for compatibility with existing user rows;
/// new deployments should use `Hashed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    Hashed,
    PlaintextLegacy,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_auth_mode")]
    pub mode: AuthMode,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: default_auth_mode(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_users_table() -> String {
    "users".to_string()
}

fn default_responses_table() -> String {
    "responses".to_string()
}

fn default_database() -> String {
    "survey".to_string()
}

fn default_auth_mode() -> AuthMode {
    AuthMode::Hashed
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        // Remote backends need connection details; the memory backend does not
        if self.backend.kind != BackendKind::Memory {
            if self.backend.base_url.is_empty() {
                bail!(
                    "base_url must not be empty for the {:?} backend",
                    self.backend.kind
                );
            }

            if self.backend.api_key.is_empty() {
                bail!(
                    "api_key must not be empty for the {:?} backend",
                    self.backend.kind
                );
            }
        }

        if self.backend.users_table.is_empty() {
            bail!("users_table must not be empty");
        }

        if self.backend.responses_table.is_empty() {
            bail!("responses_table must not be empty");
        }

        if self.backend.kind == BackendKind::Document && self.backend.database.is_empty() {
            bail!("database must not be empty for the document backend");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(toml_str: &str) -> Config {
        toml::from_str(toml_str).expect("Failed to parse config")
    }

    const MINIMAL_TABULAR: &str = r#"
        [server]
        port = 8080

        [backend]
        kind = "tabular"
        base_url = "https://example.supabase.co"
        api_key = "service-role-key"

        [logging]
    "#;

    #[test]
    fn test_minimal_tabular_config() {
        let config = parse(MINIMAL_TABULAR);
        config.validate().expect("Config should validate");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.kind, BackendKind::Tabular);
        assert_eq!(config.backend.users_table, "users");
        assert_eq!(config.backend.responses_table, "responses");
        assert_eq!(config.auth.mode, AuthMode::Hashed);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_num_threads_defaults_to_cpu_count() {
        let config = parse(MINIMAL_TABULAR);
        assert_eq!(config.server.num_threads, num_cpus::get());
    }

    #[test]
    fn test_memory_backend_needs_no_credentials() {
        let config = parse(
            r#"
            [server]
            port = 3000

            [backend]
            kind = "memory"

            [logging]
            format = "console"
        "#,
        );
        config
            .validate()
            .expect("Memory backend should validate without credentials");
    }

    #[test]
    fn test_tabular_backend_requires_api_key() {
        let config = parse(
            r#"
            [server]
            port = 3000

            [backend]
            kind = "tabular"
            base_url = "https://example.supabase.co"

            [logging]
        "#,
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_plaintext_legacy_mode_parses() {
        let config = parse(
            r#"
            [server]
            port = 3000

            [backend]
            kind = "memory"

            [auth]
            mode = "plaintext-legacy"

            [logging]
        "#,
        );
        assert_eq!(config.auth.mode, AuthMode::PlaintextLegacy);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = parse(MINIMAL_TABULAR);
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = parse(MINIMAL_TABULAR);
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_TABULAR.as_bytes()).unwrap();

        let config = Config::from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.backend.kind, BackendKind::Tabular);
    }

    #[test]
    fn test_from_file_missing() {
        let path = PathBuf::from("/nonexistent/survey-config.toml");
        assert!(Config::from_file(&path).is_err());
    }
}
