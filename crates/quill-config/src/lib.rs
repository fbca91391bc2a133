//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [document]
//! doctype = "html"
//! newline_after_close = true
//!
//! [table]
//! table_class = "grid"
//! header_class = "head"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generated document settings.
    pub document: DocumentConfig,
    /// Generated table settings.
    pub table: TableConfig,
    /// Server configuration.
    pub server: ServerConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Settings for generated documents.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Doctype declaration; empty for fragments.
    pub doctype: String,
    /// Page title for full documents.
    pub title: String,
    /// Newline after every closing tag.
    pub newline_after_close: bool,
    /// Newline after every complete tag.
    pub newline_after_tag: bool,
    /// Newline after every opening tag.
    pub newline_after_open: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            doctype: "html".to_owned(),
            title: "Quill".to_owned(),
            newline_after_close: true,
            newline_after_tag: false,
            newline_after_open: false,
        }
    }
}

impl DocumentConfig {
    /// Newline policy as a bitmask: 0x01 after close, 0x02 after complete
    /// tags, 0x04 after open.
    #[must_use]
    pub fn newline_bits(&self) -> u8 {
        u8::from(self.newline_after_close)
            | (u8::from(self.newline_after_tag) << 1)
            | (u8::from(self.newline_after_open) << 2)
    }
}

/// CSS classes and caption for generated tables.
///
/// Empty strings mean "no class attribute".
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Class of the `<table>` element.
    pub table_class: String,
    /// Class of generated `<tr>` elements.
    pub row_class: String,
    /// Class of generated `<th>` cells.
    pub header_class: String,
    /// Class of generated `<td>` cells.
    pub data_class: String,
    /// Optional table caption.
    pub caption: Option<String>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject characters that would break out of an attribute or declaration.
fn require_markup_safe(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.contains(['<', '>', '"']) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain '<', '>' or '\"'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quill.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_document()?;
        self.validate_table()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_document(&self) -> Result<(), ConfigError> {
        require_markup_safe(&self.document.doctype, "document.doctype")
    }

    fn validate_table(&self) -> Result<(), ConfigError> {
        require_markup_safe(&self.table.table_class, "table.table_class")?;
        require_markup_safe(&self.table.row_class, "table.row_class")?;
        require_markup_safe(&self.table.header_class, "table.header_class")?;
        require_markup_safe(&self.table.data_class, "table.data_class")?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document.doctype, "html");
        assert_eq!(config.document.newline_bits(), 0x01);
        assert_eq!(config.table.caption, None);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.document.title, "Quill");
    }

    #[test]
    fn test_parse_document_config() {
        let toml = r#"
[document]
doctype = ""
newline_after_close = false
newline_after_tag = true
newline_after_open = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.document.doctype, "");
        assert_eq!(config.document.newline_bits(), 0x06);
    }

    #[test]
    fn test_parse_table_config() {
        let toml = r#"
[table]
table_class = "grid"
header_class = "head"
caption = "Results"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.table.table_class, "grid");
        assert_eq!(config.table.header_class, "head");
        assert_eq!(config.table.row_class, "");
        assert_eq!(config.table.caption.as_deref(), Some("Results"));
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
        });
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host cannot be empty"));
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_markup_in_class() {
        let mut config = Config::default();
        config.table.data_class = r#"x" onclick="y"#.to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("table.data_class"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nport = 9100\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nhost = \"10.0.0.1\"\nport = 9100\n").unwrap();

        let settings = CliSettings {
            port: Some(9200),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nport = 0\n").unwrap();
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Validation(_))
        ));
    }
}
