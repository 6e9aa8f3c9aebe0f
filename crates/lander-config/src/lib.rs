//! Configuration management for Lander.
//!
//! Parses `lander.toml` with serde and discovers the file in the current
//! directory or any parent. Without a file, defaults apply.
//!
//! ## Environments
//!
//! The content API, frontend origin and media host come in two fixed pairs,
//! one for local development and one for production. The pair is chosen by
//! `[environment] mode`, which defaults to the build profile: debug builds
//! talk to the development pair, release builds to production. Any URL of the
//! pair can be overridden in `[api]`.
//!
//! ## Environment Variable Expansion
//!
//! URL fields support `${VAR}` and `${VAR:-default}`:
//! - `api.base_url`
//! - `api.frontend_url`
//! - `api.media_host`
//! - `api.site_settings_url`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lander.toml";

/// Settings from the command line that take precedence over the file.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override environment mode.
    pub mode: Option<Mode>,
    /// Override content API base URL.
    pub base_url: Option<String>,
    /// Override the frontend origin sent in `X-Frontend-Url`.
    pub frontend_url: Option<String>,
}

/// Deployment environment selecting the default URL pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local CMS and dev frontend.
    Development,
    /// Hosted CMS and public frontend.
    Production,
}

impl Mode {
    /// Mode implied by the build profile.
    #[must_use]
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    fn defaults(self) -> EnvironmentDefaults {
        match self {
            Self::Development => EnvironmentDefaults {
                base_url: "http://localhost:8000/blogs/api/v2",
                frontend_url: "http://localhost:5173",
                media_host: "http://localhost:8000",
            },
            Self::Production => EnvironmentDefaults {
                base_url: "https://esign-admin.signmary.com/blogs/api/v2",
                frontend_url: "https://1099datamapper.com",
                media_host: "https://esign-admin.signmary.com",
            },
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::Validation(format!(
                "unknown mode '{other}' (expected development or production)"
            ))),
        }
    }
}

struct EnvironmentDefaults {
    base_url: &'static str,
    frontend_url: &'static str,
    media_host: &'static str,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    environment: EnvironmentConfigRaw,
    api: ApiConfigRaw,
    /// HTTP fetch behaviour.
    pub fetch: FetchConfig,
    /// Rendering options.
    pub render: RenderConfig,

    /// Resolved environment mode (set after loading).
    #[serde(skip)]
    pub mode: Mode,
    /// Resolved API endpoints (set after loading).
    #[serde(skip)]
    pub api_resolved: ApiConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let mut config = Self {
            environment: EnvironmentConfigRaw::default(),
            api: ApiConfigRaw::default(),
            fetch: FetchConfig::default(),
            render: RenderConfig::default(),
            mode: Mode::from_build(),
            api_resolved: ApiConfig::default(),
            config_path: None,
        };
        config.resolve();
        config
    }
}

impl Default for Mode {
    fn default() -> Self {
        Self::from_build()
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct EnvironmentConfigRaw {
    mode: Option<Mode>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ApiConfigRaw {
    base_url: Option<String>,
    frontend_url: Option<String>,
    media_host: Option<String>,
    site_settings_url: Option<String>,
    endpoints: EndpointsConfig,
}

/// Collection paths relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Sales landing page documents.
    pub landing: String,
    /// Features page collection.
    pub features: String,
    /// Workbook reference documents.
    pub workbook: String,
    /// Terms and conditions documents.
    pub terms: String,
    /// Web form definitions for the lead-capture overlay.
    pub web_form: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            landing: "sales-pages/".to_owned(),
            features: "features-pages/".to_owned(),
            workbook: "workbook-pages/".to_owned(),
            terms: "terms-conditions-pages/".to_owned(),
            web_form: "webform-pages/".to_owned(),
        }
    }
}

/// Resolved API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Content API base URL, without trailing slash.
    pub base_url: String,
    /// Value of the `X-Frontend-Url` header.
    pub frontend_url: String,
    /// Host prepended to relative media URLs, without trailing slash.
    pub media_host: String,
    /// Absolute URL of the site settings document.
    pub site_settings_url: String,
    /// Collection paths.
    pub endpoints: EndpointsConfig,
}

/// HTTP fetch configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds. Zero disables the timeout.
    pub timeout_secs: u64,
    /// Delay before the site settings fetch, in milliseconds.
    pub settings_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            settings_delay_ms: 100,
        }
    }
}

impl FetchConfig {
    /// Request timeout, or `None` when disabled.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Delay before the deferred site settings fetch.
    #[must_use]
    pub fn settings_delay(&self) -> Duration {
        Duration::from_millis(self.settings_delay_ms)
    }
}

/// How CMS rich text is treated when rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RichTextMode {
    /// Inject verbatim; the CMS is assumed to sanitize its output.
    #[default]
    Trusted,
    /// Escape as plain text.
    Escaped,
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Rich text handling.
    pub rich_text: RichTextMode,
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`api.base_url`").
        field: String,
        /// Error message (e.g., "${`CMS_HOST`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(url, field)?;
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `lander.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// CLI settings are applied before URL resolution so that a mode override
    /// switches the whole default pair.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::parse_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::parse_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.expand_env_vars()?;
        config.resolve();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error on invalid TOML, unresolved variables or failed validation.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve();
        config.validate()?;
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(mode) = settings.mode {
            self.environment.mode = Some(mode);
        }
        if let Some(base_url) = &settings.base_url {
            self.api.base_url = Some(base_url.clone());
        }
        if let Some(frontend_url) = &settings.frontend_url {
            self.api.frontend_url = Some(frontend_url.clone());
        }
    }

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

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_optional(&mut self.api.base_url, "api.base_url")?;
        expand::expand_optional(&mut self.api.frontend_url, "api.frontend_url")?;
        expand::expand_optional(&mut self.api.media_host, "api.media_host")?;
        expand::expand_optional(&mut self.api.site_settings_url, "api.site_settings_url")?;
        Ok(())
    }

    /// Pick the environment pair and layer `[api]` overrides on top.
    fn resolve(&mut self) {
        self.mode = self.environment.mode.unwrap_or_else(Mode::from_build);
        let defaults = self.mode.defaults();

        let pick = |value: Option<&String>, default: &str| {
            value
                .map_or(default, String::as_str)
                .trim_end_matches('/')
                .to_owned()
        };

        let media_host = pick(self.api.media_host.as_ref(), defaults.media_host);
        let site_settings_url = self
            .api
            .site_settings_url
            .clone()
            .unwrap_or_else(|| format!("{media_host}/api/site-settings/"));

        self.api_resolved = ApiConfig {
            base_url: pick(self.api.base_url.as_ref(), defaults.base_url),
            frontend_url: pick(self.api.frontend_url.as_ref(), defaults.frontend_url),
            media_host,
            site_settings_url,
            endpoints: self.api.endpoints.clone(),
        };
    }

    /// Validate resolved values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let api = &self.api_resolved;
        require_http_url(&api.base_url, "api.base_url")?;
        require_http_url(&api.frontend_url, "api.frontend_url")?;
        require_http_url(&api.media_host, "api.media_host")?;
        require_http_url(&api.site_settings_url, "api.site_settings_url")?;

        let endpoints = &api.endpoints;
        require_non_empty(&endpoints.landing, "api.endpoints.landing")?;
        require_non_empty(&endpoints.features, "api.endpoints.features")?;
        require_non_empty(&endpoints.workbook, "api.endpoints.workbook")?;
        require_non_empty(&endpoints.terms, "api.endpoints.terms")?;
        require_non_empty(&endpoints.web_form, "api.endpoints.web_form")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn production() -> Config {
        Config::from_toml("[environment]\nmode = \"production\"\n").unwrap()
    }

    fn assert_validation_error(toml: &str, field: &str) {
        match Config::from_toml(toml) {
            Err(ConfigError::Validation(msg)) => {
                assert!(msg.contains(field), "expected '{field}' in '{msg}'");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_mode_follows_build_profile() {
        let config = Config::default();
        assert_eq!(config.mode, Mode::from_build());
        // Tests build with debug assertions.
        assert_eq!(config.mode, Mode::Development);
        assert_eq!(
            config.api_resolved.base_url,
            "http://localhost:8000/blogs/api/v2"
        );
        assert_eq!(config.api_resolved.frontend_url, "http://localhost:5173");
    }

    #[test]
    fn test_production_pair() {
        let config = production();
        assert_eq!(
            config.api_resolved,
            ApiConfig {
                base_url: "https://esign-admin.signmary.com/blogs/api/v2".to_owned(),
                frontend_url: "https://1099datamapper.com".to_owned(),
                media_host: "https://esign-admin.signmary.com".to_owned(),
                site_settings_url: "https://esign-admin.signmary.com/api/site-settings/"
                    .to_owned(),
                endpoints: EndpointsConfig::default(),
            }
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.settings_delay_ms, 100);
        assert_eq!(config.render.rich_text, RichTextMode::Trusted);
        assert_eq!(config.api_resolved.endpoints, EndpointsConfig::default());
    }

    #[test]
    fn test_api_overrides_trim_trailing_slash() {
        let config = Config::from_toml(
            r#"
[environment]
mode = "production"

[api]
base_url = "https://cms.example.com/api/v2/"
media_host = "https://media.example.com/"
"#,
        )
        .unwrap();
        assert_eq!(config.api_resolved.base_url, "https://cms.example.com/api/v2");
        assert_eq!(config.api_resolved.media_host, "https://media.example.com");
        assert_eq!(
            config.api_resolved.site_settings_url,
            "https://media.example.com/api/site-settings/"
        );
        assert_eq!(
            config.api_resolved.frontend_url,
            "https://1099datamapper.com"
        );
    }

    #[test]
    fn test_endpoint_override_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
[api.endpoints]
landing = "maverick-pages/"
"#,
        )
        .unwrap();
        assert_eq!(config.api_resolved.endpoints.landing, "maverick-pages/");
        assert_eq!(
            config.api_resolved.endpoints.terms,
            "terms-conditions-pages/"
        );
    }

    #[test]
    fn test_fetch_timeout_zero_disables() {
        let config = Config::from_toml("[fetch]\ntimeout_secs = 0\n").unwrap();
        assert_eq!(config.fetch.timeout(), None);
        assert_eq!(
            Config::default().fetch.timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_rich_text_escaped() {
        let config = Config::from_toml("[render]\nrich_text = \"escaped\"\n").unwrap();
        assert_eq!(config.render.rich_text, RichTextMode::Escaped);
    }

    #[test]
    fn test_unknown_mode_is_parse_error() {
        let result = Config::from_toml("[environment]\nmode = \"staging\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_base_url_scheme() {
        assert_validation_error("[api]\nbase_url = \"cms.example.com\"\n", "api.base_url");
    }

    #[test]
    fn test_validate_empty_endpoint() {
        assert_validation_error("[api.endpoints]\nterms = \"\"\n", "api.endpoints.terms");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("prod".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!("development".parse::<Mode>().unwrap(), Mode::Development);
        assert!("qa".parse::<Mode>().is_err());
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let result = Config::load(Some(Path::new("/nonexistent/lander.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lander.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[environment]\nmode = \"production\"").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.mode, Mode::Production);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_cli_mode_switches_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lander.toml");
        std::fs::write(&path, "[environment]\nmode = \"production\"\n").unwrap();

        let settings = CliSettings {
            mode: Some(Mode::Development),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.mode, Mode::Development);
        assert_eq!(config.api_resolved.media_host, "http://localhost:8000");
    }

    #[test]
    fn test_cli_urls_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lander.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://file.example.com\"\n").unwrap();

        let settings = CliSettings {
            base_url: Some("https://cli.example.com/".to_owned()),
            frontend_url: Some("https://wp-1099.com".to_owned()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.api_resolved.base_url, "https://cli.example.com");
        assert_eq!(config.api_resolved.frontend_url, "https://wp-1099.com");
    }

    #[test]
    fn test_env_expansion_in_base_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LANDER_TEST_CONFIG_HOST", "cms.internal");
        }
        let config =
            Config::from_toml("[api]\nbase_url = \"https://${LANDER_TEST_CONFIG_HOST}/v2\"\n")
                .unwrap();
        assert_eq!(config.api_resolved.base_url, "https://cms.internal/v2");
        unsafe {
            std::env::remove_var("LANDER_TEST_CONFIG_HOST");
        }
    }
}
