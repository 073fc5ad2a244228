use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use cedarheights_dispatch::DispatchConfig;
use cedarheights_enrollment::{Schedule, ScheduleError, SlotEntry};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    /// Absent entirely means email dispatch is disabled. A partially
    /// filled section is a startup error instead.
    pub email: Option<EmailConfig>,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Mock,
    Live,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteConfig {
    /// Swap the whole site for the coming-soon placeholder.
    #[serde(default)]
    pub maintenance: bool,
    #[serde(default)]
    pub data_source: DataSource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub api_key: String,
    pub from_email: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Studio inbox; falls back to `from_email` when unset, matching
    /// how the provider account is usually set up.
    #[serde(default)]
    pub to_email: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EmailConfig {
    pub fn to_dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            api_key: self.api_key.clone(),
            from_name: self.from_name.clone(),
            from_email: self.from_email.clone(),
            to_email: if self.to_email.is_empty() {
                self.from_email.clone()
            } else {
                self.to_email.clone()
            },
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

fn default_from_name() -> String {
    "Cedar Heights Music Academy".to_string()
}

fn default_endpoint() -> String {
    cedarheights_dispatch::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub slots: Vec<SlotEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CEDARHEIGHTS__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CEDARHEIGHTS")
                .separator("__")
                .try_parsing(true),
        );

        // Provider credentials are commonly set through their own names
        if let Ok(api_key) = env::var("BREVO_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }
        if let Ok(from_email) = env::var("BREVO_FROM") {
            builder = builder.set_override("email.from_email", from_email)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if let Some(email) = &self.email {
            if email.api_key.trim().is_empty() {
                return Err("email.api_key must not be empty when [email] is set".to_string());
            }
            if email.from_email.trim().is_empty() {
                return Err("email.from_email must not be empty when [email] is set".to_string());
            }
            if !email.from_email.contains('@') {
                return Err(format!(
                    "email.from_email '{}' is not an email address",
                    email.from_email
                ));
            }
            if email.timeout_secs == 0 {
                return Err("email.timeout_secs must be greater than 0".to_string());
            }
        }
        if self.site.data_source == DataSource::Live && self.schedule.slots.is_empty() {
            return Err(
                "site.data_source is 'live' but no [[schedule.slots]] are configured".to_string(),
            );
        }
        // Surface malformed slot tables at boot, not on first page view
        self.build_schedule().map_err(|err| err.to_string())?;
        Ok(())
    }

    /// The availability slate pages render and the wizard books against.
    pub fn build_schedule(&self) -> Result<Schedule, ScheduleError> {
        match self.site.data_source {
            DataSource::Mock => Ok(Schedule::demo()),
            DataSource::Live => Schedule::from_entries(&self.schedule.slots),
        }
    }
}
