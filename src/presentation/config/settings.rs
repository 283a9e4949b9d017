use config::{Config, ConfigError, File, Map};
use serde::Deserialize;

use super::Environment;
use crate::application::services::DEFAULT_MILEAGE_RATE;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub reporting: ReportingSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportingSettings {
    /// Currency units deducted per mile driven.
    pub mileage_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    pub delivery: DeliveryModeSetting,
    pub documents_dir: String,
    #[serde(default)]
    pub share_command: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryModeSetting {
    Download,
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<env>` if present, then `APP__SECTION__KEY`
    /// environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::build(environment, app_variables())
    }

    /// Same layering as [`Settings::load`], reading `APP__` variables from
    /// `vars` instead of the process environment.
    pub fn load_from_vars(
        environment: Environment,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::build(environment, app_variables().source(Some(vars)))
    }

    fn build(
        environment: Environment,
        variables: config::Environment,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("storage.provider", "local")?
            .set_default("storage.local_path", "./data")?
            .set_default("reporting.mileage_rate", DEFAULT_MILEAGE_RATE)?
            .set_default("export.delivery", "download")?
            .set_default("export.documents_dir", "./exports")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(variables)
            .build()?
            .try_deserialize()
    }
}

fn app_variables() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
