mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DeliveryModeSetting, ExportSettings, LoggingSettings, ReportingSettings, ServerSettings,
    Settings, StorageProviderSetting, StorageSettings,
};
