mod files;
mod loader;
mod model;
mod validation;

pub use files::{ConfigFiles, SystemConfigFiles};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    CONFIG_VERSION, ComparisonPage, CountryPage, DEFAULT_COUNTRIES, DailyPanel, DataConfig,
    OverlayChart, RatePanel, ReportConfig, TablePanel,
};
pub use validation::validate_config_semantics;
