mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    ArtifactsConfig, ChartsConfig, ColumnsConfig, ConfusionDisplay, MetricAxisConfig,
    PagesConfig, ReportConfig, TableConfig,
};
pub use validation::validate_config;
