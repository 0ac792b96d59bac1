use skeleton_core::{ConfigFile, SkeletonConfig, SkeletonError};
use std::sync::OnceLock;

static CONFIG: OnceLock<SkeletonConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "skeleton.toml";

/// Parse and validate the contents of a `skeleton.toml`.
pub fn parse_config(contents: &str) -> Result<SkeletonConfig, SkeletonError> {
    let file: ConfigFile = toml::from_str(contents)
        .map_err(|e| SkeletonError::invalid_config(CONFIG_PATH, e.to_string()))?;
    file.skeleton.validate()?;
    Ok(file.skeleton)
}

/// Read `skeleton.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// A missing, unparseable, or invalid file yields the built-in defaults.
pub fn load_config() -> &'static SkeletonConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                tracing::info!(variant = config.variant.as_str(), "loaded {CONFIG_PATH}");
                config
            }
            Err(e) => {
                tracing::warn!("{CONFIG_PATH} rejected ({e}), using defaults");
                SkeletonConfig::default()
            }
        },
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not found ({e}), using defaults");
            SkeletonConfig::default()
        }
    })
}
