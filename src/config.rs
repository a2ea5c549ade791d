use std::path::PathBuf;

use crate::images::FsImageSource;

pub const OUTPUT_DIR_ENV: &str = "ACTIVITY_PDF_OUTPUT_DIR";
pub const ASSETS_ENV: &str = "ACTIVITY_PDF_ASSETS";
pub const DEFAULT_OUTPUT_DIR: &str = "./uploads";

/// Where rendered forms are written and where relative image references
/// are looked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    pub asset_dir: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            asset_dir: None,
        }
    }
}

impl RenderConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            asset_dir: None,
        }
    }

    pub fn with_asset_dir(mut self, asset_dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = Some(asset_dir.into());
        self
    }

    /// Build from `ACTIVITY_PDF_OUTPUT_DIR` and `ACTIVITY_PDF_ASSETS`.
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Self {
        let var = |name: &str| {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        let config = Self {
            output_dir: var(OUTPUT_DIR_ENV).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            asset_dir: var(ASSETS_ENV),
        };
        log::debug!("Render config: {config:?}");
        config
    }

    pub fn image_source(&self) -> FsImageSource {
        FsImageSource::new(self.asset_dir.clone())
    }
}
