//! Lookup configuration.
//!
//! Defaults reproduce the stock behaviour: a 90-frame (3 second) window that
//! grows by 90 frames per unsuccessful search, with no cap, over the single
//! `*.sqlite` file in the working directory.
//!
//! ```ignore
//! use runviewer_core::LookupConfig;
//!
//! let config = LookupConfig::new().max_window_radius(Some(1800));
//! ```
//!
//! A `runviewer.toml` next to the dataset overrides any field:
//!
//! ```toml
//! base_window_radius = 60
//! window_radius_step = 30
//! max_window_radius = 900
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "runviewer.toml";

/// Default half-width of the first fallback window, in frames.
pub const DEFAULT_WINDOW_RADIUS: u64 = 90;

/// Default growth of the window after each empty fallback search, in frames.
pub const DEFAULT_WINDOW_STEP: u64 = 90;

/// Settings for one lookup session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    /// Half-width of the first fallback window, in frames.
    pub base_window_radius: u64,
    /// Frames added to the radius after each empty window.
    pub window_radius_step: u64,
    /// `None` lets the window grow without bound.
    pub max_window_radius: Option<u64>,
    /// Extension of the dataset file, without the dot.
    pub dataset_extension: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_window_radius: DEFAULT_WINDOW_RADIUS,
            window_radius_step: DEFAULT_WINDOW_STEP,
            max_window_radius: None,
            dataset_extension: "sqlite".to_string(),
        }
    }
}

impl LookupConfig {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first window's half-width.
    pub fn base_window_radius(mut self, frames: u64) -> Self {
        self.base_window_radius = frames;
        self
    }

    /// Set the growth per empty window.
    pub fn window_radius_step(mut self, frames: u64) -> Self {
        self.window_radius_step = frames;
        self
    }

    /// Cap the window radius, or `None` for no cap.
    pub fn max_window_radius(mut self, frames: Option<u64>) -> Self {
        self.max_window_radius = frames;
        self
    }

    /// Set the dataset extension, without the dot.
    pub fn dataset_extension(mut self, extension: impl Into<String>) -> Self {
        self.dataset_extension = extension.into();
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: LookupConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `runviewer.toml` from `dir`, falling back to defaults when absent.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&text)
    }

    /// Reject settings the search loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.base_window_radius == 0 {
            return Err(Error::Config("base_window_radius must be positive".into()));
        }
        if self.window_radius_step == 0 {
            return Err(Error::Config("window_radius_step must be positive".into()));
        }
        if let Some(cap) = self.max_window_radius {
            if cap < self.base_window_radius {
                return Err(Error::Config(format!(
                    "max_window_radius {} is below base_window_radius {}",
                    cap, self.base_window_radius
                )));
            }
        }
        if self.dataset_extension.is_empty() || self.dataset_extension.starts_with('.') {
            return Err(Error::Config(
                "dataset_extension must be a bare extension such as \"sqlite\"".into(),
            ));
        }
        Ok(())
    }
}
