//! Main entry point for the run viewer.
//!
//! [`RunViewer`] ties the pieces together: it loads the configuration,
//! finds the dataset, opens it read-only and runs interactive sessions
//! against it.

use std::path::{Path, PathBuf};

use runviewer_core::{LookupConfig, Presenter, Prompt, Result};
use runviewer_engine::{SessionEnd, SessionLoop};
use runviewer_storage::{locate_dataset, SqliteRecordStore};
use tracing::info;

/// An opened run database ready for lookups.
///
/// # Example
///
/// ```ignore
/// use runviewer::prelude::*;
///
/// let viewer = RunViewer::open(".")?;
/// viewer.run(&mut prompt, &mut presenter)?;
/// viewer.close()?;
/// ```
pub struct RunViewer {
    store: SqliteRecordStore,
    config: LookupConfig,
}

impl RunViewer {
    /// Open the single dataset in `dir`, reading `runviewer.toml` there if present.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::builder().dir(dir).open()
    }

    /// Create a builder for viewer configuration.
    pub fn builder() -> RunViewerBuilder {
        RunViewerBuilder::new()
    }

    /// Run one interactive session until the user exits.
    ///
    /// The dataset stays open across restarts within the session.
    pub fn run(&self, prompt: &mut dyn Prompt, presenter: &mut dyn Presenter) -> Result<SessionEnd> {
        SessionLoop::new(&self.store, self.config.clone()).run(prompt, presenter)
    }

    /// Close the dataset.
    ///
    /// Dropping the viewer also closes it; this reports close errors.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }

    /// Path of the open dataset.
    pub fn dataset_path(&self) -> &Path {
        self.store.path()
    }

    /// Active configuration.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

/// Builder for [`RunViewer`].
///
/// ```ignore
/// let viewer = RunViewer::builder()
///     .dir("./runs")
///     .config(LookupConfig::new().max_window_radius(Some(1800)))
///     .open()?;
/// ```
pub struct RunViewerBuilder {
    dir: PathBuf,
    dataset: Option<PathBuf>,
    config: Option<LookupConfig>,
}

impl RunViewerBuilder {
    /// Create a builder searching the current directory.
    pub fn new() -> Self {
        Self {
            dir: PathBuf::from("."),
            dataset: None,
            config: None,
        }
    }

    /// Directory to search for the dataset and configuration file.
    pub fn dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }

    /// Use this dataset file instead of searching for one.
    pub fn dataset(mut self, path: impl AsRef<Path>) -> Self {
        self.dataset = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use this configuration instead of `runviewer.toml`.
    pub fn config(mut self, config: LookupConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Resolve configuration and dataset, then open the dataset read-only.
    pub fn open(self) -> Result<RunViewer> {
        let config = match self.config {
            Some(config) => {
                config.validate()?;
                config
            }
            None => LookupConfig::load_or_default(&self.dir)?,
        };
        let path = match self.dataset {
            Some(path) => path,
            None => locate_dataset(&self.dir, &config.dataset_extension)?,
        };
        info!("Using dataset {}", path.display());
        let store = SqliteRecordStore::open(&path)?;
        Ok(RunViewer { store, config })
    }
}

impl Default for RunViewerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
