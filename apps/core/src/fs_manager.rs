use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the local fallback store inside the data directory.
const LOCAL_STORE_FILENAME: &str = "survey_responses.json";

/// Layout of the on-disk data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `./data` relative to the working directory.
    pub fn default_location() -> Self {
        Self::new(Path::new(".").join("data"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// JSON file backing the local fallback store.
    pub fn local_store_file(&self) -> PathBuf {
        self.root.join(LOCAL_STORE_FILENAME)
    }

    /// Creates the data directory if it does not exist.
    pub fn init(&self) -> Result<(), std::io::Error> {
        if !self.root.exists() {
            info!("Creating data directory: {:?}", self.root);
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}
