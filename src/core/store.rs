use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::warn;

use crate::models::PortfolioRecord;

pub const STORE_FILE_NAME: &str = "portfolio.json";

/// Storage boundary shared by the editor and the renderer.
///
/// There is exactly one record per store; `save` replaces it wholesale.
/// A missing record is a normal first-run condition, not an error.
pub trait PortfolioStore {
    fn load(&self) -> anyhow::Result<Option<PortfolioRecord>>;
    fn save(&self, record: &PortfolioRecord) -> anyhow::Result<()>;
}

/// File-backed store holding one JSON-serialized [`PortfolioRecord`].
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Default data file under the platform data directory.
    pub fn default_data_file() -> anyhow::Result<PathBuf> {
        let mut dir = dirs::data_dir().context("no data directory available on this platform")?;
        dir.push("folio");
        dir.push(STORE_FILE_NAME);
        Ok(dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PortfolioStore for JsonFileStore {
    fn load(&self) -> anyhow::Result<Option<PortfolioRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read portfolio data {:?}", self.path));
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                // Fail closed: a corrupt file is treated like a first run
                // rather than aborting the app.
                warn!("ignoring malformed portfolio data in {:?}: {e}", self.path);
                Ok(None)
            }
        }
    }

    fn save(&self, record: &PortfolioRecord) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create data directory {parent:?}"))?;
        }
        let json = serde_json::to_string_pretty(record).context("failed to serialize portfolio")?;

        // Write-then-rename so a crash mid-save never leaves a truncated file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("failed to write {tmp:?}"))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace portfolio data {:?}", self.path))?;
        Ok(())
    }
}
