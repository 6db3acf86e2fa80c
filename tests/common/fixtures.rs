use std::cell::RefCell;

use tempfile::TempDir;

use folio::{JsonFileStore, PortfolioRecord, PortfolioStore, Project, SocialLink};

/// Store backed by a file inside a fresh temp directory. The directory must
/// stay alive for the duration of the test.
pub fn temp_store() -> (JsonFileStore, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let store = JsonFileStore::new(dir.path().join("portfolio.json"));
    (store, dir)
}

pub fn project_titled(title: &str) -> Project {
    Project {
        title: title.to_string(),
        description: format!("{title} description"),
        ..Project::default()
    }
}

/// A filled-in record with three projects titled A, B and C.
pub fn sample_record() -> PortfolioRecord {
    PortfolioRecord {
        name: "Ada Lovelace".to_string(),
        tagline: "Analyst & Metaphysician".to_string(),
        about: "I write programs for machines that do not exist yet.".to_string(),
        skills: "Mathematics, Notes, Compiling".to_string(),
        interests: "Music, Horses".to_string(),
        projects: vec![
            project_titled("A"),
            project_titled("B"),
            project_titled("C"),
        ],
        social_links: vec![SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/ada".to_string(),
            ..SocialLink::default()
        }],
        ..PortfolioRecord::default()
    }
}

pub fn titles(record: &PortfolioRecord) -> Vec<&str> {
    record.projects.iter().map(|p| p.title.as_str()).collect()
}

/// In-memory store that records every save, for asserting exactly when (and
/// with what) a component writes back.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub saves: RefCell<Vec<PortfolioRecord>>,
}

impl RecordingStore {
    pub fn save_count(&self) -> usize {
        self.saves.borrow().len()
    }

    pub fn last_saved(&self) -> Option<PortfolioRecord> {
        self.saves.borrow().last().cloned()
    }
}

impl PortfolioStore for RecordingStore {
    fn load(&self) -> anyhow::Result<Option<PortfolioRecord>> {
        Ok(self.last_saved())
    }

    fn save(&self, record: &PortfolioRecord) -> anyhow::Result<()> {
        self.saves.borrow_mut().push(record.clone());
        Ok(())
    }
}
