use std::path::PathBuf;

use serde_derive::Deserialize;
use tracing::{instrument, trace};

use crate::{
    errors::{StoreError, StoreResult},
    Issue, IssueFilter, PinFuture, Project, Store, StoreBox, StoreConfig,
};

/// Saves each project as a json document inside a flat directory; the
/// project name is the file stem. Reads load the whole document, saves
/// rewrite the whole file.
pub struct JsonDirStore {
    root: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
pub struct JsonDirStoreConfig {
    /// Where the project documents will be located (default: "~/.local/share/itrack")
    pub store_location: Option<String>,
}

impl JsonDirStoreConfig {
    fn get_store_location(&self) -> eyre::Result<PathBuf> {
        let raw = self
            .store_location
            .as_deref()
            .unwrap_or("~/.local/share/itrack");

        Ok(PathBuf::from(shellexpand::full(raw)?.into_owned()))
    }
}

impl StoreConfig for JsonDirStoreConfig {
    type Store = JsonDirStore;

    fn try_into_store(self) -> eyre::Result<StoreBox> {
        Ok(StoreBox::new(JsonDirStore::new(self.get_store_location()?)))
    }
}

impl JsonDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonDirStore { root: root.into() }
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    #[instrument(skip(self))]
    fn read_project(&self, name: &str) -> StoreResult<Option<Project>> {
        trace!("Read project document");
        let path = self.document_path(name);

        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)?;
        let project = serde_json::from_str(&contents).map_err(StoreError::corrupted_document)?;
        Ok(Some(project))
    }

    #[instrument(skip(self, project), fields(name = %project.name))]
    fn write_project(&self, project: &Project) -> StoreResult<()> {
        trace!("Write project document");
        let serialized =
            serde_json::to_string_pretty(project).map_err(StoreError::corrupted_document)?;

        std::fs::write(self.document_path(&project.name), serialized.as_bytes())?;
        Ok(())
    }
}

impl Store for JsonDirStore {
    fn init(&self) -> PinFuture<StoreResult<()>> {
        Box::pin(async move {
            std::fs::create_dir_all(&self.root)?;
            Ok(())
        })
    }

    fn find_project(&self, name: String) -> PinFuture<StoreResult<Option<Project>>> {
        Box::pin(async move { self.read_project(&name) })
    }

    fn find_issues(&self, name: String, filter: IssueFilter) -> PinFuture<StoreResult<Vec<Issue>>> {
        Box::pin(async move {
            let issues = match self.read_project(&name)? {
                Some(project) => project
                    .issues
                    .into_iter()
                    .filter(|issue| filter.matches(issue))
                    .collect(),
                None => Vec::new(),
            };

            Ok(issues)
        })
    }

    fn save_project(&self, project: Project) -> PinFuture<StoreResult<()>> {
        Box::pin(async move { self.write_project(&project) })
    }
}
