use dashmap::DashMap;
use serde_derive::Deserialize;

use crate::{
    errors::StoreResult, Issue, IssueFilter, PinFuture, Project, Store, StoreBox, StoreConfig,
};

/// This store type is used for testing, data is not persisted to disk but
/// only present in memory
#[derive(Default)]
pub struct InMemoryStore {
    projects: DashMap<String, Project>,
}

#[derive(Debug, Deserialize, Default)]
pub struct InMemoryStoreConfig {}

impl StoreConfig for InMemoryStoreConfig {
    type Store = InMemoryStore;

    fn try_into_store(self) -> eyre::Result<StoreBox> {
        Ok(StoreBox::new(InMemoryStore::new()))
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            projects: DashMap::new(),
        }
    }
}

impl Store for InMemoryStore {
    fn init(&self) -> PinFuture<StoreResult<()>> {
        Box::pin(async move { Ok(()) })
    }

    fn find_project(&self, name: String) -> PinFuture<StoreResult<Option<Project>>> {
        Box::pin(async move { Ok(self.projects.get(&name).map(|entry| entry.value().clone())) })
    }

    fn find_issues(&self, name: String, filter: IssueFilter) -> PinFuture<StoreResult<Vec<Issue>>> {
        Box::pin(async move {
            let issues = match self.projects.get(&name) {
                Some(entry) => entry
                    .value()
                    .issues
                    .iter()
                    .filter(|issue| filter.matches(issue))
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };

            Ok(issues)
        })
    }

    fn save_project(&self, project: Project) -> PinFuture<StoreResult<()>> {
        Box::pin(async move {
            self.projects.insert(project.name.clone(), project);
            Ok(())
        })
    }
}
