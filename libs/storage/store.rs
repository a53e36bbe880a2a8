pub mod in_memory;
pub mod json_dir;

use derive_more::{Deref, DerefMut};

use crate::{
    errors::StoreResult,
    issue::{Issue, IssueFilter},
    project::Project,
    PinFuture,
};

#[derive(Deref, DerefMut)]
#[deref(forward)]
#[deref_mut(forward)]
pub struct StoreBox(Box<dyn Store>);

impl StoreBox {
    pub fn new(store: impl Store + 'static) -> Self {
        Self(Box::new(store))
    }
}

/// Document-store collaborator: projects are whole documents, issues are
/// embedded sub-documents. Saves overwrite the whole project document, the
/// last writer wins.
pub trait Store: Send + Sync {
    /// Prepare the backend (create directories, ...)
    fn init(&self) -> PinFuture<StoreResult<()>>;

    // Fetch a single project document by name
    fn find_project(&self, name: String) -> PinFuture<StoreResult<Option<Project>>>;

    // Equality-filtered issue query; an unknown project yields an empty list
    fn find_issues(&self, name: String, filter: IssueFilter) -> PinFuture<StoreResult<Vec<Issue>>>;

    // Whole-document save, upsert by project name
    fn save_project(&self, project: Project) -> PinFuture<StoreResult<()>>;
}
