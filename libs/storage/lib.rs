use std::{future::Future, pin::Pin};

use strum_macros::{Display, EnumString};

pub mod errors;
mod issue;
mod project;
pub mod store;
mod store_config;

pub use errors::{StoreError, StoreResult};
pub use issue::{Issue, IssueFilter, IssueId, IssueUpdate};
pub use project::Project;
pub use store::{Store, StoreBox};
pub use store_config::StoreConfig;

pub type PinFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Store backends shipped with this workspace, selected by the `store_type`
/// configuration key.
#[derive(Clone, Debug, PartialEq, Eq, EnumString, Display)]
pub enum BuiltinStoreType {
    /// One json document per project inside a flat directory
    #[strum(serialize = "json")]
    Json,
    /// Ephemeral store, used by the test suite
    #[strum(serialize = "memory")]
    InMemory,
}
