use chrono::Utc;
use itrack_storage::{Issue, IssueFilter, IssueUpdate, Project, StoreBox};
use tracing::debug;
use ulid::Ulid;

pub mod errors;
mod load;

pub use errors::TrackerError;
pub use load::load;

/// Domain handle over the document store; one instance is shared by every
/// request.
pub struct Tracker {
    store: StoreBox,
}

pub struct CreateIssueInput {
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

impl Tracker {
    pub fn new(store: StoreBox) -> Self {
        Tracker { store }
    }

    pub async fn initialize(&self) -> eyre::Result<()> {
        self.store.init().await?;
        Ok(())
    }

    /// All issues of a project matching every supplied filter, in stored
    /// order. A project that was never seen yields an empty list.
    pub async fn list_issues(
        &self,
        project_name: &str,
        filter: IssueFilter,
    ) -> Result<Vec<Issue>, TrackerError> {
        let issues = self
            .store
            .find_issues(project_name.to_owned(), filter)
            .await?;

        Ok(issues)
    }

    /// Append a new issue to the project, creating the project document on
    /// first use. Returns the stored issue with its assigned id.
    pub async fn create_issue(
        &self,
        project_name: &str,
        input: CreateIssueInput,
    ) -> Result<Issue, TrackerError> {
        if input.issue_title.is_empty() || input.issue_text.is_empty() || input.created_by.is_empty()
        {
            return Err(TrackerError::RequiredFieldsMissing);
        }

        let now = Utc::now();
        let issue = Issue {
            id: Ulid::new().to_string(),
            issue_title: input.issue_title,
            issue_text: input.issue_text,
            created_by: input.created_by,
            assigned_to: input.assigned_to.unwrap_or_default(),
            status_text: input.status_text.unwrap_or_default(),
            open: true,
            created_on: now,
            updated_on: now,
        };

        let mut project = self
            .store
            .find_project(project_name.to_owned())
            .await?
            .unwrap_or_else(|| Project::new(project_name));

        project.issues.push(issue.clone());
        self.store.save_project(project).await?;

        debug!("created issue {} in project '{project_name}'", issue.id);
        Ok(issue)
    }

    /// Overwrite the supplied fields of one issue and refresh its
    /// `updated_on`. Fetches the whole project document, mutates the entry
    /// and saves the document back; no cross-writer guard.
    pub async fn update_issue(
        &self,
        project_name: &str,
        issue_id: &str,
        update: IssueUpdate,
    ) -> Result<(), TrackerError> {
        let mut project = self
            .store
            .find_project(project_name.to_owned())
            .await?
            .ok_or_else(|| TrackerError::IssueNotFound(issue_id.to_owned()))?;

        let issue = project
            .issue_by_id_mut(issue_id)
            .ok_or_else(|| TrackerError::IssueNotFound(issue_id.to_owned()))?;

        let merged = update.merge_with_issue(issue);
        *issue = merged;
        issue.updated_on = Utc::now();

        self.store.save_project(project).await?;
        Ok(())
    }

    /// Remove one issue from the project document. The project document is
    /// kept even when its last issue is removed.
    pub async fn delete_issue(&self, project_name: &str, issue_id: &str) -> Result<(), TrackerError> {
        let mut project = self
            .store
            .find_project(project_name.to_owned())
            .await?
            .ok_or_else(|| TrackerError::IssueNotFound(issue_id.to_owned()))?;

        project
            .remove_issue(issue_id)
            .ok_or_else(|| TrackerError::IssueNotFound(issue_id.to_owned()))?;

        self.store.save_project(project).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use itrack_storage::store::in_memory::InMemoryStore;

    use super::*;

    fn tracker() -> Tracker {
        Tracker::new(StoreBox::new(InMemoryStore::new()))
    }

    fn full_input() -> CreateIssueInput {
        CreateIssueInput {
            issue_title: "faucet drips".to_owned(),
            issue_text: "kitchen faucet drips overnight".to_owned(),
            created_by: "ana".to_owned(),
            assigned_to: Some("bob".to_owned()),
            status_text: Some("triaged".to_owned()),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_equal_timestamps() {
        let tracker = tracker();

        let issue = tracker.create_issue("apitest", full_input()).await.unwrap();

        assert!(!issue.id.is_empty());
        assert!(issue.open);
        assert_eq!(issue.created_on, issue.updated_on);
        assert_eq!(issue.assigned_to, "bob");
        assert_eq!(issue.status_text, "triaged");
    }

    #[tokio::test]
    async fn create_defaults_optional_fields_to_empty() {
        let tracker = tracker();
        let input = CreateIssueInput {
            assigned_to: None,
            status_text: None,
            ..full_input()
        };

        let issue = tracker.create_issue("apitest", input).await.unwrap();

        assert_eq!(issue.assigned_to, "");
        assert_eq!(issue.status_text, "");
    }

    #[tokio::test]
    async fn create_rejects_empty_required_fields_without_mutation() {
        let tracker = tracker();
        let input = CreateIssueInput {
            created_by: String::new(),
            ..full_input()
        };

        let result = tracker.create_issue("apitest", input).await;

        assert!(matches!(result, Err(TrackerError::RequiredFieldsMissing)));
        let issues = tracker
            .list_issues("apitest", IssueFilter::default())
            .await
            .unwrap();
        assert!(issues.is_empty());
    }

    #[tokio::test]
    async fn issues_keep_insertion_order() {
        let tracker = tracker();
        for title in ["one", "two", "three"] {
            let input = CreateIssueInput {
                issue_title: title.to_owned(),
                ..full_input()
            };
            tracker.create_issue("apitest", input).await.unwrap();
        }

        let issues = tracker
            .list_issues("apitest", IssueFilter::default())
            .await
            .unwrap();
        let titles: Vec<_> = issues.iter().map(|issue| issue.issue_title.as_str()).collect();

        assert_eq!(titles, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn update_changes_one_field_and_refreshes_updated_on() {
        let tracker = tracker();
        let issue = tracker.create_issue("apitest", full_input()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let update = IssueUpdate {
            status_text: Some("fixed".to_owned()),
            ..Default::default()
        };
        tracker
            .update_issue("apitest", &issue.id, update)
            .await
            .unwrap();

        let filter = IssueFilter {
            id: Some(issue.id.clone()),
            ..Default::default()
        };
        let stored = tracker
            .list_issues("apitest", filter)
            .await
            .unwrap()
            .pop()
            .unwrap();

        assert_eq!(stored.status_text, "fixed");
        assert_eq!(stored.issue_title, issue.issue_title);
        assert_eq!(stored.created_on, issue.created_on);
        assert!(stored.updated_on > issue.updated_on);
    }

    #[tokio::test]
    async fn update_with_unknown_id_reports_not_found() {
        let tracker = tracker();
        tracker.create_issue("apitest", full_input()).await.unwrap();

        let update = IssueUpdate {
            open: Some(false),
            ..Default::default()
        };
        let result = tracker.update_issue("apitest", "nope", update).await;

        assert!(matches!(result, Err(TrackerError::IssueNotFound(id)) if id == "nope"));
    }

    #[tokio::test]
    async fn update_on_unknown_project_reports_not_found() {
        let tracker = tracker();

        let update = IssueUpdate {
            open: Some(false),
            ..Default::default()
        };
        let result = tracker.update_issue("ghost", "a", update).await;

        assert!(matches!(result, Err(TrackerError::IssueNotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_issue_and_keeps_the_project() {
        let tracker = tracker();
        let issue = tracker.create_issue("apitest", full_input()).await.unwrap();

        tracker.delete_issue("apitest", &issue.id).await.unwrap();

        let issues = tracker
            .list_issues("apitest", IssueFilter::default())
            .await
            .unwrap();
        assert!(issues.is_empty());
    }

    #[tokio::test]
    async fn delete_with_unknown_id_reports_not_found() {
        let tracker = tracker();
        tracker.create_issue("apitest", full_input()).await.unwrap();

        let result = tracker.delete_issue("apitest", "nope").await;

        assert!(matches!(result, Err(TrackerError::IssueNotFound(id)) if id == "nope"));
    }
}
