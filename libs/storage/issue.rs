use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

pub type IssueId = String;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
    pub open: bool,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Partial update of an issue; a `Some` field overwrites the stored value,
/// a `None` field leaves it untouched. The issue id and both timestamps are
/// never part of an update.
#[derive(Default, Debug, Deserialize, PartialEq, Clone)]
pub struct IssueUpdate {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl IssueUpdate {
    /// True when at least one field was explicitly supplied. `open: false`
    /// counts as supplied.
    pub fn has_changes(&self) -> bool {
        self.issue_title.is_some()
            || self.issue_text.is_some()
            || self.created_by.is_some()
            || self.assigned_to.is_some()
            || self.status_text.is_some()
            || self.open.is_some()
    }

    pub fn merge_with_issue(self, issue: &Issue) -> Issue {
        Issue {
            id: issue.id.clone(),
            issue_title: self.issue_title.unwrap_or(issue.issue_title.clone()),
            issue_text: self.issue_text.unwrap_or(issue.issue_text.clone()),
            created_by: self.created_by.unwrap_or(issue.created_by.clone()),
            assigned_to: self.assigned_to.unwrap_or(issue.assigned_to.clone()),
            status_text: self.status_text.unwrap_or(issue.status_text.clone()),
            open: self.open.unwrap_or(issue.open),
            created_on: issue.created_on,
            updated_on: issue.updated_on,
        }
    }
}

/// Equality filters over issue attributes, matched conjunctively. Values
/// arrive as the raw query-string literals; `open` only ever matches the
/// literals "true" and "false".
#[derive(Default, Debug, Deserialize, PartialEq, Clone)]
pub struct IssueFilter {
    pub id: Option<String>,
    pub open: Option<String>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

impl IssueFilter {
    pub fn matches(&self, issue: &Issue) -> bool {
        fn text_eq(filter: &Option<String>, value: &str) -> bool {
            filter.as_deref().map_or(true, |wanted| wanted == value)
        }

        let open_eq = self
            .open
            .as_deref()
            .map_or(true, |wanted| wanted == if issue.open { "true" } else { "false" });

        text_eq(&self.id, &issue.id)
            && open_eq
            && text_eq(&self.issue_title, &issue.issue_title)
            && text_eq(&self.issue_text, &issue.issue_text)
            && text_eq(&self.created_by, &issue.created_by)
            && text_eq(&self.assigned_to, &issue.assigned_to)
            && text_eq(&self.status_text, &issue.status_text)
    }
}
