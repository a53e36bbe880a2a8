use serde_derive::{Deserialize, Serialize};

use crate::issue::Issue;

/// A project document: the unit of persistence. Issues live embedded in
/// their owning project and keep insertion order.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Project {
            name: name.into(),
            issues: Vec::new(),
        }
    }

    pub fn issue_by_id_mut(&mut self, issue_id: &str) -> Option<&mut Issue> {
        self.issues.iter_mut().find(|issue| issue.id == issue_id)
    }

    /// Removes the issue and returns it; `None` when the id is not present.
    pub fn remove_issue(&mut self, issue_id: &str) -> Option<Issue> {
        let index = self.issues.iter().position(|issue| issue.id == issue_id)?;
        Some(self.issues.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn issue_with_id(id: &str) -> Issue {
        let now = Utc::now();
        Issue {
            id: id.to_owned(),
            issue_title: "t".to_owned(),
            issue_text: "x".to_owned(),
            created_by: "dev".to_owned(),
            assigned_to: String::new(),
            status_text: String::new(),
            open: true,
            created_on: now,
            updated_on: now,
        }
    }

    #[test]
    fn remove_issue_preserves_order_of_the_rest() {
        let mut project = Project::new("apitest");
        project.issues.push(issue_with_id("a"));
        project.issues.push(issue_with_id("b"));
        project.issues.push(issue_with_id("c"));

        let removed = project.remove_issue("b");

        assert_eq!(removed.map(|issue| issue.id), Some("b".to_owned()));
        let remaining: Vec<_> = project.issues.iter().map(|issue| issue.id.as_str()).collect();
        assert_eq!(remaining, vec!["a", "c"]);
    }

    #[test]
    fn remove_unknown_issue_returns_none() {
        let mut project = Project::new("apitest");
        project.issues.push(issue_with_id("a"));

        assert!(project.remove_issue("zz").is_none());
        assert_eq!(project.issues.len(), 1);
    }
}
