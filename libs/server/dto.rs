use itrack_storage::Issue;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct CreateIssueBody {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
}

/// Update body; every field is optional and only explicitly supplied keys
/// are applied, `open: false` included.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateIssueBody {
    pub id: Option<String>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteIssueBody {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IssueListBody<'a> {
    pub project: &'a str,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Serialize)]
pub struct ResultBody<'a> {
    pub result: &'a str,
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
}

impl<'a> ErrorBody<'a> {
    pub fn new(error: &'a str) -> Self {
        ErrorBody { error, id: None }
    }

    pub fn with_id(error: &'a str, id: &'a str) -> Self {
        ErrorBody {
            error,
            id: Some(id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}
