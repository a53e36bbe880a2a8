use bytes::Bytes;
use http_body_util::Full;
use hyper::http::request::Parts;
use hyper::{Method, Response, StatusCode};
use itrack_core::{CreateIssueInput, Tracker, TrackerError};
use itrack_storage::{IssueFilter, IssueUpdate};
use tracing::{error, instrument};

use super::{json_response, parse_body};
use crate::dto::{
    CreateIssueBody, DeleteIssueBody, ErrorBody, IssueListBody, ResultBody, UpdateIssueBody,
};

#[instrument(skip_all, fields(project = %project, method = %parts.method))]
pub(crate) async fn handle(
    tracker: &Tracker,
    project: &str,
    parts: &Parts,
    body: &[u8],
) -> Response<Full<Bytes>> {
    match parts.method {
        Method::GET => list(tracker, project, parts.uri.query()).await,
        Method::POST => create(tracker, project, parts, body).await,
        Method::PUT => update(tracker, project, parts, body).await,
        Method::DELETE => delete(tracker, project, parts, body).await,
        _ => json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            &ErrorBody::new("method not allowed"),
        ),
    }
}

async fn list(tracker: &Tracker, project: &str, query: Option<&str>) -> Response<Full<Bytes>> {
    let filter: IssueFilter = serde_urlencoded::from_str(query.unwrap_or("")).unwrap_or_default();

    match tracker.list_issues(project, filter).await {
        Ok(issues) => json_response(StatusCode::OK, &IssueListBody { project, issues }),
        Err(err) => {
            error!("listing issues of '{project}' failed: {err}");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorBody::new("Error retrieving issues"),
            )
        }
    }
}

async fn create(
    tracker: &Tracker,
    project: &str,
    parts: &Parts,
    body: &[u8],
) -> Response<Full<Bytes>> {
    // An unreadable body is handled like an empty one: the required-field
    // check reports it
    let body: CreateIssueBody = parse_body(parts, body).unwrap_or_default();

    let input = CreateIssueInput {
        issue_title: body.issue_title.unwrap_or_default(),
        issue_text: body.issue_text.unwrap_or_default(),
        created_by: body.created_by.unwrap_or_default(),
        assigned_to: body.assigned_to,
        status_text: body.status_text,
    };

    match tracker.create_issue(project, input).await {
        Ok(issue) => json_response(StatusCode::OK, &issue),
        Err(TrackerError::RequiredFieldsMissing) => json_response(
            StatusCode::OK,
            &ErrorBody::new("required field(s) missing"),
        ),
        Err(err) => {
            error!("creating issue in '{project}' failed: {err}");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorBody::new("Error saving issue"),
            )
        }
    }
}

async fn update(
    tracker: &Tracker,
    project: &str,
    parts: &Parts,
    body: &[u8],
) -> Response<Full<Bytes>> {
    let body: UpdateIssueBody = parse_body(parts, body).unwrap_or_default();

    let Some(id) = body.id.filter(|id| !id.is_empty()) else {
        return json_response(StatusCode::OK, &ErrorBody::new("missing _id"));
    };

    let update = IssueUpdate {
        issue_title: body.issue_title,
        issue_text: body.issue_text,
        created_by: body.created_by,
        assigned_to: body.assigned_to,
        status_text: body.status_text,
        open: body.open,
    };

    if !update.has_changes() {
        return json_response(
            StatusCode::OK,
            &ErrorBody::with_id("no update field(s) sent", &id),
        );
    }

    match tracker.update_issue(project, &id, update).await {
        Ok(()) => json_response(
            StatusCode::OK,
            &ResultBody {
                result: "successfully updated",
                id: &id,
            },
        ),
        Err(err) => {
            // Lookup misses and store failures share one payload shape
            if let TrackerError::Store(store_err) = &err {
                error!("updating issue '{id}' in '{project}' failed: {store_err}");
            }
            json_response(StatusCode::OK, &ErrorBody::with_id("could not update", &id))
        }
    }
}

async fn delete(
    tracker: &Tracker,
    project: &str,
    parts: &Parts,
    body: &[u8],
) -> Response<Full<Bytes>> {
    let body: DeleteIssueBody = parse_body(parts, body).unwrap_or_default();

    let Some(id) = body.id.filter(|id| !id.is_empty()) else {
        return json_response(StatusCode::OK, &ErrorBody::new("missing _id"));
    };

    match tracker.delete_issue(project, &id).await {
        Ok(()) => json_response(
            StatusCode::OK,
            &ResultBody {
                result: "successfully deleted",
                id: &id,
            },
        ),
        Err(err) => {
            if let TrackerError::Store(store_err) = &err {
                error!("deleting issue '{id}' in '{project}' failed: {store_err}");
            }
            json_response(StatusCode::OK, &ErrorBody::with_id("could not delete", &id))
        }
    }
}
