mod issues;

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::http::request::Parts;
use hyper::{Method, Response, StatusCode};
use itrack_core::Tracker;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dto::{ErrorBody, HealthBody};

/// Route an already-collected request to its handler. Everything returned
/// from here is a json body.
pub async fn dispatch(tracker: &Tracker, parts: &Parts, body: &[u8]) -> Response<Full<Bytes>> {
    let path = parts.uri.path();

    if path == "/health" && parts.method == Method::GET {
        return json_response(StatusCode::OK, &HealthBody { status: "ok" });
    }

    // `{project}` is a single path segment; it is never percent-decoded, so
    // it cannot smuggle a separator
    if let Some(project) = path
        .strip_prefix("/api/issues/")
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
    {
        return issues::handle(tracker, project, parts, body).await;
    }

    json_response(StatusCode::NOT_FOUND, &ErrorBody::new("not found"))
}

pub(crate) fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response<Full<Bytes>> {
    let payload = serde_json::to_vec(value).unwrap_or_default();

    let mut response = Response::new(Full::new(Bytes::from(payload)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    response
}

/// Request bodies are json or an url-encoded form, picked on Content-Type.
pub(crate) fn parse_body<T: DeserializeOwned>(parts: &Parts, body: &[u8]) -> eyre::Result<T> {
    let is_json = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("json"))
        .unwrap_or(false);

    if is_json {
        Ok(serde_json::from_slice(body)?)
    } else {
        Ok(serde_urlencoded::from_bytes(body)?)
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use itrack_storage::{store::in_memory::InMemoryStore, StoreBox};

    use super::*;

    fn tracker() -> Tracker {
        Tracker::new(StoreBox::new(InMemoryStore::new()))
    }

    async fn get(tracker: &Tracker, path: &str) -> (StatusCode, serde_json::Value) {
        let (parts, _) = hyper::Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(())
            .unwrap()
            .into_parts();

        let response = dispatch(tracker, &parts, b"").await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let tracker = tracker();

        let (status, body) = get(&tracker, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn unknown_paths_get_a_json_404() {
        let tracker = tracker();

        for path in ["/", "/api", "/api/issues", "/api/issues/a/b"] {
            let (status, body) = get(&tracker, path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "path {path}");
            assert_eq!(body, serde_json::json!({"error": "not found"}));
        }
    }
}
