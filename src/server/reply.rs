//! Transport-independent request handling.

use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::{header, HeaderValue, Method, StatusCode};

use crate::revision::RevisionStore;

/// Content type of every response.
pub const CONTENT_TYPE: &str = "text/plain";

/// Outcome of handling one request against a [`RevisionStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionReply {
    /// Status to send. `None` leaves the transport default in place.
    pub status: Option<StatusCode>,

    /// Response body.
    pub body: Bytes,
}

impl RevisionReply {
    fn new(status: StatusCode, body: Bytes) -> Self {
        Self {
            status: Some(status),
            body,
        }
    }

    fn unhandled() -> Self {
        Self {
            status: None,
            body: Bytes::new(),
        }
    }

    /// Status after applying the transport default of `200 OK`.
    pub fn status_or_default(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }
}

impl RevisionStore {
    /// Answer a request with the given method. The request path is irrelevant.
    ///
    /// GET carries the revision or the error tag; HEAD only the status. Other
    /// methods produce no status and no body.
    pub fn handle(&self, method: &Method) -> RevisionReply {
        let with_body = if *method == Method::GET {
            true
        } else if *method == Method::HEAD {
            false
        } else {
            return RevisionReply::unhandled();
        };

        match self.current_revision() {
            Ok(revision) if with_body => RevisionReply::new(StatusCode::OK, revision),
            Ok(_) => RevisionReply::new(StatusCode::OK, Bytes::new()),
            Err(e) if with_body => RevisionReply::new(
                StatusCode::NOT_FOUND,
                Bytes::from_static(e.tag().as_bytes()),
            ),
            Err(_) => RevisionReply::new(StatusCode::NOT_FOUND, Bytes::new()),
        }
    }
}

impl IntoResponse for RevisionReply {
    fn into_response(self) -> Response {
        let status = self.status_or_default();
        let mut response = (status, self.body).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
        response
    }
}
