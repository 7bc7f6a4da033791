//! DTOs for the app submission endpoint.

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::Submission;
use crate::error::AppError;

/// Raw submission payload.
///
/// Every field is optional at this layer: presence is checked by the shared
/// [`Submission`] schema, not by deserialization, so that passthrough mode can
/// still forward incomplete submissions.
///
/// Accepted encodings:
/// - `application/x-www-form-urlencoded`
/// - JSON, regardless of the declared content type (browsers posting a
///   stringified object send `text/plain`)
#[derive(Debug, Default, Deserialize)]
pub struct SubmitAppRequest {
    pub email: Option<String>,
    pub link: Option<String>,
    pub twitter: Option<String>,
    /// Client-generated token identifying one submission attempt.
    pub idempotency_key: Option<String>,
}

impl SubmitAppRequest {
    /// Splits the payload into the domain submission and its idempotency key.
    pub fn into_parts(self) -> (Submission, Option<String>) {
        (
            Submission::from_parts(self.email, self.link, self.twitter),
            self.idempotency_key,
        )
    }
}

impl<S> FromRequest<S> for SubmitAppRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(payload) = Form::<SubmitAppRequest>::from_request(req, state)
                .await
                .map_err(|e| {
                    AppError::bad_request(
                        "Malformed form body",
                        json!({ "reason": e.body_text() }),
                    )
                })?;
            return Ok(payload);
        }

        let body = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Unreadable request body", json!({ "reason": e.body_text() }))
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            AppError::bad_request("Malformed JSON body", json!({ "reason": e.to_string() }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_parts() {
        let payload: SubmitAppRequest = serde_json::from_value(json!({
            "email": "a@b.com",
            "link": "https://x.io",
            "twitter": "",
            "idempotency_key": "k-1"
        }))
        .unwrap();

        let (submission, key) = payload.into_parts();
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.link, "https://x.io");
        assert!(submission.twitter.is_none());
        assert_eq!(key.as_deref(), Some("k-1"));
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let payload: SubmitAppRequest = serde_json::from_value(json!({})).unwrap();
        let (submission, key) = payload.into_parts();

        assert_eq!(submission.email, "");
        assert_eq!(submission.link, "");
        assert!(key.is_none());
    }
}
