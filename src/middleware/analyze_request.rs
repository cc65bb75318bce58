use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Map, Value};

use crate::error::BackendError;

/// Any JSON object. The analysis stub never reads it.
pub type AnalyzeRequestBody = Map<String, Value>;

/// Accepts any JSON object body and reports rejections in the `{"detail": ...}` shape.
///
/// A body without a `Content-Type` header is still parsed as JSON. Unparsable or
/// non-object bodies are 422.
pub struct AnalyzePayload(pub AnalyzeRequestBody);

impl<S> FromRequest<S> for AnalyzePayload
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(CONTENT_TYPE) {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| {
                    BackendError::InvalidBody(rejection.body_text(), rejection.status())
                })?;
            return serde_json::from_slice::<AnalyzeRequestBody>(&bytes)
                .map(AnalyzePayload)
                .map_err(|e| {
                    BackendError::InvalidBody(
                        format!("Failed to parse the request body as JSON: {e}"),
                        StatusCode::UNPROCESSABLE_ENTITY,
                    )
                });
        }

        match Json::<AnalyzeRequestBody>::from_request(req, state).await {
            Ok(Json(body)) => Ok(AnalyzePayload(body)),
            Err(rejection) => {
                let status = match &rejection {
                    JsonRejection::JsonSyntaxError(_)
                    | JsonRejection::JsonDataError(_)
                    | JsonRejection::MissingJsonContentType(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    _ => rejection.status(),
                };
                Err(BackendError::InvalidBody(rejection.body_text(), status))
            }
        }
    }
}
