use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::error::JsonPayloadError;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use serde::de::DeserializeOwned;
use serde_json::Error as JsonError;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// JSON body extractor whose failures render as problem details.
///
/// Parse failures become `400 BAD_REQUEST` with a sanitized detail instead of
/// actix's plain-text default.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let path = req.path().to_string();
        web::Json::<T>::from_request(req, payload)
            .map(move |result| match result {
                Ok(json) => Ok(ValidatedJson(json.into_inner())),
                Err(e) => {
                    debug!(path = %path, error = %e, "JSON body rejected");
                    let detail = e
                        .as_error::<JsonPayloadError>()
                        .map(classify_payload_error)
                        .unwrap_or_else(|| "Failed to read request body".to_string());
                    Err(AppError::bad_request(ErrorCode::BadRequest, detail))
                }
            })
            .boxed_local()
    }
}

fn classify_payload_error(error: &JsonPayloadError) -> String {
    match error {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => classify_json_error(e),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large".to_string()
        }
        _ => "Failed to read request body".to_string(),
    }
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        serde_json::error::Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        serde_json::error::Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        serde_json::error::Category::Data => {
            "Invalid JSON: wrong types for one or more fields".to_string()
        }
        serde_json::error::Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
