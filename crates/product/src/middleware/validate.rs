use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{HeaderMap, header::CONTENT_TYPE, request::Parts},
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::ValidationErrors;

/// JSON body extractor that reports every rejection as a 400.
///
/// An empty body or a JSON `null` deserializes as `T::default()`, so request
/// types made of optional fields see it as "every field absent".
pub struct PayloadJson<T>(pub T);

impl<S, T> FromRequest<S> for PayloadJson<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        if !is_json {
            return Err(HttpError::BadRequest(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let Json(value) = Json::<Option<T>>::from_bytes(&bytes)
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        Ok(Self(value.unwrap_or_default()))
    }
}

/// Query-string extractor whose rejection is a JSON 400 like every other
/// client error.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        Ok(Self(value))
    }
}

fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    _ => format!("Invalid {field}"),
                });
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        error_messages.push("Validation failed".to_string());
    }

    error_messages
}
