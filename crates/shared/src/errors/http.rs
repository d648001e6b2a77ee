use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingField(msg) | ServiceError::InvalidFormat(msg) => {
                HttpError::BadRequest(msg)
            }

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Repo(err) => HttpError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let msg = match self {
            HttpError::BadRequest(msg) | HttpError::NotFound(msg) | HttpError::Internal(msg) => {
                msg
            }
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::repository::RepositoryError;

    #[test]
    fn missing_and_malformed_fields_share_bad_request() {
        let missing = HttpError::from(ServiceError::MissingField("Missing required field: id".into()));
        let malformed = HttpError::from(ServiceError::InvalidFormat("Invalid data format".into()));

        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
        assert!(matches!(missing, HttpError::BadRequest(msg) if msg == "Missing required field: id"));
        assert!(matches!(malformed, HttpError::BadRequest(msg) if msg == "Invalid data format"));
    }

    #[test]
    fn validation_messages_are_joined() {
        let err = HttpError::from(ServiceError::Validation(vec![
            "name: Name is required".into(),
            "price: Invalid price".into(),
        ]));

        assert!(
            matches!(err, HttpError::BadRequest(msg) if msg == "name: Name is required; price: Invalid price")
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = HttpError::from(ServiceError::NotFound("Product not found".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_keep_their_message() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::PoolTimedOut,
        )));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            HttpError::Internal(msg) => {
                assert!(msg.starts_with("Database error:"));
                assert!(msg.contains(&sqlx::Error::PoolTimedOut.to_string()));
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
