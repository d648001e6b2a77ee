use crate::middleware::validate::format_validation_errors;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::errors::ServiceError;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Body of `POST /items` as received.
///
/// Every field is optional here so that absence can be reported separately
/// from a value of the wrong shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProductPayload {
    #[schema(example = "Laptop")]
    pub name: Option<String>,

    /// Number, or a string holding a number.
    #[schema(value_type = Option<f64>, example = 3999.99)]
    pub price: Option<Value>,

    #[schema(example = "Gaming laptop")]
    pub description: Option<String>,
}

/// Body of `PUT /items` as received.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductPayload {
    /// Integer, or a string holding an integer.
    #[schema(value_type = Option<i64>, example = 1)]
    pub id: Option<Value>,

    #[schema(example = "Gaming Laptop")]
    pub name: Option<String>,

    #[schema(value_type = Option<f64>, example = 4299.99)]
    pub price: Option<Value>,

    #[schema(example = "High-end gaming laptop")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub price: f64,

    pub description: String,
}

impl TryFrom<CreateProductPayload> for CreateProductRequest {
    type Error = ServiceError;

    fn try_from(payload: CreateProductPayload) -> Result<Self, Self::Error> {
        let (Some(name), Some(price)) = (payload.name, payload.price) else {
            return Err(ServiceError::MissingField(
                "Missing required fields: name, price".to_string(),
            ));
        };

        let price = parse_price(&price)
            .ok_or_else(|| ServiceError::InvalidFormat("Invalid price format".to_string()))?;

        let req = Self {
            name,
            price,
            description: payload.description.unwrap_or_default(),
        };

        req.validate()
            .map_err(|errors| ServiceError::Validation(format_validation_errors(&errors)))?;

        Ok(req)
    }
}

/// Full replacement of a product's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl TryFrom<UpdateProductPayload> for UpdateProductRequest {
    type Error = ServiceError;

    fn try_from(payload: UpdateProductPayload) -> Result<Self, Self::Error> {
        let Some(id) = payload.id else {
            return Err(ServiceError::MissingField(
                "Missing required field: id".to_string(),
            ));
        };

        let invalid = || ServiceError::InvalidFormat("Invalid data format".to_string());

        let id = parse_id(&id).ok_or_else(invalid)?;
        let price = match payload.price {
            Some(value) => parse_price(&value).ok_or_else(invalid)?,
            None => 0.0,
        };

        Ok(Self {
            id,
            name: payload.name.unwrap_or_default(),
            price,
            description: payload.description.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteProductParams {
    /// Identifier of the product to remove.
    pub id: Option<String>,
}

impl DeleteProductParams {
    /// Keeps the first `id` of a decoded query string; later repeats are
    /// ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value));

        Self { id }
    }

    pub fn product_id(&self) -> Result<i64, ServiceError> {
        let raw = self.id.as_deref().map(str::trim).unwrap_or_default();

        if raw.is_empty() {
            return Err(ServiceError::MissingField(
                "Missing required parameter: id".to_string(),
            ));
        }

        raw.parse::<i64>()
            .map_err(|_| ServiceError::InvalidFormat("Invalid ID format".to_string()))
    }
}

fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    price.is_finite().then_some(price)
}

fn parse_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && (i64::MIN as f64..i64::MAX as f64).contains(f))
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_payload(value: Value) -> CreateProductPayload {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    fn update_payload(value: Value) -> UpdateProductPayload {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn create_accepts_numeric_string_price() {
        let req = CreateProductRequest::try_from(create_payload(json!({
            "name": "Mouse",
            "price": "99.99"
        })))
        .unwrap();

        assert_eq!(req.name, "Mouse");
        assert!((req.price - 99.99).abs() < f64::EPSILON);
        assert_eq!(req.description, "");
    }

    #[test]
    fn create_reports_missing_before_malformed() {
        let err = CreateProductRequest::try_from(create_payload(json!({
            "price": "not a number"
        })))
        .unwrap_err();

        assert!(
            matches!(err, ServiceError::MissingField(msg) if msg == "Missing required fields: name, price")
        );
    }

    #[test]
    fn create_rejects_non_numeric_price() {
        let err = CreateProductRequest::try_from(create_payload(json!({
            "name": "Mouse",
            "price": "cheap"
        })))
        .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidFormat(msg) if msg == "Invalid price format"));

        let err = CreateProductRequest::try_from(create_payload(json!({
            "name": "Mouse",
            "price": [1, 2]
        })))
        .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidFormat(_)));
    }

    #[test]
    fn create_rejects_non_finite_price() {
        let err = CreateProductRequest::try_from(create_payload(json!({
            "name": "Mouse",
            "price": "NaN"
        })))
        .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidFormat(_)));
    }

    #[test]
    fn create_rejects_empty_name() {
        let err = CreateProductRequest::try_from(create_payload(json!({
            "name": "",
            "price": 10
        })))
        .unwrap_err();

        match err {
            ServiceError::Validation(messages) => {
                assert_eq!(messages, vec!["name: Name is required".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn update_requires_id() {
        let err = UpdateProductRequest::try_from(update_payload(json!({
            "name": "Keyboard"
        })))
        .unwrap_err();

        assert!(matches!(err, ServiceError::MissingField(msg) if msg == "Missing required field: id"));
    }

    #[test]
    fn update_fills_absent_fields_with_defaults() {
        let req = UpdateProductRequest::try_from(update_payload(json!({ "id": "7" }))).unwrap();

        assert_eq!(req.id, 7);
        assert_eq!(req.name, "");
        assert_eq!(req.price, 0.0);
        assert_eq!(req.description, "");
    }

    #[test]
    fn update_rejects_malformed_fields() {
        for body in [
            json!({ "id": "seven" }),
            json!({ "id": 1.5 }),
            json!({ "id": 1e300 }),
            json!({ "id": -1e300 }),
            json!({ "id": 9223372036854775808.0 }),
            json!({ "id": 1, "price": "free" }),
        ] {
            let err = UpdateProductRequest::try_from(update_payload(body)).unwrap_err();
            assert!(matches!(err, ServiceError::InvalidFormat(msg) if msg == "Invalid data format"));
        }
    }

    #[test]
    fn update_accepts_integral_float_id() {
        let req = UpdateProductRequest::try_from(update_payload(json!({ "id": 4.0 }))).unwrap();
        assert_eq!(req.id, 4);
    }

    #[test]
    fn delete_id_checks_presence_then_format() {
        let missing = DeleteProductParams { id: None }.product_id().unwrap_err();
        assert!(matches!(missing, ServiceError::MissingField(_)));

        let empty = DeleteProductParams { id: Some(String::new()) }.product_id().unwrap_err();
        assert!(matches!(empty, ServiceError::MissingField(_)));

        let invalid = DeleteProductParams { id: Some("abc".into()) }.product_id().unwrap_err();
        assert!(matches!(invalid, ServiceError::InvalidFormat(msg) if msg == "Invalid ID format"));

        let id = DeleteProductParams { id: Some("42".into()) }.product_id().unwrap();
        assert_eq!(id, 42);
    }

    #[test]
    fn delete_params_take_first_id() {
        let params = DeleteProductParams::from_pairs(vec![
            ("sort".into(), "name".into()),
            ("id".into(), "3".into()),
            ("id".into(), "4".into()),
        ]);
        assert_eq!(params.product_id().unwrap(), 3);

        let params = DeleteProductParams::from_pairs(vec![("name".into(), "x".into())]);
        assert!(matches!(params.product_id(), Err(ServiceError::MissingField(_))));
    }
}
