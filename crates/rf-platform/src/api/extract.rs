//! Request extractors

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use validator::Validate;

use crate::error::PlatformError;

/// Key used in `details` when a failure cannot be tied to one field.
const BODY_FIELD: &str = "body";

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// JSON body that has been deserialized and passed `Validate`.
///
/// Malformed JSON, missing fields and rule violations are all rejected as
/// `PlatformError::Validation` before the handler runs. `details` is keyed by
/// field in every case, with the same shape `validator` produces.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = PlatformError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> PlatformError {
    let message = rejection.body_text();
    let details = match &rejection {
        JsonRejection::JsonDataError(_) => data_error_details(&message),
        _ => field_details(BODY_FIELD, "invalid_body", &message),
    };

    PlatformError::Validation {
        message,
        details: Some(details),
    }
}

/// Map a serde deserialization message onto the field it concerns.
///
/// Messages look like ``missing field `email` at line 1 column 2`` for absent
/// fields and `accepted_marketing: invalid type: ...` when serde knows the
/// path of the offending value.
fn data_error_details(message: &str) -> Value {
    let reason = message.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(message);

    if let Some(field) = missing_field(reason) {
        return field_details(field, "required", reason);
    }

    match reason.split_once(": ") {
        Some((path, rest)) if !path.is_empty() && path != "." && !path.contains(' ') => {
            field_details(path, "invalid_type", rest)
        }
        _ => field_details(BODY_FIELD, "invalid_type", reason),
    }
}

fn missing_field(reason: &str) -> Option<&str> {
    let start = reason.find("missing field `")? + "missing field `".len();
    let len = reason[start..].find('`')?;
    Some(&reason[start..start + len])
}

fn field_details(field: &str, code: &str, message: &str) -> Value {
    json!({
        field: [{
            "code": code,
            "message": message,
            "params": {},
        }]
    })
}
