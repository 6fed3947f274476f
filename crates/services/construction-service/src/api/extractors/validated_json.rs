//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use common::AppError;

/// JSON extractor that validates the payload before the handler runs.
///
/// Every failing field is reported, ordered by field name.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(validation_message(&e)))?;

        Ok(ValidatedJson(value))
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = fields
        .into_iter()
        .flat_map(|(_, messages)| messages)
        .collect::<Vec<_>>()
        .join("; ");

    if message.is_empty() {
        "Validation failed".to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(range(min = 1))]
        floors: i32,
    }

    #[test]
    fn every_failing_field_is_reported() {
        let sample = Sample {
            name: String::new(),
            floors: 0,
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            validation_message(&errors),
            "floors is invalid; name must not be empty"
        );
    }

    #[test]
    fn single_failure_keeps_its_message() {
        let sample = Sample {
            name: String::new(),
            floors: 3,
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(validation_message(&errors), "name must not be empty");
    }
}
