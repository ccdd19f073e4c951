//! Validated form extractor
//!
//! Extracts and validates urlencoded form bodies using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated form extractor
///
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract form
        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| match e {
            FormRejection::FailedToDeserializeForm(_)
            | FormRejection::FailedToDeserializeFormBody(_) => {
                ApiError::invalid_form("Please fill in all required fields")
            }
            FormRejection::InvalidFormContentType(_) => {
                ApiError::invalid_form("Expected a form submission")
            }
            other => ApiError::invalid_form(other.body_text()),
        })?;

        // Validate
        value.validate()?;

        Ok(ValidatedForm(value))
    }
}
