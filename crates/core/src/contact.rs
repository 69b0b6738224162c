//! Contact-form submission.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Body of `POST /contact`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 300, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000, message = "message is required"))]
    pub message: String,
}

impl ContactRequest {
    /// Trim every field and run the declarative validation rules.
    pub fn normalized(self) -> Result<Self, CoreError> {
        let normalized = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        normalized
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        Ok(normalized)
    }
}
