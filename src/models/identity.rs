//! Visitor identity captured by the booking and contact forms

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{validate_email_shape, IdentityCheck};

/// Trimmed name and email of the person making a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,
}

impl Identity {
    /// Build from raw field values, trimming each of them
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    pub fn check(&self) -> IdentityCheck {
        IdentityCheck::from_errors(self.validate())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
