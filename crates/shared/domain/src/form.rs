//! Candidate user input and its validation rules.
//!
//! A [`UserForm`] carries the raw text an operator typed. Only a form that
//! passes [`UserForm::validate_form`] becomes a [`NewUser`], so the record
//! store never has to re-check shape or enum membership.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::MIN_NAME_LENGTH;
use crate::error::{DomainError, DomainResult};
use crate::user::{NewUser, UserRole, UserStatus};

/// Field order used when reporting validation failures
const FIELD_ORDER: &[&str] = &["name", "email"];

/// Raw add-user form input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UserForm {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    pub role: String,

    pub status: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: UserRole::default().to_string(),
            status: UserStatus::default().to_string(),
        }
    }
}

impl UserForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            status: status.into(),
        }
    }

    /// Run every rule and return the first failure, in field order.
    pub fn validate_form(&self) -> DomainResult<()> {
        self.validate()
            .map_err(|e| DomainError::validation(first_message(&e)))?;
        self.role.parse::<UserRole>()?;
        self.status.parse::<UserStatus>()?;
        Ok(())
    }

    /// Validate and convert into creation data (no profile photo).
    pub fn into_new_user(self) -> DomainResult<NewUser> {
        self.validate_form()?;

        Ok(NewUser {
            role: self.role.parse()?,
            status: self.status.parse()?,
            name: self.name,
            email: self.email,
            profile_photo: None,
        })
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::new("required").with_message("Name is required".into()));
    }
    Ok(())
}

/// Pick the first failing field's message
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(field))
        .chain(field_errors.values())
        .find_map(|errs| {
            // An empty value also fails the format check; report it as missing
            errs.iter()
                .find(|e| e.code == "length")
                .or_else(|| errs.first())
        })
        .map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", e.code))
        })
        .unwrap_or_else(|| "Invalid input".to_string())
}
