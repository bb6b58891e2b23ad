use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

use super::storage::{LocalStorage, REGISTERED_USER_KEY};

pub const VALIDATION_MESSAGE: &str = "Please fill all fields properly!";

pub const SUCCESS_PAGE: &str = "success.html";

/// Raw form input
#[derive(Clone, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    /// Selected radio value, `None` when nothing is checked
    pub gender: Option<String>,
    pub course: String,
    pub terms_accepted: bool,
}

/// Stored registration record
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, new)]
pub struct RegisteredUser {
    pub name: String,
    pub email: String,
    pub gender: String,
    pub course: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Navigation {
    Redirect(String),
}

impl RegistrationForm {
    /// Presence checks only. Name and email are trimmed first.
    pub fn validate(&self) -> Result<RegisteredUser, Error> {
        let name = self.name.trim();
        let email = self.email.trim();

        let gender = match &self.gender {
            Some(gender) if !gender.is_empty() => gender,
            _ => return Err(validation_error()),
        };

        if name.is_empty() || email.is_empty() || self.course.is_empty() || !self.terms_accepted {
            return Err(validation_error());
        }

        Ok(RegisteredUser::new(
            name.to_string(),
            email.to_string(),
            gender.clone(),
            self.course.clone(),
        ))
    }
}

fn validation_error() -> Error {
    Error::Validation {
        message: VALIDATION_MESSAGE.to_string(),
    }
}

/// Validates the form, stores the record under `registeredUser` and returns
/// where to navigate. Nothing is stored when validation fails.
pub fn submit(
    form: &RegistrationForm,
    storage: &mut dyn LocalStorage,
) -> Result<Navigation, Error> {
    let user = form.validate()?;
    let data = serde_json::to_string(&user)?;

    storage.set_item(REGISTERED_USER_KEY, data)?;
    tracing::info!("Registration stored under {}", REGISTERED_USER_KEY);

    Ok(Navigation::Redirect(SUCCESS_PAGE.to_string()))
}
