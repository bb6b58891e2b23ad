use std::io::{BufRead, Write};

use anyhow::Result;
use domain::{
    registrations::{self, LocalStorage, Navigation, RegistrationForm, REGISTERED_USER_KEY},
    Error,
};

use crate::prompt::Prompter;

/// Collects the form fields and submits them. Validation failures print the
/// message and return `None`; nothing is stored in that case.
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    storage: &mut dyn LocalStorage,
) -> Result<Option<Navigation>> {
    let name = prompter.ask("Name: ")?;
    let email = prompter.ask("Email: ")?;
    let gender = prompter.ask("Gender: ")?;
    let course = prompter.ask("Course: ")?;
    let terms = prompter.ask("Accept terms (y/n): ")?;

    let form = RegistrationForm {
        name,
        email,
        gender: Some(gender.trim().to_string()).filter(|g| !g.is_empty()),
        course: course.trim().to_string(),
        terms_accepted: matches!(terms.trim(), "y" | "Y" | "yes"),
    };

    match registrations::submit(&form, storage) {
        Ok(navigation) => {
            let Navigation::Redirect(page) = &navigation;
            if let Some(stored) = storage.get_item(REGISTERED_USER_KEY) {
                writeln!(prompter.output(), "Saved {}: {}", REGISTERED_USER_KEY, stored)?;
            }
            writeln!(prompter.output(), "Redirecting to {}", page)?;
            Ok(Some(navigation))
        }
        Err(Error::Validation { message }) => {
            writeln!(prompter.output(), "{}", message)?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
