//! Contact form controller (demo: nothing is sent or stored)

use crate::{models::Identity, validation::IdentityCheck};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Show the success indicator and reset the form
    Accepted,
    Invalid(IdentityCheck),
}

#[derive(Clone, Default)]
pub struct ContactService;

impl ContactService {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, form: &ContactForm) -> ContactOutcome {
        let check = Identity::new(&form.first_name, &form.last_name, &form.email).check();
        if !check.is_valid() {
            return ContactOutcome::Invalid(check);
        }

        tracing::debug!(
            "Contact request acknowledged ({} characters)",
            form.message.trim().chars().count()
        );
        ContactOutcome::Accepted
    }
}
