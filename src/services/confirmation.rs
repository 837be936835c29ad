//! Confirmation display controller

use crate::{error::AppResult, models::ConfirmationRecord, repository::Repository};

pub const CONFIRMATION_MISSING_MESSAGE: &str =
    "Confirmation data is missing. Please complete the booking again.";

#[derive(Clone)]
pub struct ConfirmationService {
    repository: Repository,
}

impl ConfirmationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Confirmation of the last completed payment, if a readable one exists
    pub fn current(&self) -> AppResult<Option<ConfirmationRecord>> {
        self.repository.confirmations.get()
    }

    /// Forget the confirmation once the visitor leaves the thank-you page
    pub fn dismiss(&self) -> AppResult<()> {
        tracing::debug!("Dismissing confirmation");
        self.repository.confirmations.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CONFIRMATION_KEY;

    #[test]
    fn test_missing_and_corrupt_confirmation() {
        let repository = Repository::in_memory();
        let service = ConfirmationService::new(repository.clone());
        assert!(service.current().unwrap().is_none());

        repository.session.set_item(CONFIRMATION_KEY, "[]").unwrap();
        assert!(service.current().unwrap().is_none());

        service.dismiss().unwrap();
        assert!(repository.session.get_item(CONFIRMATION_KEY).unwrap().is_none());
    }
}
