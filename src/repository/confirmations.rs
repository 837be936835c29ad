//! Completed payment handoff (session scope)

use std::sync::Arc;

use super::storage::{load_json, save_json, Storage};
use super::CONFIRMATION_KEY;
use crate::{error::AppResult, models::ConfirmationRecord};

#[derive(Clone)]
pub struct ConfirmationsRepository {
    session: Arc<dyn Storage>,
}

impl ConfirmationsRepository {
    pub fn new(session: Arc<dyn Storage>) -> Self {
        Self { session }
    }

    pub fn save(&self, confirmation: &ConfirmationRecord) -> AppResult<()> {
        save_json(self.session.as_ref(), CONFIRMATION_KEY, confirmation)
    }

    pub fn get(&self) -> AppResult<Option<ConfirmationRecord>> {
        load_json(self.session.as_ref(), CONFIRMATION_KEY)
    }

    pub fn remove(&self) -> AppResult<()> {
        self.session.remove_item(CONFIRMATION_KEY)
    }
}
