//! Visitor preferences kept across sessions

use std::sync::Arc;

use super::storage::Storage;
use super::LANG_KEY;
use crate::{error::AppResult, models::LanguageCode};

#[derive(Clone)]
pub struct PreferencesRepository {
    local: Arc<dyn Storage>,
}

impl PreferencesRepository {
    pub fn new(local: Arc<dyn Storage>) -> Self {
        Self { local }
    }

    /// Last selected language, or the default when none (or garbage) is stored
    pub fn language(&self) -> LanguageCode {
        match self.local.get_item(LANG_KEY) {
            Ok(Some(raw)) => LanguageCode::new(&raw).unwrap_or_else(|_| {
                tracing::warn!("Ignoring stored language {:?}", raw);
                LanguageCode::default()
            }),
            Ok(None) => LanguageCode::default(),
            Err(e) => {
                tracing::warn!("Failed to read stored language: {}", e);
                LanguageCode::default()
            }
        }
    }

    pub fn set_language(&self, lang: &LanguageCode) -> AppResult<()> {
        self.local.set_item(LANG_KEY, lang.as_str())
    }
}
