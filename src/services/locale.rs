//! Locale loading and language selection

use std::sync::Arc;

use crate::{
    config::SiteConfig,
    error::{AppError, AppResult},
    models::{Dictionary, LanguageCode},
    repository::preferences::PreferencesRepository,
    services::fetch::ResourceFetcher,
};

#[derive(Clone)]
pub struct LocaleService {
    fetcher: Arc<dyn ResourceFetcher>,
    preferences: PreferencesRepository,
    site: SiteConfig,
    default_language: LanguageCode,
}

impl LocaleService {
    pub fn new(
        fetcher: Arc<dyn ResourceFetcher>,
        preferences: PreferencesRepository,
        site: SiteConfig,
        default_language: LanguageCode,
    ) -> Self {
        Self {
            fetcher,
            preferences,
            site,
            default_language,
        }
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Language remembered from an earlier visit
    pub fn stored_language(&self) -> LanguageCode {
        self.preferences.language()
    }

    /// Fetch and parse the dictionary of one language
    pub async fn load_dictionary(&self, lang: &LanguageCode) -> AppResult<Dictionary> {
        let path = self.site.locale_path(lang.as_str());
        let raw = self.fetcher.fetch(&path).await.map_err(|e| {
            tracing::debug!("Locale fetch failed: {}", e);
            AppError::MissingLocale(lang.to_string())
        })?;
        Ok(Dictionary::from_json(&raw)?)
    }

    /// Load `lang`, falling back to the default language when it cannot be
    /// loaded. Returns the language actually in effect.
    pub async fn resolve(&self, lang: &LanguageCode) -> AppResult<(LanguageCode, Dictionary)> {
        match self.load_dictionary(lang).await {
            Ok(dict) => Ok((lang.clone(), dict)),
            Err(e) if *lang != self.default_language => {
                tracing::warn!("{}; falling back to {}", e, self.default_language);
                let dict = self.load_dictionary(&self.default_language).await?;
                Ok((self.default_language.clone(), dict))
            }
            Err(e) => Err(e),
        }
    }

    /// Switch to `lang` and remember the language in effect for next visits
    pub async fn select(&self, lang: &LanguageCode) -> AppResult<(LanguageCode, Dictionary)> {
        let (active, dict) = self.resolve(lang).await?;
        self.preferences.set_language(&active)?;
        tracing::info!("Language set to {}", active);
        Ok((active, dict))
    }

    /// Check that every offered language has a readable dictionary.
    /// Returns the languages that failed.
    pub async fn verify(&self, languages: &[LanguageCode]) -> Vec<LanguageCode> {
        let mut missing = Vec::new();
        for lang in languages {
            if let Err(e) = self.load_dictionary(lang).await {
                tracing::warn!("{}", e);
                missing.push(lang.clone());
            }
        }
        missing
    }
}
