//! Page controllers and their collaborators

pub mod booking;
pub mod clock;
pub mod confirmation;
pub mod contact;
pub mod fetch;
pub mod locale;
pub mod payment;

use std::sync::Arc;

use crate::{
    config::{LocaleConfig, SiteConfig},
    error::AppResult,
    models::LanguageCode,
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub booking: booking::BookingService,
    pub payment: payment::PaymentService,
    pub confirmation: confirmation::ConfirmationService,
    pub contact: contact::ContactService,
    pub locale: locale::LocaleService,
    pub fetcher: Arc<dyn fetch::ResourceFetcher>,
    pub clock: Arc<dyn clock::Clock>,
    pub repository: Repository,
    pub site: SiteConfig,
}

impl Services {
    /// Create all services over the given storage, resources and clock
    pub fn new(
        repository: Repository,
        fetcher: Arc<dyn fetch::ResourceFetcher>,
        clock: Arc<dyn clock::Clock>,
        site: SiteConfig,
        locale: &LocaleConfig,
    ) -> AppResult<Self> {
        let default_language = LanguageCode::new(&locale.default_language)?;

        Ok(Self {
            booking: booking::BookingService::new(repository.clone(), clock.clone()),
            payment: payment::PaymentService::new(repository.clone(), clock.clone()),
            confirmation: confirmation::ConfirmationService::new(repository.clone()),
            contact: contact::ContactService::new(),
            locale: locale::LocaleService::new(
                fetcher.clone(),
                repository.preferences.clone(),
                site.clone(),
                default_language,
            ),
            fetcher,
            clock,
            repository,
            site,
        })
    }
}
