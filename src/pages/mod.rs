//! Page bindings: site start-up and event dispatch
//!
//! Every page runs the same start-up: layout fragments, then the stored
//! language, then each page controller checks for its root element and
//! either activates or stays out of the way.

pub mod booking;
pub mod contact;
pub mod layout;
pub mod payment;
pub mod skeleton;
pub mod thank_you;

use crate::{
    dom::{Browser, Document},
    error::AppResult,
    models::{BookingSummary, LanguageCode},
    services::Services,
};

pub use booking::BookingPage;
pub use contact::ContactPage;
pub use payment::PaymentPage;
pub use thank_you::ThankYouPage;

pub const SUM_NAME: &str = "sumName";
pub const SUM_EMAIL: &str = "sumEmail";
pub const SUM_ADULTS: &str = "sumAdults";
pub const SUM_CHILDREN: &str = "sumChildren";
pub const SUM_DATE: &str = "sumDate";
pub const SUM_TOTAL: &str = "sumTotal";

/// User interaction delivered to the active page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A field with this identifier was edited
    Input(String),
    /// A form with this identifier was submitted
    Submit(String),
    /// An element with this identifier was clicked
    Click(String),
    /// The visitor is leaving the page
    Unload,
}

/// Controllers that activated on the current page
#[derive(Default)]
pub struct ActivePages {
    pub booking: Option<BookingPage>,
    pub payment: Option<PaymentPage>,
    pub thank_you: Option<ThankYouPage>,
    pub contact: Option<ContactPage>,
}

impl ActivePages {
    pub fn is_empty(&self) -> bool {
        self.booking.is_none()
            && self.payment.is_none()
            && self.thank_you.is_none()
            && self.contact.is_none()
    }
}

pub struct Site {
    services: Services,
}

impl Site {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Page-load sequence. Stops at the first failing fetch.
    pub async fn init<P: Browser>(&self, page: &mut P) -> AppResult<ActivePages> {
        layout::load_fragments(&self.services, page).await?;
        let lang = layout::apply_stored_language(&self.services, page).await?;
        tracing::debug!("Page initialised in {}", lang);
        Ok(self.activate(page))
    }

    /// Top-level page-load handler: failures are logged and leave the page
    /// as far as it got.
    pub async fn boot<P: Browser>(&self, page: &mut P) -> Option<ActivePages> {
        match self.init(page).await {
            Ok(active) => Some(active),
            Err(e) => {
                tracing::error!("Page initialisation failed: {}", e);
                None
            }
        }
    }

    /// Run every page controller's activation check
    pub fn activate<P: Browser>(&self, page: &mut P) -> ActivePages {
        ActivePages {
            booking: BookingPage::activate(&self.services, page),
            payment: PaymentPage::activate(&self.services, page),
            thank_you: ThankYouPage::activate(&self.services, page),
            contact: ContactPage::activate(&self.services, page),
        }
    }

    /// Deliver one event to the language buttons and every active controller
    pub async fn dispatch<P: Browser>(
        &self,
        active: &ActivePages,
        page: &mut P,
        event: &UiEvent,
    ) -> AppResult<()> {
        if let UiEvent::Click(id) = event {
            if let Some(code) = layout::language_button(page, id) {
                if let Err(e) = self.switch_language(page, &code).await {
                    tracing::error!("Language switch to {:?} failed: {}", code, e);
                }
            }
        }

        if let Some(booking) = &active.booking {
            booking.handle(page, event)?;
        }
        if let Some(payment) = &active.payment {
            payment.handle(page, event)?;
        }
        if let Some(thank_you) = &active.thank_you {
            thank_you.handle(page, event)?;
        }
        if let Some(contact) = &active.contact {
            contact.handle(page, event);
        }
        Ok(())
    }

    async fn switch_language<P: Browser>(&self, page: &mut P, code: &str) -> AppResult<()> {
        let lang = LanguageCode::new(code)?;
        layout::switch_language(&self.services, page, &lang).await?;
        Ok(())
    }
}

/// Fill the shared summary slots present on the page
pub(crate) fn render_summary<D: Document>(page: &mut D, summary: &BookingSummary) {
    page.set_text(SUM_NAME, &summary.name);
    page.set_text(SUM_EMAIL, &summary.email);
    page.set_text(SUM_ADULTS, &summary.adults);
    page.set_text(SUM_CHILDREN, &summary.children);
    page.set_text(SUM_DATE, &summary.date);
    page.set_text(SUM_TOTAL, &summary.total);
}
