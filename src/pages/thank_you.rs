//! Thank-you page (thank-you.html)

use crate::{
    dom::{Browser, Route},
    error::AppResult,
    models::ConfirmationRecord,
    services::{
        confirmation::{ConfirmationService, CONFIRMATION_MISSING_MESSAGE},
        Services,
    },
};

use super::{render_summary, UiEvent};

pub const ROOT: &str = "thankYouPage";
pub const CONFIRM_REF: &str = "confirmRef";

pub struct ThankYouPage {
    service: ConfirmationService,
    confirmation: ConfirmationRecord,
}

impl ThankYouPage {
    pub fn activate<P: Browser>(services: &Services, page: &mut P) -> Option<Self> {
        if !page.contains(ROOT) {
            return None;
        }

        let current = services.confirmation.current().unwrap_or_else(|e| {
            tracing::error!("Failed to read confirmation: {}", e);
            None
        });
        let Some(confirmation) = current else {
            page.alert(CONFIRMATION_MISSING_MESSAGE);
            page.navigate(Route::Booking);
            return None;
        };

        let reference = if confirmation.reference.is_empty() {
            "—"
        } else {
            confirmation.reference.as_str()
        };
        page.set_text(CONFIRM_REF, reference);
        render_summary(page, &confirmation.booking.summary());

        Some(Self {
            service: services.confirmation.clone(),
            confirmation,
        })
    }

    pub fn confirmation(&self) -> &ConfirmationRecord {
        &self.confirmation
    }

    pub fn handle<P: Browser>(&self, _page: &mut P, event: &UiEvent) -> AppResult<()> {
        match event {
            UiEvent::Unload => self.service.dismiss(),
            _ => Ok(()),
        }
    }
}
