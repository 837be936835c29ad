//! Payment page (payment.html)

use crate::{
    dom::{Browser, Route},
    error::AppResult,
    models::{BookingRecord, PaymentMethod},
    services::{
        payment::{
            PaymentOutcome, PaymentService, TermsAcceptance, BOOKING_MISSING_MESSAGE,
            TERMS_REQUIRED_MESSAGE,
        },
        Services,
    },
};

use super::{render_summary, UiEvent};

pub const PAYMENT_FORM: &str = "paymentForm";
pub const PAYPAL_BUTTON: &str = "paypalBtn";
pub const TERMS: &str = "terms";

pub struct PaymentPage {
    service: PaymentService,
    booking: BookingRecord,
}

impl PaymentPage {
    /// Load the pending booking and show its summary. Without one the
    /// visitor is sent back to the booking form.
    pub fn activate<P: Browser>(services: &Services, page: &mut P) -> Option<Self> {
        if !page.contains(PAYMENT_FORM) && !page.contains(PAYPAL_BUTTON) {
            return None;
        }

        let pending = services.payment.pending_booking().unwrap_or_else(|e| {
            tracing::error!("Failed to read pending booking: {}", e);
            None
        });
        let Some(booking) = pending else {
            page.alert(BOOKING_MISSING_MESSAGE);
            page.navigate(Route::Booking);
            return None;
        };

        render_summary(page, &booking.summary());
        Some(Self {
            service: services.payment.clone(),
            booking,
        })
    }

    pub fn booking(&self) -> &BookingRecord {
        &self.booking
    }

    pub fn complete<P: Browser>(&self, page: &mut P, method: PaymentMethod) -> AppResult<()> {
        let terms = TermsAcceptance::from(page.is_checked(TERMS));
        match self.service.complete(&self.booking, method, terms)? {
            PaymentOutcome::TermsRequired => {
                page.alert(TERMS_REQUIRED_MESSAGE);
                page.focus(TERMS);
            }
            PaymentOutcome::BookingMissing => {
                page.alert(BOOKING_MISSING_MESSAGE);
                page.navigate(Route::Booking);
            }
            PaymentOutcome::Completed(_) => page.navigate(Route::ThankYou),
        }
        Ok(())
    }

    pub fn handle<P: Browser>(&self, page: &mut P, event: &UiEvent) -> AppResult<()> {
        match event {
            UiEvent::Submit(id) if id == PAYMENT_FORM => self.complete(page, PaymentMethod::Card),
            UiEvent::Click(id) if id == PAYPAL_BUTTON => self.complete(page, PaymentMethod::Paypal),
            _ => Ok(()),
        }
    }
}
