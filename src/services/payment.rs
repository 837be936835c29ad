//! Mock payment controller

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{BookingRecord, ConfirmationRecord, PaymentMethod, Reference},
    repository::Repository,
    services::clock::Clock,
};

pub const BOOKING_MISSING_MESSAGE: &str =
    "Booking data is missing. Please start your booking again.";
pub const TERMS_REQUIRED_MESSAGE: &str = "Please accept the Terms & Conditions to continue.";

/// State of the terms-and-conditions control on the payment page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermsAcceptance {
    Accepted,
    Declined,
    /// The page has no such control; counts as accepted
    NotOffered,
}

impl TermsAcceptance {
    pub fn is_satisfied(&self) -> bool {
        !matches!(self, TermsAcceptance::Declined)
    }
}

impl From<Option<bool>> for TermsAcceptance {
    fn from(checked: Option<bool>) -> Self {
        match checked {
            Some(true) => TermsAcceptance::Accepted,
            Some(false) => TermsAcceptance::Declined,
            None => TermsAcceptance::NotOffered,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    TermsRequired,
    /// The booking is no longer pending, e.g. it was already paid
    BookingMissing,
    Completed(ConfirmationRecord),
}

#[derive(Clone)]
pub struct PaymentService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl PaymentService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Booking handed over by the booking form, if a readable one exists
    pub fn pending_booking(&self) -> AppResult<Option<BookingRecord>> {
        self.repository.bookings.get()
    }

    /// Finish the mock payment: mint a reference, store the confirmation
    /// and retire the pending booking. No money moves.
    ///
    /// `booking` must still be the pending booking in storage; a booking
    /// is paid at most once.
    pub fn complete(
        &self,
        booking: &BookingRecord,
        method: PaymentMethod,
        terms: TermsAcceptance,
    ) -> AppResult<PaymentOutcome> {
        if !terms.is_satisfied() {
            return Ok(PaymentOutcome::TermsRequired);
        }

        if self.repository.bookings.get()?.as_ref() != Some(booking) {
            tracing::warn!("Payment attempted without a matching pending booking");
            return Ok(PaymentOutcome::BookingMissing);
        }

        let reference = Reference::generate(self.clock.today(), &mut rand::thread_rng());
        let confirmation =
            ConfirmationRecord::new(booking.clone(), method, reference, self.clock.now());

        self.repository.confirmations.save(&confirmation)?;
        self.repository.bookings.remove()?;

        tracing::info!(
            "Payment {} completed by {} for {}",
            confirmation.reference,
            method,
            booking.currency.format(booking.total)
        );
        Ok(PaymentOutcome::Completed(confirmation))
    }
}
