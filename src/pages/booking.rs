//! Booking page (book-tour.html)

use crate::{
    dom::{Browser, Document, Route},
    error::AppResult,
    models::PriceQuote,
    services::{
        booking::{BookingForm, BookingOutcome, BookingService},
        Services,
    },
};

use super::UiEvent;

pub const FORM: &str = "bookingForm";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const ADULTS: &str = "adults";
pub const CHILDREN: &str = "children";
pub const VISIT_DATE: &str = "visitDate";
pub const TOTAL: &str = "total";
pub const ERR_FIRST_NAME: &str = "errFirstName";
pub const ERR_LAST_NAME: &str = "errLastName";
pub const ERR_EMAIL: &str = "errEmail";

pub struct BookingPage {
    service: BookingService,
}

impl BookingPage {
    /// Wire the booking form if this page has one
    pub fn activate<P: Browser>(services: &Services, page: &mut P) -> Option<Self> {
        if !page.contains(FORM) {
            return None;
        }

        let this = Self {
            service: services.booking.clone(),
        };
        let min = this.service.earliest_date().format("%Y-%m-%d").to_string();
        page.set_attribute(VISIT_DATE, "min", &min);
        this.recalculate(page);
        Some(this)
    }

    /// Normalise both count fields and refresh the total display
    pub fn recalculate<D: Document>(&self, page: &mut D) -> PriceQuote {
        let adults = page.value(ADULTS).unwrap_or_default();
        let children = page.value(CHILDREN).unwrap_or_default();
        let quote = self.service.recalculate(&adults, &children);

        page.set_value(ADULTS, &quote.participants.adults.to_string());
        page.set_value(CHILDREN, &quote.participants.children.to_string());
        page.set_value(TOTAL, &quote.display());
        quote
    }

    pub fn submit<P: Browser>(&self, page: &mut P) -> AppResult<()> {
        let form = read_form(page);
        self.recalculate(page);

        let submission = self.service.submit(&form)?;
        let identity = submission.review.identity;
        page.set_visible(ERR_FIRST_NAME, identity.shows_first_name_error());
        page.set_visible(ERR_LAST_NAME, identity.shows_last_name_error());
        page.set_visible(ERR_EMAIL, identity.shows_email_error());

        match submission.outcome {
            BookingOutcome::Blocked(reason) => page.alert(reason.message()),
            BookingOutcome::Invalid(_) => {}
            BookingOutcome::Committed(_) => page.navigate(Route::Payment),
        }
        Ok(())
    }

    pub fn handle<P: Browser>(&self, page: &mut P, event: &UiEvent) -> AppResult<()> {
        match event {
            UiEvent::Input(id) if id == ADULTS || id == CHILDREN => {
                self.recalculate(page);
                Ok(())
            }
            UiEvent::Submit(id) if id == FORM => self.submit(page),
            _ => Ok(()),
        }
    }
}

fn read_form<D: Document>(page: &D) -> BookingForm {
    let field = |id: &str| page.value(id).unwrap_or_default();
    BookingForm {
        first_name: field(FIRST_NAME),
        last_name: field(LAST_NAME),
        email: field(EMAIL),
        visit_date: field(VISIT_DATE),
        adults: field(ADULTS),
        children: field(CHILDREN),
    }
}
