//! In-memory skeletons of the shipped pages
//!
//! Each builder mirrors the identifiers used by the matching file under
//! `public/`, with empty inputs and error markers hidden.

use crate::dom::{
    Element, MemoryDocument, ERROR_FOR_ATTRIBUTE, LANG_ATTRIBUTE, TRANSLATION_ATTRIBUTE,
};

use super::{booking, contact, payment, thank_you};
use super::{SUM_ADULTS, SUM_CHILDREN, SUM_DATE, SUM_EMAIL, SUM_NAME, SUM_TOTAL};

pub const HEADER_SLOT: &str = "site-header";
pub const FOOTER_SLOT: &str = "site-footer";
pub const HEADING: &str = "pageHeading";

/// Layout slots, language buttons and a translated heading
fn layout(heading_key: &str) -> MemoryDocument {
    MemoryDocument::new()
        .with(HEADER_SLOT, Element::new())
        .with("lang-en", Element::new().with_attribute(LANG_ATTRIBUTE, "en"))
        .with("lang-de", Element::new().with_attribute(LANG_ATTRIBUTE, "de"))
        .with(
            HEADING,
            Element::new().with_attribute(TRANSLATION_ATTRIBUTE, heading_key),
        )
        .with(FOOTER_SLOT, Element::new())
}

fn with_summary(page: MemoryDocument) -> MemoryDocument {
    [SUM_NAME, SUM_EMAIL, SUM_ADULTS, SUM_CHILDREN, SUM_DATE, SUM_TOTAL]
        .into_iter()
        .fold(page, |page, id| page.with(id, Element::new()))
}

/// book-tour.html
pub fn booking_page() -> MemoryDocument {
    layout("booking.title")
        .with(booking::FORM, Element::new())
        .with(booking::FIRST_NAME, Element::input(""))
        .with(booking::ERR_FIRST_NAME, Element::new().hidden())
        .with(booking::LAST_NAME, Element::input(""))
        .with(booking::ERR_LAST_NAME, Element::new().hidden())
        .with(booking::EMAIL, Element::input(""))
        .with(booking::ERR_EMAIL, Element::new().hidden())
        .with(booking::VISIT_DATE, Element::input(""))
        .with(booking::ADULTS, Element::input("0"))
        .with(booking::CHILDREN, Element::input("0"))
        .with(booking::TOTAL, Element::input(""))
}

/// payment.html, optionally without the terms checkbox
pub fn payment_page(with_terms: bool) -> MemoryDocument {
    let page = with_summary(layout("payment.title"))
        .with(payment::PAYMENT_FORM, Element::new())
        .with(payment::PAYPAL_BUTTON, Element::new());
    if with_terms {
        page.with(payment::TERMS, Element::checkbox(false))
    } else {
        page
    }
}

/// thank-you.html
pub fn thank_you_page() -> MemoryDocument {
    with_summary(layout("thankYou.title"))
        .with(thank_you::ROOT, Element::new())
        .with(thank_you::CONFIRM_REF, Element::new())
}

/// contact.html
pub fn contact_page() -> MemoryDocument {
    let mut page = layout("contact.title").with(contact::FORM, Element::new());
    for field in [contact::FIRST_NAME, contact::LAST_NAME, contact::EMAIL] {
        page.insert(field, Element::input(""));
        page.insert(
            format!("{}Error", field),
            Element::new()
                .with_attribute(ERROR_FOR_ATTRIBUTE, field)
                .hidden(),
        );
    }
    page.with(contact::MESSAGE, Element::input(""))
        .with(contact::SUCCESS, Element::new().hidden())
}
