//! Contact page (contact.html), demo only

use crate::{
    dom::{Browser, Document, ERROR_FOR_ATTRIBUTE},
    services::{
        contact::{ContactForm, ContactOutcome, ContactService},
        Services,
    },
    validation::IdentityCheck,
};

use super::UiEvent;

pub const FORM: &str = "contactForm";
pub const FIRST_NAME: &str = "contactFirstName";
pub const LAST_NAME: &str = "contactLastName";
pub const EMAIL: &str = "contactEmail";
pub const MESSAGE: &str = "contactMessage";
pub const SUCCESS: &str = "contactSuccess";

const FIELDS: [&str; 4] = [FIRST_NAME, LAST_NAME, EMAIL, MESSAGE];

pub struct ContactPage {
    service: ContactService,
}

impl ContactPage {
    pub fn activate<P: Browser>(services: &Services, page: &mut P) -> Option<Self> {
        if !page.contains(FORM) {
            return None;
        }
        Some(Self {
            service: services.contact.clone(),
        })
    }

    pub fn submit<D: Document>(&self, page: &mut D) -> ContactOutcome {
        show_errors(page, &IdentityCheck::passing());

        let field = |id: &str| page.value(id).unwrap_or_default();
        let form = ContactForm {
            first_name: field(FIRST_NAME),
            last_name: field(LAST_NAME),
            email: field(EMAIL),
            message: field(MESSAGE),
        };

        let outcome = self.service.submit(&form);
        match outcome {
            ContactOutcome::Invalid(check) => show_errors(page, &check),
            ContactOutcome::Accepted => {
                page.set_visible(SUCCESS, true);
                for id in FIELDS {
                    page.set_value(id, "");
                }
            }
        }
        outcome
    }

    pub fn handle<D: Document>(&self, page: &mut D, event: &UiEvent) {
        match event {
            UiEvent::Input(id) if FIELDS.contains(&id.as_str()) => {
                page.set_visible(SUCCESS, false);
            }
            UiEvent::Submit(id) if id == FORM => {
                self.submit(page);
            }
            _ => {}
        }
    }
}

fn show_errors<D: Document>(page: &mut D, check: &IdentityCheck) {
    let markers = [
        (FIRST_NAME, check.shows_first_name_error()),
        (LAST_NAME, check.shows_last_name_error()),
        (EMAIL, check.shows_email_error()),
    ];
    for (field, visible) in markers {
        if let Some(marker) = page.find_by_attribute(ERROR_FOR_ATTRIBUTE, field) {
            page.set_visible(&marker, visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::pages::skeleton;
    use crate::pages::tests::services_at;

    fn filled(first: &str, last: &str, email: &str) -> MemoryDocument {
        let mut page = skeleton::contact_page();
        page.set_value(FIRST_NAME, first);
        page.set_value(LAST_NAME, last);
        page.set_value(EMAIL, email);
        page.set_value(MESSAGE, "Hello");
        page
    }

    fn marker_visible(page: &MemoryDocument, field: &str) -> bool {
        let id = page.find_by_attribute(ERROR_FOR_ATTRIBUTE, field).unwrap();
        page.is_visible(&id)
    }

    #[test]
    fn test_success_resets_fields() {
        let services = services_at(2026, 10, 15);
        let mut page = filled("Anna", "Muller", "a@b.com");
        let contact = ContactPage::activate(&services, &mut page).unwrap();

        contact.handle(&mut page, &UiEvent::Submit(FORM.to_string()));

        assert!(page.is_visible(SUCCESS));
        for id in FIELDS {
            assert_eq!(page.value(id).as_deref(), Some(""));
        }
    }

    #[test]
    fn test_input_hides_success() {
        let services = services_at(2026, 10, 15);
        let mut page = filled("Anna", "Muller", "a@b.com");
        let contact = ContactPage::activate(&services, &mut page).unwrap();
        contact.submit(&mut page);
        assert!(page.is_visible(SUCCESS));

        contact.handle(&mut page, &UiEvent::Input(MESSAGE.to_string()));
        assert!(!page.is_visible(SUCCESS));
    }

    #[test]
    fn test_invalid_fields_show_markers() {
        let services = services_at(2026, 10, 15);
        let mut page = filled("", "Muller", "anna@nowhere");
        let contact = ContactPage::activate(&services, &mut page).unwrap();

        assert!(matches!(contact.submit(&mut page), ContactOutcome::Invalid(_)));

        assert!(marker_visible(&page, FIRST_NAME));
        assert!(!marker_visible(&page, LAST_NAME));
        assert!(marker_visible(&page, EMAIL));
        assert!(!page.is_visible(SUCCESS));
        assert_eq!(page.value(LAST_NAME).as_deref(), Some("Muller"));
    }

    #[test]
    fn test_markers_cleared_on_resubmit() {
        let services = services_at(2026, 10, 15);
        let mut page = filled("", "Muller", "a@b.com");
        let contact = ContactPage::activate(&services, &mut page).unwrap();
        contact.submit(&mut page);
        assert!(marker_visible(&page, FIRST_NAME));

        page.set_value(FIRST_NAME, "Anna");
        contact.submit(&mut page);
        assert!(!marker_visible(&page, FIRST_NAME));
        assert!(page.is_visible(SUCCESS));
    }

    #[test]
    fn test_not_on_other_pages() {
        let services = services_at(2026, 10, 15);
        let mut page = skeleton::booking_page();
        assert!(ContactPage::activate(&services, &mut page).is_none());
    }
}
