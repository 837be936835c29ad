//! Booking form controller

use chrono::NaiveDate;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{BookingRecord, Identity, Participants, PriceQuote},
    repository::Repository,
    services::clock::Clock,
    validation::{parse_count, IdentityCheck},
};

/// Raw values of the booking form fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Date input value (YYYY-MM-DD), empty when nothing is picked
    pub visit_date: String,
    pub adults: String,
    pub children: String,
}

/// Problems that interrupt submission with an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockingReason {
    DateMissing,
    DateInPast,
    NoParticipants,
}

impl BlockingReason {
    pub fn message(&self) -> &'static str {
        match self {
            BlockingReason::DateMissing => "Please select a date.",
            BlockingReason::DateInPast => "Please select a date that is not in the past.",
            BlockingReason::NoParticipants => "Please select at least 1 participant.",
        }
    }
}

/// Everything a submit pass found out about the form
#[derive(Debug, Clone, PartialEq)]
pub struct BookingReview {
    pub quote: PriceQuote,
    pub date: Option<NaiveDate>,
    pub identity: IdentityCheck,
    pub blocking: Option<BlockingReason>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Interrupted with an alert; nothing stored
    Blocked(BlockingReason),
    /// Inline field errors are showing; nothing stored
    Invalid(IdentityCheck),
    /// Booking stored for the payment step
    Committed(BookingRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingSubmission {
    pub review: BookingReview,
    pub outcome: BookingOutcome,
}

#[derive(Clone)]
pub struct BookingService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Earliest selectable visit date
    pub fn earliest_date(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Normalise the participant fields and price them
    pub fn recalculate(&self, adults: &str, children: &str) -> PriceQuote {
        PriceQuote::for_participants(Participants::new(parse_count(adults), parse_count(children)))
    }

    /// Run every submit-time check against fresh field values
    pub fn validate(&self, form: &BookingForm) -> BookingReview {
        let quote = self.recalculate(&form.adults, &form.children);
        let identity = Identity::new(&form.first_name, &form.last_name, &form.email).check();

        let date = parse_date(&form.visit_date);
        let blocking = match date {
            None => Some(BlockingReason::DateMissing),
            Some(date) if date < self.earliest_date() => Some(BlockingReason::DateInPast),
            Some(_) if quote.participants.is_empty() => Some(BlockingReason::NoParticipants),
            Some(_) => None,
        };

        BookingReview {
            quote,
            date,
            identity,
            blocking,
        }
    }

    /// Validate the form and, when it passes, store the booking record
    pub fn submit(&self, form: &BookingForm) -> AppResult<BookingSubmission> {
        let review = self.validate(form);

        let outcome = match review.blocking {
            Some(reason) => BookingOutcome::Blocked(reason),
            None if !review.identity.is_valid() => BookingOutcome::Invalid(review.identity),
            None => {
                let date = review
                    .date
                    .ok_or_else(|| AppError::Validation("Visit date is missing".to_string()))?;

                let booking = BookingRecord::new(
                    Identity::new(&form.first_name, &form.last_name, &form.email),
                    date,
                    review.quote.participants,
                    self.repository.preferences.language(),
                );
                self.repository.bookings.save(&booking)?;

                tracing::info!(
                    "Booking stored for {} on {} ({} adults, {} children, total {})",
                    booking.email,
                    booking.date,
                    booking.adults,
                    booking.children,
                    booking.total
                );
                BookingOutcome::Committed(booking)
            }
        };

        Ok(BookingSubmission { review, outcome })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LanguageCode;
    use crate::services::clock::FixedClock;
    use crate::validation::EmailStatus;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn service() -> (BookingService, Repository) {
        let repository = Repository::in_memory();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 15, 10, 0, 0).unwrap());
        (BookingService::new(repository.clone(), Arc::new(clock)), repository)
    }

    fn anna() -> BookingForm {
        BookingForm {
            first_name: "Anna".to_string(),
            last_name: "Muller".to_string(),
            email: "a@b.com".to_string(),
            visit_date: "2026-12-06".to_string(),
            adults: "2".to_string(),
            children: "1".to_string(),
        }
    }

    #[test]
    fn test_recalculate_clamps_input() {
        let (booking, _) = service();

        let quote = booking.recalculate("2", "1");
        assert_eq!(quote.display(), "€ 7.50");

        let quote = booking.recalculate("-3", "abc");
        assert_eq!(quote.participants, Participants::new(0, 0));
        assert_eq!(quote.display(), "€ 0.00");

        let quote = booking.recalculate("1.9", " 4");
        assert_eq!(quote.participants, Participants::new(1, 4));
        assert_eq!(quote.total, Decimal::new(900, 2));
    }

    #[test]
    fn test_submit_commits_booking() {
        let (booking, repository) = service();

        let submission = booking.submit(&anna()).unwrap();
        let BookingOutcome::Committed(record) = submission.outcome else {
            panic!("expected a committed booking");
        };

        assert_eq!(record.total, Decimal::new(750, 2));
        assert_eq!(record.lang, LanguageCode::default());
        assert_eq!(repository.bookings.get().unwrap(), Some(record));
    }

    #[test]
    fn test_submit_uses_stored_language() {
        let (booking, repository) = service();
        repository
            .preferences
            .set_language(&LanguageCode::new("de").unwrap())
            .unwrap();

        let submission = booking.submit(&anna()).unwrap();
        let BookingOutcome::Committed(record) = submission.outcome else {
            panic!("expected a committed booking");
        };
        assert_eq!(record.lang.as_str(), "de");
    }

    #[test]
    fn test_submit_trims_identity() {
        let (booking, _) = service();
        let form = BookingForm {
            first_name: "  Anna ".to_string(),
            email: " a@b.com ".to_string(),
            ..anna()
        };

        let BookingOutcome::Committed(record) = booking.submit(&form).unwrap().outcome else {
            panic!("expected a committed booking");
        };
        assert_eq!(record.first_name, "Anna");
        assert_eq!(record.email, "a@b.com");
    }

    #[test]
    fn test_no_participants_always_blocks() {
        let (booking, repository) = service();
        let form = BookingForm {
            first_name: String::new(),
            email: "broken".to_string(),
            adults: "0".to_string(),
            children: "0".to_string(),
            ..anna()
        };

        let submission = booking.submit(&form).unwrap();
        assert_eq!(
            submission.outcome,
            BookingOutcome::Blocked(BlockingReason::NoParticipants)
        );
        // inline markers are still refreshed
        assert!(submission.review.identity.shows_first_name_error());
        assert!(submission.review.identity.shows_email_error());
        assert!(repository.bookings.get().unwrap().is_none());
    }

    #[test]
    fn test_missing_date_blocks_before_participants() {
        let (booking, _) = service();
        let form = BookingForm {
            visit_date: String::new(),
            adults: "0".to_string(),
            children: "0".to_string(),
            ..anna()
        };

        let submission = booking.submit(&form).unwrap();
        assert_eq!(
            submission.outcome,
            BookingOutcome::Blocked(BlockingReason::DateMissing)
        );
        assert_eq!(BlockingReason::DateMissing.message(), "Please select a date.");
    }

    #[test]
    fn test_past_date_blocks() {
        let (booking, _) = service();
        let form = BookingForm {
            visit_date: "2026-10-14".to_string(),
            ..anna()
        };
        assert_eq!(
            booking.submit(&form).unwrap().outcome,
            BookingOutcome::Blocked(BlockingReason::DateInPast)
        );

        let today = BookingForm {
            visit_date: "2026-10-15".to_string(),
            ..anna()
        };
        assert!(matches!(
            booking.submit(&today).unwrap().outcome,
            BookingOutcome::Committed(_)
        ));
    }

    #[test]
    fn test_empty_first_name_shows_only_first_name_error() {
        let (booking, repository) = service();
        let form = BookingForm {
            first_name: "   ".to_string(),
            ..anna()
        };

        let submission = booking.submit(&form).unwrap();
        let BookingOutcome::Invalid(check) = submission.outcome else {
            panic!("expected inline errors");
        };
        assert!(check.shows_first_name_error());
        assert!(!check.shows_last_name_error());
        assert!(!check.shows_email_error());
        assert!(repository.bookings.get().unwrap().is_none());
    }

    #[test]
    fn test_empty_email_blocks_without_inline_error() {
        let (booking, repository) = service();
        let form = BookingForm {
            email: String::new(),
            ..anna()
        };

        let submission = booking.submit(&form).unwrap();
        let BookingOutcome::Invalid(check) = submission.outcome else {
            panic!("expected submission to be held back");
        };
        assert_eq!(check.email, EmailStatus::Missing);
        assert!(!check.shows_email_error());
        assert!(repository.bookings.get().unwrap().is_none());
    }

    #[test]
    fn test_earliest_date_is_today() {
        let (booking, _) = service();
        assert_eq!(
            booking.earliest_date(),
            NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
        );
    }
}
