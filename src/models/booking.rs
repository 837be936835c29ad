//! Booking record and tour pricing

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{identity::Identity, lang::LanguageCode};

/// Price per adult participant (EUR 3.00)
pub const ADULT_PRICE: Decimal = Decimal::from_parts(300, 0, 0, false, 2);
/// Price per child participant (EUR 1.50)
pub const CHILD_PRICE: Decimal = Decimal::from_parts(150, 0, 0, false, 2);

/// Booking currency. Tours are only sold in euros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
        }
    }

    /// Render an amount as shown to visitors, e.g. `€ 7.50`
    pub fn format(&self, amount: Decimal) -> String {
        format!("{} {:.2}", self.symbol(), amount.round_dp(2))
    }
}

/// Adult and child counts for one visit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Participants {
    pub adults: u32,
    pub children: u32,
}

impl Participants {
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    pub fn headcount(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children)
    }

    pub fn is_empty(&self) -> bool {
        self.headcount() == 0
    }

    /// Price for these participants at the fixed tariff, rounded to cents
    pub fn total(&self) -> Decimal {
        (Decimal::from(self.adults) * ADULT_PRICE + Decimal::from(self.children) * CHILD_PRICE)
            .round_dp(2)
    }
}

/// Live price shown while the booking form is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub participants: Participants,
    pub total: Decimal,
}

impl PriceQuote {
    pub fn for_participants(participants: Participants) -> Self {
        Self {
            participants,
            total: participants.total(),
        }
    }

    pub fn display(&self) -> String {
        Currency::Eur.format(self.total)
    }
}

/// Pending booking handed from the booking form to the payment step.
///
/// Built only through [`BookingRecord::new`], which prices the counts at the
/// fixed tariff. Never modified once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Visit date (YYYY-MM-DD)
    pub date: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub currency: Currency,
    #[serde(with = "rust_decimal::serde::float")]
    pub adult_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub child_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub lang: LanguageCode,
}

impl BookingRecord {
    pub fn new(
        identity: Identity,
        date: NaiveDate,
        participants: Participants,
        lang: LanguageCode,
    ) -> Self {
        Self {
            first_name: identity.first_name,
            last_name: identity.last_name,
            email: identity.email,
            date,
            adults: participants.adults,
            children: participants.children,
            currency: Currency::Eur,
            adult_price: ADULT_PRICE,
            child_price: CHILD_PRICE,
            total: participants.total(),
            lang,
        }
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary {
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email.clone(),
            adults: self.adults.to_string(),
            children: self.children.to_string(),
            date: self.date.format("%Y-%m-%d").to_string(),
            total: self.currency.format(self.total),
        }
    }
}

/// Read-only text shown on the payment and thank-you pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub name: String,
    pub email: String,
    pub adults: String,
    pub children: String,
    pub date: String,
    pub total: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BookingRecord {
        BookingRecord::new(
            Identity::new("Anna", "Muller", "a@b.com"),
            NaiveDate::from_ymd_opt(2026, 12, 6).unwrap(),
            Participants::new(2, 1),
            LanguageCode::default(),
        )
    }

    #[test]
    fn test_prices() {
        assert_eq!(ADULT_PRICE.to_string(), "3.00");
        assert_eq!(CHILD_PRICE.to_string(), "1.50");
    }

    #[test]
    fn test_totals() {
        assert_eq!(Participants::new(0, 0).total(), Decimal::ZERO);
        assert_eq!(Participants::new(2, 1).total(), Decimal::new(750, 2));
        assert_eq!(Participants::new(1, 3).total(), Decimal::new(750, 2));
        assert_eq!(Participants::new(0, 1).total(), Decimal::new(150, 2));
        assert_eq!(Participants::new(10, 0).total(), Decimal::new(3000, 2));
    }

    #[test]
    fn test_quote_display() {
        let quote = PriceQuote::for_participants(Participants::new(2, 1));
        assert_eq!(quote.display(), "€ 7.50");
        assert_eq!(PriceQuote::for_participants(Participants::default()).display(), "€ 0.00");
        assert_eq!(PriceQuote::for_participants(Participants::new(4, 0)).display(), "€ 12.00");
    }

    #[test]
    fn test_headcount_does_not_overflow() {
        let p = Participants::new(u32::MAX, u32::MAX);
        assert_eq!(p.headcount(), 2 * u64::from(u32::MAX));
        assert!(!p.is_empty());
    }

    #[test]
    fn test_record_is_priced_from_counts() {
        let booking = record();
        assert_eq!(booking.total, Decimal::new(750, 2));
        assert_eq!(booking.currency, Currency::Eur);
        assert_eq!(booking.adult_price, ADULT_PRICE);
        assert_eq!(booking.child_price, CHILD_PRICE);
    }

    #[test]
    fn test_stored_shape() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["firstName"], "Anna");
        assert_eq!(json["date"], "2026-12-06");
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["total"], 7.5);
        assert_eq!(json["adultPrice"], 3.0);
        assert_eq!(json["lang"], "en");
    }

    #[test]
    fn test_json_round_trip() {
        let booking = record();
        let raw = serde_json::to_string(&booking).unwrap();
        let back: BookingRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn test_summary() {
        let summary = record().summary();
        assert_eq!(summary.name, "Anna Muller");
        assert_eq!(summary.adults, "2");
        assert_eq!(summary.children, "1");
        assert_eq!(summary.date, "2026-12-06");
        assert_eq!(summary.total, "€ 7.50");
    }
}
