//! Data models for the booking funnel

pub mod booking;
pub mod confirmation;
pub mod identity;
pub mod lang;
pub mod locale;

// Re-export commonly used types
pub use booking::{BookingRecord, BookingSummary, Currency, Participants, PriceQuote};
pub use confirmation::{ConfirmationRecord, PaymentMethod, Reference};
pub use identity::Identity;
pub use lang::LanguageCode;
pub use locale::Dictionary;
