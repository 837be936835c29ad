//! Confirmation record minted by the mock payment step

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::booking::BookingRecord;

/// Prefix of every booking reference
pub const REFERENCE_PREFIX: &str = "SNK";

static REFERENCE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^SNK-\d{8}-\d{6}$").expect("reference pattern is valid")
});

/// How the visitor (pretended to) pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reference shown to the visitor, e.g. `SNK-20260107-482931`.
///
/// The random part comes from a non-cryptographic generator and is only six
/// digits wide: two payments on the same day can collide. Fine for a mock
/// flow, not for real transaction identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    pub fn generate<R: Rng>(date: NaiveDate, rng: &mut R) -> Self {
        let random: u32 = rng.gen_range(0..1_000_000);
        Self(format!(
            "{}-{}-{:06}",
            REFERENCE_PREFIX,
            date.format("%Y%m%d"),
            random
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_well_formed(&self) -> bool {
        REFERENCE_SHAPE.is_match(&self.0)
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Booking record extended with the payment outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRecord {
    #[serde(flatten)]
    pub booking: BookingRecord,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub reference: Reference,
    pub paid_at: DateTime<Utc>,
}

impl ConfirmationRecord {
    pub fn new(
        booking: BookingRecord,
        payment_method: PaymentMethod,
        reference: Reference,
        paid_at: DateTime<Utc>,
    ) -> Self {
        Self {
            booking,
            payment_method,
            reference,
            paid_at,
        }
    }
}
