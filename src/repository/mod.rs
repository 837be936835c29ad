//! Repository layer over browser storage

pub mod bookings;
pub mod confirmations;
pub mod preferences;
pub mod storage;

use std::sync::Arc;

use crate::error::AppResult;

pub use storage::{MemoryStorage, Storage};

/// Durable key holding the last selected language
pub const LANG_KEY: &str = "nikolaus_lang";
/// Session key holding the booking awaiting payment
pub const BOOKING_KEY: &str = "nikolaus_booking";
/// Session key holding the confirmation of a completed payment
pub const CONFIRMATION_KEY: &str = "nikolaus_confirmation";

/// Main repository struct holding both storage scopes
#[derive(Clone)]
pub struct Repository {
    pub session: Arc<dyn Storage>,
    pub local: Arc<dyn Storage>,
    pub bookings: bookings::BookingsRepository,
    pub confirmations: confirmations::ConfirmationsRepository,
    pub preferences: preferences::PreferencesRepository,
}

impl Repository {
    /// Create a new repository over session-scoped and durable storage
    pub fn new(session: Arc<dyn Storage>, local: Arc<dyn Storage>) -> Self {
        Self {
            bookings: bookings::BookingsRepository::new(session.clone()),
            confirmations: confirmations::ConfirmationsRepository::new(session.clone()),
            preferences: preferences::PreferencesRepository::new(local.clone()),
            session,
            local,
        }
    }

    /// Repository backed by fresh in-memory storage for both scopes
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), Arc::new(MemoryStorage::new()))
    }

    /// End the browsing session: session-scoped records are dropped, the
    /// language preference survives.
    pub fn end_session(&self) -> AppResult<()> {
        self.session.clear()
    }
}
