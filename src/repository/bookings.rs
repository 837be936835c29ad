//! Pending booking handoff (session scope)

use std::sync::Arc;

use super::storage::{load_json, save_json, Storage};
use super::BOOKING_KEY;
use crate::{error::AppResult, models::BookingRecord};

#[derive(Clone)]
pub struct BookingsRepository {
    session: Arc<dyn Storage>,
}

impl BookingsRepository {
    pub fn new(session: Arc<dyn Storage>) -> Self {
        Self { session }
    }

    /// Store the booking awaiting payment
    pub fn save(&self, booking: &BookingRecord) -> AppResult<()> {
        save_json(self.session.as_ref(), BOOKING_KEY, booking)
    }

    /// Get the booking awaiting payment, if any readable one is stored
    pub fn get(&self) -> AppResult<Option<BookingRecord>> {
        load_json(self.session.as_ref(), BOOKING_KEY)
    }

    pub fn remove(&self) -> AppResult<()> {
        self.session.remove_item(BOOKING_KEY)
    }
}
