// Booking quotes for per-day rental listings

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Listing;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("listing '{0}' is not available for daily rental")]
    NotRentable(String),
    #[error("return date {returned} is before pickup date {pickup}")]
    ReturnBeforePickup { pickup: NaiveDate, returned: NaiveDate },
    #[error("booking total overflows")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalQuote {
    pub listing_id: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    pub days: u64,
    pub daily_rate: u64,
    pub total: u64,
}

/// Prices a booking from `pickup` to `returned`.
///
/// Days are counted as whole calendar days between the two dates, so
/// returning on the pickup day is a zero-day booking.
pub fn quote(listing: &Listing, pickup: NaiveDate, returned: NaiveDate) -> Result<RentalQuote, QuoteError> {
    if !listing.is_per_day() {
        return Err(QuoteError::NotRentable(listing.id.clone()));
    }
    if returned < pickup {
        return Err(QuoteError::ReturnBeforePickup { pickup, returned });
    }

    let days = (returned - pickup).num_days().unsigned_abs();
    let total = days.checked_mul(listing.price).ok_or(QuoteError::Overflow)?;

    tracing::debug!(listing_id = %listing.id, days, total, "Quoted rental");
    Ok(RentalQuote {
        listing_id: listing.id.clone(),
        pickup_date: pickup,
        return_date: returned,
        days,
        daily_rate: listing.price,
        total,
    })
}
