//! Filter criteria and the evaluator that applies them to a listing sequence.
//!
//! The evaluator is a pure, stable, single-pass filter: survivors keep their
//! relative order, nothing is cloned or mutated, and a criteria value that can
//! never match (for example an inverted price range) simply yields nothing.

use crate::models::{BodyType, FuelType, Listing, Transmission};
use serde::Serialize;
use std::{num::NonZeroU32, str::FromStr};

/// A criteria dimension that is either a wildcard or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Selector<T> {
    Any,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> FromStr for Selector<T> {
    type Err = T::Err;

    // "", "all" and "any" are the wildcard spellings the filter bar sends
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("any")
        {
            return Ok(Selector::Any);
        }
        trimmed.parse().map(Selector::Only)
    }
}

/// Divisor applied to both price bounds before comparing against listing prices.
///
/// Lets one price-range control authored in one-time purchase units drive a
/// per-day rental inventory. The comparison is done as
/// `lower <= price * divisor <= upper`, which is exact integer arithmetic for
/// "divide both bounds by the divisor".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceScale(NonZeroU32);

impl PriceScale {
    pub const ONE_TIME: PriceScale = PriceScale(NonZeroU32::MIN);

    pub fn divided_by(divisor: u32) -> Option<Self> {
        NonZeroU32::new(divisor).map(PriceScale)
    }

    pub fn divisor(self) -> u32 {
        self.0.get()
    }
}

impl Default for PriceScale {
    fn default() -> Self {
        PriceScale::ONE_TIME
    }
}

// One user query over a listing collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub price_min: u64,
    pub price_max: u64, // Inclusive
    pub fuel_type: Selector<FuelType>,
    pub transmission: Selector<Transmission>,
    pub body_type: Selector<BodyType>,
    pub search_query: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_min: 0,
            price_max: u64::MAX,
            fuel_type: Selector::Any,
            transmission: Selector::Any,
            body_type: Selector::Any,
            search_query: String::new(),
        }
    }
}

impl FilterCriteria {
    pub fn with_price_range(self, price_min: u64, price_max: u64) -> Self {
        Self {
            price_min,
            price_max,
            ..self
        }
    }

    pub fn with_fuel_type(self, fuel_type: FuelType) -> Self {
        Self {
            fuel_type: Selector::Only(fuel_type),
            ..self
        }
    }

    pub fn with_transmission(self, transmission: Transmission) -> Self {
        Self {
            transmission: Selector::Only(transmission),
            ..self
        }
    }

    pub fn with_body_type(self, body_type: BodyType) -> Self {
        Self {
            body_type: Selector::Only(body_type),
            ..self
        }
    }

    pub fn with_search_query(self, search_query: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            ..self
        }
    }

    /// True when no dimension restricts anything.
    pub fn is_permissive(&self) -> bool {
        *self == FilterCriteria::default()
    }

    pub fn matches(&self, listing: &Listing, scale: PriceScale) -> bool {
        self.matches_price(listing.price, scale)
            && self.fuel_type.matches(&listing.fuel_type)
            && self.transmission.matches(&listing.transmission)
            && self.body_type.matches(&listing.body_type)
            && self.matches_text(listing)
    }

    fn matches_price(&self, price: u64, scale: PriceScale) -> bool {
        // u128 keeps price * divisor from overflowing for any u64 price
        let scaled = u128::from(price) * u128::from(scale.divisor());
        u128::from(self.price_min) <= scaled && scaled <= u128::from(self.price_max)
    }

    fn matches_text(&self, listing: &Listing) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let query = self.search_query.to_lowercase();
        [
            listing.brand.as_str(),
            listing.model.as_str(),
            listing.body_type.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Returns the listings satisfying every active criterion, in input order.
pub fn evaluate<'a, I>(listings: I, criteria: &FilterCriteria, scale: PriceScale) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut seen = 0usize;
    let matched: Vec<&'a Listing> = listings
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|listing| criteria.matches(listing, scale))
        .collect();

    tracing::debug!(
        input = seen,
        matched = matched.len(),
        divisor = scale.divisor(),
        "Evaluated listing filter"
    );
    matched
}
