// Listing records and the small enumerations they are built from.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// Returned when a text value does not name a known enumeration variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
    Hatchback,
    Coupe,
    Convertible,
}

impl BodyType {
    pub fn label(self) -> &'static str {
        match self {
            BodyType::Suv => "SUV",
            BodyType::Sedan => "Sedan",
            BodyType::Hatchback => "Hatchback",
            BodyType::Coupe => "Coupe",
            BodyType::Convertible => "Convertible",
        }
    }
}

impl FromStr for BodyType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "suv" => Ok(BodyType::Suv),
            "sedan" => Ok(BodyType::Sedan),
            "hatchback" => Ok(BodyType::Hatchback),
            "coupe" => Ok(BodyType::Coupe),
            "convertible" => Ok(BodyType::Convertible),
            _ => Err(ParseEnumError::new("body type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub fn label(self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
        }
    }
}

impl FromStr for Transmission {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Transmission::Manual),
            "automatic" => Ok(Transmission::Automatic),
            _ => Err(ParseEnumError::new("transmission", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub fn label(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for FuelType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            _ => Err(ParseEnumError::new("fuel type", s)),
        }
    }
}

// Whether a price is a one-time total or a daily rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PriceBasis {
    #[default]
    #[serde(rename = "fixed")]
    OneTime,
    #[serde(rename = "day")]
    PerDay,
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(BodyType, Transmission, FuelType);

/// Which inventory a listing belongs to.
///
/// The path segments `buy` and `rent` are what the HTTP layer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingDomain {
    Sale,
    Rental,
}

impl ListingDomain {
    pub fn path_segment(self) -> &'static str {
        match self {
            ListingDomain::Sale => "buy",
            ListingDomain::Rental => "rent",
        }
    }
}

impl FromStr for ListingDomain {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "sale" => Ok(ListingDomain::Sale),
            "rent" | "rental" => Ok(ListingDomain::Rental),
            _ => Err(ParseEnumError::new("listing domain", s)),
        }
    }
}

impl fmt::Display for ListingDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

// One vehicle available for sale or rental
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")] // Match JavaScript frontend keys
pub struct Listing {
    pub id: String,
    pub brand: String,
    pub model: String,
    #[serde(rename = "type")]
    pub body_type: BodyType,
    pub seats: u32,
    pub transmission: Transmission,
    pub price: u64, // Whole rupees
    #[serde(rename = "priceType", default)]
    pub price_basis: PriceBasis,
    #[serde(default)]
    pub fuel_type: FuelType,
    #[serde(rename = "mileage", default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default)]
    pub negotiable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Listing {
    pub fn is_per_day(&self) -> bool {
        self.price_basis == PriceBasis::PerDay
    }
}
