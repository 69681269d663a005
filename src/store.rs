// Listing stores: the canonical in-memory inventories for sale and rental

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::HashSet, fs, path::Path, sync::Arc};

use crate::models::{Listing, ListingDomain, PriceBasis};
use crate::seed;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate listing id '{0}'")]
    DuplicateId(String),
    #[error("listing id must not be empty")]
    EmptyId,
    #[error("listing '{0}' must have at least one seat")]
    NoSeats(String),
    #[error("listing '{0}' is priced per day but belongs to the sale inventory")]
    PerDayInSale(String),
}

/// Read access to one domain's listings, in their canonical order.
pub trait ListingStore: Send + Sync {
    fn domain(&self) -> ListingDomain;

    fn get_all(&self) -> &[Listing];

    fn get(&self, id: &str) -> Option<&Listing> {
        self.get_all().iter().find(|listing| listing.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryStore {
    domain: ListingDomain,
    listings: Vec<Listing>,
}

impl InMemoryStore {
    pub fn new(domain: ListingDomain, listings: Vec<Listing>) -> Result<Self, StoreError> {
        let mut seen_ids = HashSet::new();
        for listing in &listings {
            if listing.id.is_empty() {
                return Err(StoreError::EmptyId);
            }
            if !seen_ids.insert(listing.id.as_str()) {
                return Err(StoreError::DuplicateId(listing.id.clone()));
            }
            if listing.seats == 0 {
                return Err(StoreError::NoSeats(listing.id.clone()));
            }
            if domain == ListingDomain::Sale && listing.price_basis == PriceBasis::PerDay {
                return Err(StoreError::PerDayInSale(listing.id.clone()));
            }
        }
        Ok(Self { domain, listings })
    }
}

impl ListingStore for InMemoryStore {
    fn domain(&self) -> ListingDomain {
        self.domain
    }

    fn get_all(&self) -> &[Listing] {
        &self.listings
    }
}

// Shape of an inventory file on disk
#[derive(Debug, Deserialize)]
struct InventoryFile {
    #[serde(default)]
    sale: Vec<Listing>,
    #[serde(default)]
    rental: Vec<Listing>,
}

/// The sale and rental stores served by the application.
#[derive(Clone)]
pub struct Inventory {
    sale: Arc<dyn ListingStore>,
    rental: Arc<dyn ListingStore>,
}

impl Inventory {
    pub fn new(sale: Arc<dyn ListingStore>, rental: Arc<dyn ListingStore>) -> Self {
        Self { sale, rental }
    }

    pub fn from_listings(sale: Vec<Listing>, rental: Vec<Listing>) -> Result<Self, StoreError> {
        Ok(Self::new(
            Arc::new(InMemoryStore::new(ListingDomain::Sale, sale)?),
            Arc::new(InMemoryStore::new(ListingDomain::Rental, rental)?),
        ))
    }

    // Built-in demo inventory
    pub fn seeded() -> Result<Self, StoreError> {
        Self::from_listings(seed::SALE_LISTINGS.clone(), seed::RENTAL_LISTINGS.clone())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "Loading inventory file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read inventory file {}", path.display()))?;
        let file: InventoryFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse inventory file {}", path.display()))?;
        let inventory = Self::from_listings(file.sale, file.rental)
            .context("Inventory file violates listing invariants")?;
        Ok(inventory)
    }

    pub fn store(&self, domain: ListingDomain) -> &dyn ListingStore {
        match domain {
            ListingDomain::Sale => self.sale.as_ref(),
            ListingDomain::Rental => self.rental.as_ref(),
        }
    }
}
