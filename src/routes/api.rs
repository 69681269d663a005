// Handlers for the marketplace API endpoints

use anyhow::{Context, anyhow};
use axum::{
    Json,
    extract::{Json as JsonExtract, Path, Query, State},
    http::header,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    auth_middleware::AuthenticatedUser,
    error::AppError,
    filter::{self, FilterCriteria, PriceScale},
    models::{Listing, ListingDomain},
    pricing, rental,
};

// --- Request Structs ---

// Filter bar state as sent in the query string
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")] // Match JavaScript frontend keys
pub struct SearchParams {
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub body_type: Option<String>,
    #[serde(alias = "searchQuery")]
    pub q: Option<String>,
    // Overrides the domain's default price divisor
    pub price_divisor: Option<u32>,
}

impl SearchParams {
    pub fn criteria(&self) -> Result<FilterCriteria, AppError> {
        let defaults = FilterCriteria::default();
        Ok(FilterCriteria {
            price_min: self.price_min.unwrap_or(defaults.price_min),
            price_max: self.price_max.unwrap_or(defaults.price_max),
            fuel_type: self.fuel_type.as_deref().unwrap_or_default().parse()?,
            transmission: self.transmission.as_deref().unwrap_or_default().parse()?,
            body_type: self.body_type.as_deref().unwrap_or_default().parse()?,
            search_query: self.q.clone().unwrap_or_default(),
        })
    }

    pub fn price_scale(&self, default: PriceScale) -> Result<PriceScale, AppError> {
        match self.price_divisor {
            None => Ok(default),
            Some(divisor) => PriceScale::divided_by(divisor)
                .ok_or_else(|| AppError::BadRequest("priceDivisor must be greater than zero".into())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
}

// --- Response Wrappers ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView<'a> {
    #[serde(flatten)]
    listing: &'a Listing,
    price_label: String,
}

impl<'a> From<&'a Listing> for ListingView<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            price_label: pricing::price_label(listing),
            listing,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingsResponse<'a> {
    success: bool,
    domain: ListingDomain,
    price_divisor: u32,
    criteria: FilterCriteria,
    count: usize,
    listings: Vec<ListingView<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse<'a> {
    success: bool,
    username: String,
    recent_listings: Vec<ListingView<'a>>,
    rental_highlights: Vec<ListingView<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow<'a> {
    id: &'a str,
    brand: &'a str,
    model: &'a str,
    #[serde(rename = "type")]
    body_type: &'static str,
    seats: u32,
    transmission: &'static str,
    fuel_type: &'static str,
    price: u64,
    price_label: String,
    year: Option<u32>,
    mileage: Option<u64>,
    negotiable: bool,
}

impl<'a> From<&'a Listing> for CsvRow<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            id: &listing.id,
            brand: &listing.brand,
            model: &listing.model,
            body_type: listing.body_type.label(),
            seats: listing.seats,
            transmission: listing.transmission.label(),
            fuel_type: listing.fuel_type.label(),
            price: listing.price,
            price_label: pricing::price_label(listing),
            year: listing.year,
            mileage: listing.odometer,
            negotiable: listing.negotiable,
        }
    }
}

// --- Helpers ---

fn parse_domain(segment: &str) -> Result<ListingDomain, AppError> {
    segment
        .parse()
        .map_err(|_| AppError::NotFound(format!("No inventory named '{}'", segment)))
}

fn default_scale(app_state: &AppState, domain: ListingDomain) -> PriceScale {
    match domain {
        ListingDomain::Sale => PriceScale::ONE_TIME,
        ListingDomain::Rental => app_state.settings.rental_price_scale(),
    }
}

struct Filtered<'a> {
    listings: Vec<&'a Listing>,
    criteria: FilterCriteria,
    scale: PriceScale,
}

fn filtered<'a>(
    app_state: &'a AppState,
    domain: ListingDomain,
    params: &SearchParams,
) -> Result<Filtered<'a>, AppError> {
    let criteria = params.criteria()?;
    let scale = params.price_scale(default_scale(app_state, domain))?;
    let store = app_state.inventory.store(domain);
    Ok(Filtered {
        listings: filter::evaluate(store.get_all(), &criteria, scale),
        criteria,
        scale,
    })
}

pub fn listings_to_csv(listings: &[&Listing]) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for listing in listings {
        writer
            .serialize(CsvRow::from(*listing))
            .with_context(|| format!("Failed to write CSV row for listing {}", listing.id))?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV writer: {}", e))
}

// --- API Handlers ---

pub async fn list_listings(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(domain): Path<String>,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let domain = parse_domain(&domain)?;
    tracing::info!(user = %user.name, %domain, "API call: list_listings with params: {:?}", params);

    let Filtered { listings, criteria, scale } = filtered(&app_state, domain, &params)?;
    tracing::debug!(unfiltered = criteria.is_permissive(), matched = listings.len(), "Filter applied");
    let body = serde_json::to_value(ListingsResponse {
        success: true,
        domain,
        price_divisor: scale.divisor(),
        criteria,
        count: listings.len(),
        listings: listings.into_iter().map(ListingView::from).collect(),
    })
    .context("Failed to serialize listings")?;
    Ok(Json(body))
}

pub async fn get_listing(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Path((domain, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let domain = parse_domain(&domain)?;
    let listing = app_state
        .inventory
        .store(domain)
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("No {} listing with id '{}'", domain, id)))?;

    let body = serde_json::to_value(ListingView::from(listing)).context("Failed to serialize listing")?;
    Ok(Json(body))
}

pub async fn export_listings(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(domain): Path<String>,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let domain = parse_domain(&domain)?;
    let Filtered { listings, .. } = filtered(&app_state, domain, &params)?;
    let csv_bytes = listings_to_csv(&listings)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let file_name = format!("carverse-{}-{}.csv", domain, timestamp);
    tracing::info!(user = %user.name, rows = listings.len(), %file_name, "Exported listings");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", file_name)),
        ],
        csv_bytes,
    ))
}

// Recent sale listings are filtered in one-time purchase units; rentals are not filtered
pub async fn dashboard(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let criteria = params.criteria()?;
    let settings = &app_state.settings;

    let sale = app_state.inventory.store(ListingDomain::Sale);
    let recent_listings = filter::evaluate(sale.get_all(), &criteria, PriceScale::ONE_TIME)
        .into_iter()
        .take(settings.dashboard_recent_limit)
        .map(ListingView::from)
        .collect();

    let rental_highlights = app_state
        .inventory
        .store(ListingDomain::Rental)
        .get_all()
        .iter()
        .take(settings.dashboard_rental_limit)
        .map(ListingView::from)
        .collect();

    let body = serde_json::to_value(DashboardResponse {
        success: true,
        username: user.name,
        recent_listings,
        rental_highlights,
    })
    .context("Failed to serialize dashboard")?;
    Ok(Json(body))
}

pub async fn quote_rental(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    WithRejection(JsonExtract(request), _): WithRejection<JsonExtract<QuoteRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let listing = app_state
        .inventory
        .store(ListingDomain::Rental)
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("No rental listing with id '{}'", id)))?;

    let quote = rental::quote(listing, request.pickup_date, request.return_date)?;
    tracing::info!(
        user = %user.name,
        listing_id = %id,
        days = quote.days,
        total = quote.total,
        "Booking quoted for {} {}",
        listing.brand,
        listing.model
    );
    Ok(Json(quote))
}
