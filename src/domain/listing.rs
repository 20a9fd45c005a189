// src/domain/listing.rs
use crate::domain::costs::CostBreakdown;
use serde::Serialize;

/// A housing listing as stored in the `properties` table.
/// Read-only to the finance core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: i64,

    // Location
    pub address: String,
    pub neighborhood: Option<String>,
    pub county: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    // Physical attributes
    pub price: i64,
    pub bedrooms: i64,
    pub bathrooms: f64,
    pub square_feet: Option<i64>,
    pub property_type: Option<String>,
    pub year_built: Option<i64>,

    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// A listing annotated with its derived monthly costs, as returned by the
/// listing query path. Built per response and then dropped.
#[derive(Debug, Clone, Serialize)]
pub struct ListingWithCosts {
    #[serde(flatten)]
    pub listing: Listing,
    pub total_monthly_cost: i64,
    pub cost_breakdown: CostBreakdown,
}

impl ListingWithCosts {
    pub fn new(listing: Listing, cost_breakdown: CostBreakdown) -> Self {
        Self {
            total_monthly_cost: cost_breakdown.total,
            cost_breakdown,
            listing,
        }
    }
}

/// Arg-min over total monthly cost. First listing wins on ties.
pub fn best_value(listings: &[ListingWithCosts]) -> Option<&ListingWithCosts> {
    listings.iter().fold(None, |best, l| match best {
        Some(b) if b.total_monthly_cost <= l.total_monthly_cost => Some(b),
        _ => Some(l),
    })
}
