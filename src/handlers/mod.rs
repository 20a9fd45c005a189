pub mod api;
pub mod calculator;
pub mod pages;
pub mod params;

use crate::domain::{derive_costs, Listing, ListingWithCosts};
use crate::errors::ServerError;

/// Attach derived monthly costs to stored listings.
pub(crate) fn with_costs(listings: Vec<Listing>) -> Result<Vec<ListingWithCosts>, ServerError> {
    listings
        .into_iter()
        .map(|listing| match derive_costs(&listing) {
            Ok(costs) => Ok(ListingWithCosts::new(listing, costs)),
            Err(e) => {
                tracing::error!(listing_id = listing.id, error = %e, "stored listing has unusable figures");
                Err(ServerError::InternalError)
            }
        })
        .collect()
}
