use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    gateway::{ProviderError, ProviderGateway},
    types::{
        dto::{foursquare::VenueSearch, geom::LatLng, place::PlaceDetails},
        model::place::Venue,
    },
};

/// The search result the place lookup always uses. The provider is asked for two venues and the
/// second one is taken, whatever it is.
pub const VENUE_INDEX: usize = 1;

#[derive(Error, Debug)]
pub enum PlaceLookupError {
    #[error("venue search failed: {0}")]
    VenueSearch(#[source] ProviderError),
    #[error("venue search returned {found} venue(s), none at index {index}", index = VENUE_INDEX)]
    MissingVenue { found: usize },
    #[error("venue {venue_id} has no categories")]
    NoCategories { venue_id: String },
    #[error("photo listing failed: {0}")]
    Photos(#[source] ProviderError),
}

/// Venue search followed by one photo listing for the selected venue. Either step failing ends
/// the lookup with no partial result.
#[instrument(skip(gateway))]
pub async fn lookup_place(
    gateway: &ProviderGateway,
    at: LatLng,
) -> Result<PlaceDetails, PlaceLookupError> {
    let search = gateway
        .search_venue(at)
        .await
        .map_err(PlaceLookupError::VenueSearch)?;
    let venue = select_venue(search)?;

    let photos = gateway
        .list_photos(&venue.id)
        .await
        .map_err(PlaceLookupError::Photos)?;
    Ok(venue.with_photos(photos.urls()))
}

pub fn select_venue(search: VenueSearch) -> Result<Venue, PlaceLookupError> {
    let found = search.response.venues.len();
    let venue = search
        .response
        .venues
        .into_iter()
        .nth(VENUE_INDEX)
        .ok_or(PlaceLookupError::MissingVenue { found })?;

    debug!(
        venue_id = %venue.id,
        venue_name = venue.name.as_deref().unwrap_or("unnamed"),
        "selected venue"
    );
    if venue.categories.is_empty() {
        return Err(PlaceLookupError::NoCategories { venue_id: venue.id });
    }
    let categories = venue
        .categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Venue {
        id: venue.id,
        categories,
    })
}
