//! Itinerary service error types.

use crate::domain::{
    DateParseError, ItineraryId, SegmentKind, TripId, UnknownTransportationType,
};
use crate::store::StoreError;

use super::builder::ResolveError;

/// Errors from creating, editing or reading itineraries.
///
/// Every variant aborts the operation; nothing is retried and nothing is
/// written once one is returned.
#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    /// The trip does not exist
    #[error("trip {0} not found")]
    TripNotFound(TripId),

    /// The itinerary is not part of the trip, or the trip has none at all
    #[error("{}", describe_missing(.trip_id, .itinerary_id))]
    ItineraryNotFound {
        trip_id: TripId,
        itinerary_id: Option<ItineraryId>,
    },

    /// A segment ends before it starts
    #[error("{0} schedule ends before it starts")]
    InvalidDate(SegmentKind),

    /// A segment falls outside the trip's dates
    #[error("{0} schedule falls outside the trip dates")]
    InvalidItineraryDuration(SegmentKind),

    /// The place resolver could not turn a keyword into a place
    #[error("could not resolve place {keyword:?}")]
    PlaceResolution {
        keyword: String,
        #[source]
        source: ResolveError,
    },

    #[error(transparent)]
    UnknownTransportationType(#[from] UnknownTransportationType),

    #[error(transparent)]
    DateParse(#[from] DateParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ItineraryError {
    /// True for the errors a caller reports as a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ItineraryError::TripNotFound(_) | ItineraryError::ItineraryNotFound { .. }
        )
    }
}

fn describe_missing(trip_id: &TripId, itinerary_id: &Option<ItineraryId>) -> String {
    match itinerary_id {
        Some(id) => format!("itinerary {id} not found in trip {trip_id}"),
        None => format!("trip {trip_id} has no itineraries"),
    }
}
