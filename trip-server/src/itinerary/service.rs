//! Itinerary orchestration.
//!
//! Loads the owning trip, validates the request against it, builds the
//! segments and persists the result with a single store call. Every check
//! runs before that write, so a failed request leaves the stores untouched.

use tracing::{debug, info};

use crate::domain::{ItineraryId, Trip, TripId};
use crate::store::{ItineraryStore, TripStore};

use super::builder::{PlaceResolver, SegmentBuilder};
use super::error::ItineraryError;
use super::request::ItineraryRequest;
use super::response::ItineraryResponse;
use super::validator;

/// Itinerary operations over a place resolver and a store.
///
/// Both collaborators are supplied at construction.
pub struct ItineraryService<R, S> {
    resolver: R,
    store: S,
}

impl<R, S> ItineraryService<R, S>
where
    R: PlaceResolver,
    S: TripStore + ItineraryStore,
{
    pub fn new(resolver: R, store: S) -> Self {
        Self { resolver, store }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All itineraries of a trip, in stored order.
    ///
    /// A trip with no itineraries is reported as `ItineraryNotFound`.
    pub fn get_all_itineraries(
        &self,
        trip_id: TripId,
    ) -> Result<Vec<ItineraryResponse>, ItineraryError> {
        let trip = self.load_trip(trip_id)?;

        if trip.itineraries.is_empty() {
            return Err(ItineraryError::ItineraryNotFound {
                trip_id,
                itinerary_id: None,
            });
        }

        Ok(trip.itineraries.iter().map(ItineraryResponse::from).collect())
    }

    /// One itinerary of a trip.
    pub fn get_itinerary_by_id(
        &self,
        trip_id: TripId,
        itinerary_id: ItineraryId,
    ) -> Result<ItineraryResponse, ItineraryError> {
        let trip = self.load_trip(trip_id)?;

        trip.itinerary(itinerary_id)
            .map(ItineraryResponse::from)
            .ok_or(ItineraryError::ItineraryNotFound {
                trip_id,
                itinerary_id: Some(itinerary_id),
            })
    }

    /// Create an itinerary and attach it to its trip.
    pub fn create_itinerary(
        &self,
        trip_id: TripId,
        request: &ItineraryRequest,
    ) -> Result<ItineraryResponse, ItineraryError> {
        let trip = self.load_trip(trip_id)?;
        validator::validate(&trip, request)?;

        let segments = SegmentBuilder::new(&self.resolver).segments(request)?;

        let itinerary = self.store.create_itinerary(trip.id, segments)?;

        info!(trip_id = %trip.id, itinerary_id = %itinerary.id, "created itinerary");
        Ok(ItineraryResponse::from(&itinerary))
    }

    /// Replace all segments of an existing itinerary.
    ///
    /// The itinerary keeps its id and position in the trip.
    pub fn edit_itinerary(
        &self,
        trip_id: TripId,
        itinerary_id: ItineraryId,
        request: &ItineraryRequest,
    ) -> Result<ItineraryResponse, ItineraryError> {
        let mut trip = self.load_trip(trip_id)?;
        validator::validate(&trip, request)?;

        let not_found = ItineraryError::ItineraryNotFound {
            trip_id,
            itinerary_id: Some(itinerary_id),
        };
        if trip.itinerary(itinerary_id).is_none() {
            return Err(not_found);
        }

        let segments = SegmentBuilder::new(&self.resolver).segments(request)?;

        let itinerary = trip.itinerary_mut(itinerary_id).ok_or(not_found)?;
        itinerary.update(segments);
        let saved = self.store.save_itinerary(itinerary)?;

        info!(trip_id = %trip.id, itinerary_id = %saved.id, "edited itinerary");
        Ok(ItineraryResponse::from(&saved))
    }

    fn load_trip(&self, trip_id: TripId) -> Result<Trip, ItineraryError> {
        let trip = self
            .store
            .get_trip(trip_id)?
            .ok_or(ItineraryError::TripNotFound(trip_id))?;

        debug!(
            trip_id = %trip.id,
            itineraries = trip.itineraries.len(),
            "loaded trip"
        );
        Ok(trip)
    }
}
