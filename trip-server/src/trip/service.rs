//! Trip orchestration.

use tracing::{debug, info};

use crate::domain::{InvalidDateRange, Trip, TripId};
use crate::store::TripStore;

use super::error::TripError;
use super::request::{TripRequest, TripSearchRequest};
use super::response::TripResponse;

/// Trip operations over a store.
pub struct TripService<S> {
    store: S,
}

impl<S: TripStore> TripService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Every stored trip, ordered by id.
    ///
    /// An empty store is reported as `TripNotFound`.
    pub fn get_all_trips(&self) -> Result<Vec<TripResponse>, TripError> {
        let trips = self.store.find_all_trips()?;
        if trips.is_empty() {
            return Err(TripError::TripNotFound { trip_id: None });
        }

        debug!(count = trips.len(), "listed trips");
        Ok(trips.iter().map(TripResponse::from).collect())
    }

    pub fn get_trip_by_id(&self, trip_id: TripId) -> Result<TripResponse, TripError> {
        self.load_trip(trip_id).map(|trip| TripResponse::from(&trip))
    }

    /// Create a trip with no itineraries.
    pub fn create_trip(&self, request: &TripRequest) -> Result<TripResponse, TripError> {
        let details = request.to_details()?;
        let trip = self.store.create_trip(details)?;

        info!(trip_id = %trip.id, name = %trip.name, "created trip");
        Ok(TripResponse::from(&trip))
    }

    /// Overwrite a trip's name, type and dates. Itineraries are kept as is.
    pub fn edit_trip(
        &self,
        trip_id: TripId,
        request: &TripRequest,
    ) -> Result<TripResponse, TripError> {
        let details = request.to_details()?;
        let saved = self
            .store
            .update_trip(trip_id, details)?
            .ok_or(TripError::TripNotFound {
                trip_id: Some(trip_id),
            })?;

        info!(trip_id = %saved.id, "edited trip");
        Ok(TripResponse::from(&saved))
    }

    /// Trips matching every criterion set in the request.
    ///
    /// A request with no criteria is rejected, as is one whose start date
    /// is after its end date. No matches is an empty list, not an error.
    pub fn search_trips(
        &self,
        request: &TripSearchRequest,
    ) -> Result<Vec<TripResponse>, TripError> {
        if request.is_all_none() {
            return Err(TripError::SearchIllegalArgument);
        }
        if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
            if start > end {
                return Err(InvalidDateRange { start, end }.into());
            }
        }

        let trips = self.store.search_trips(&request.to_filter())?;
        debug!(count = trips.len(), "searched trips");
        Ok(trips.iter().map(TripResponse::from).collect())
    }

    fn load_trip(&self, trip_id: TripId) -> Result<Trip, TripError> {
        self.store
            .get_trip(trip_id)?
            .ok_or(TripError::TripNotFound {
                trip_id: Some(trip_id),
            })
    }
}
