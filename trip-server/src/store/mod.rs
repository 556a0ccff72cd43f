//! Persistence seams for trips and itineraries.
//!
//! The services only talk to these traits, and each service write is a
//! single trait call. `MemoryStore` is the in-process implementation; a
//! database-backed store would implement the same traits.

mod error;
mod memory;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{Itinerary, ItinerarySegments, Trip, TripDetails, TripId, TripType};

pub use error::StoreError;
pub use memory::MemoryStore;

/// Criteria for searching trips. Absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripFilter {
    /// Substring of the trip name
    pub name: Option<String>,

    pub trip_type: Option<TripType>,

    /// Trips starting on or after this date
    pub start_date: Option<NaiveDate>,

    /// Trips ending on or before this date
    pub end_date: Option<NaiveDate>,
}

impl TripFilter {
    /// True if the trip satisfies every criterion that is set.
    pub fn matches(&self, trip: &Trip) -> bool {
        self.name
            .as_deref()
            .is_none_or(|name| trip.name.contains(name))
            && self.trip_type.is_none_or(|t| trip.trip_type == t)
            && self
                .start_date
                .is_none_or(|start| trip.schedule.start_date() >= start)
            && self
                .end_date
                .is_none_or(|end| trip.schedule.end_date() <= end)
    }
}

/// Storage for trips, each loaded together with its itineraries.
pub trait TripStore {
    /// Load a trip by id.
    fn get_trip(&self, id: TripId) -> Result<Option<Trip>, StoreError>;

    /// All trips, ordered by id.
    fn find_all_trips(&self) -> Result<Vec<Trip>, StoreError>;

    /// Trips matching a filter, ordered by id.
    fn search_trips(&self, filter: &TripFilter) -> Result<Vec<Trip>, StoreError>;

    /// Store a new trip under a fresh id.
    fn create_trip(&self, details: TripDetails) -> Result<Trip, StoreError>;

    /// Overwrite a trip's name, type and schedule in one step.
    ///
    /// The stored itinerary list is left as is. Returns `None` if the trip
    /// does not exist.
    fn update_trip(&self, id: TripId, details: TripDetails) -> Result<Option<Trip>, StoreError>;
}

/// Storage for itineraries.
pub trait ItineraryStore {
    /// Store a new itinerary under a fresh id and append it to its trip.
    ///
    /// Both happen atomically; concurrent creations on one trip all end up
    /// attached.
    fn create_itinerary(
        &self,
        trip_id: TripId,
        segments: ItinerarySegments,
    ) -> Result<Itinerary, StoreError>;

    /// Overwrite an existing itinerary, including the trip's copy.
    fn save_itinerary(&self, itinerary: &Itinerary) -> Result<Itinerary, StoreError>;
}

impl<T: TripStore + ?Sized> TripStore for Arc<T> {
    fn get_trip(&self, id: TripId) -> Result<Option<Trip>, StoreError> {
        (**self).get_trip(id)
    }

    fn find_all_trips(&self) -> Result<Vec<Trip>, StoreError> {
        (**self).find_all_trips()
    }

    fn search_trips(&self, filter: &TripFilter) -> Result<Vec<Trip>, StoreError> {
        (**self).search_trips(filter)
    }

    fn create_trip(&self, details: TripDetails) -> Result<Trip, StoreError> {
        (**self).create_trip(details)
    }

    fn update_trip(&self, id: TripId, details: TripDetails) -> Result<Option<Trip>, StoreError> {
        (**self).update_trip(id, details)
    }
}

impl<T: ItineraryStore + ?Sized> ItineraryStore for Arc<T> {
    fn create_itinerary(
        &self,
        trip_id: TripId,
        segments: ItinerarySegments,
    ) -> Result<Itinerary, StoreError> {
        (**self).create_itinerary(trip_id, segments)
    }

    fn save_itinerary(&self, itinerary: &Itinerary) -> Result<Itinerary, StoreError> {
        (**self).save_itinerary(itinerary)
    }
}
