//! Trips.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::itinerary::{Itinerary, ItineraryId};
use super::time::TripSchedule;
use super::window::TripWindow;

/// Identifier of a stored trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TripId(pub u64);

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a trip stays in the home country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripType {
    Domestic,
    Overseas,
}

/// The editable part of a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDetails {
    pub name: String,
    pub trip_type: TripType,
    pub schedule: TripSchedule,
}

/// A named trip over a span of calendar days.
///
/// The trip owns its itineraries, kept in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub trip_type: TripType,
    pub schedule: TripSchedule,
    pub itineraries: Vec<Itinerary>,
}

impl Trip {
    /// Create a trip with no itineraries.
    pub fn new(id: TripId, details: TripDetails) -> Self {
        Self {
            id,
            name: details.name,
            trip_type: details.trip_type,
            schedule: details.schedule,
            itineraries: Vec::new(),
        }
    }

    /// Overwrite name, type and schedule. Itineraries are kept.
    pub fn update(&mut self, details: TripDetails) {
        self.name = details.name;
        self.trip_type = details.trip_type;
        self.schedule = details.schedule;
    }

    /// The datetime window itineraries must fit inside.
    pub fn window(&self) -> TripWindow {
        TripWindow::from_schedule(&self.schedule)
    }

    /// Find an itinerary by id. The first match wins.
    pub fn itinerary(&self, id: ItineraryId) -> Option<&Itinerary> {
        self.itineraries.iter().find(|i| i.id == id)
    }

    /// Mutable variant of [`Trip::itinerary`].
    pub fn itinerary_mut(&mut self, id: ItineraryId) -> Option<&mut Itinerary> {
        self.itineraries.iter_mut().find(|i| i.id == id)
    }
}
