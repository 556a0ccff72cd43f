//! Itinerary schedule validation.
//!
//! Two rules apply to every itinerary write:
//!
//! - ordering: each segment starts no later than it ends
//! - duration: each segment lies within the trip window, from midnight of
//!   the trip's first day to midnight after its last day
//!
//! Ordering is always checked first. A reversed segment makes the window
//! check meaningless, so its error is the one reported.

use tracing::debug;

use crate::domain::{DateTimeSchedule, SegmentKind, Trip, TripWindow};

use super::error::ItineraryError;
use super::request::ItineraryRequest;

/// Check that no segment of the request runs backwards.
///
/// Fails with `InvalidDate` naming the first reversed segment, in stay,
/// move, accommodation order.
pub fn validate_ordering(request: &ItineraryRequest) -> Result<(), ItineraryError> {
    check_ordering(&request.schedules()?)
}

/// Check that every segment of the request fits inside the trip window.
///
/// Fails with `InvalidItineraryDuration` naming the first segment outside.
pub fn validate_duration(trip: &Trip, request: &ItineraryRequest) -> Result<(), ItineraryError> {
    check_duration(&trip.window(), &request.schedules()?)
}

/// Run both checks in canonical order, parsing the request once.
pub fn validate(trip: &Trip, request: &ItineraryRequest) -> Result<(), ItineraryError> {
    let schedules = request.schedules()?;
    check_ordering(&schedules)?;
    check_duration(&trip.window(), &schedules)
}

/// Ordering check over already-parsed schedules.
pub fn check_ordering(schedules: &[(SegmentKind, DateTimeSchedule)]) -> Result<(), ItineraryError> {
    match schedules.iter().find(|(_, s)| !s.is_ordered()) {
        Some((kind, schedule)) => {
            debug!(segment = %kind, %schedule, "segment ends before it starts");
            Err(ItineraryError::InvalidDate(*kind))
        }
        None => Ok(()),
    }
}

/// Window check over already-parsed schedules.
pub fn check_duration(
    window: &TripWindow,
    schedules: &[(SegmentKind, DateTimeSchedule)],
) -> Result<(), ItineraryError> {
    match schedules.iter().find(|(_, s)| !window.contains_schedule(s)) {
        Some((kind, schedule)) => {
            debug!(segment = %kind, %schedule, "segment outside trip window");
            Err(ItineraryError::InvalidItineraryDuration(*kind))
        }
        None => Ok(()),
    }
}
