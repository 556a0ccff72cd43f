//! Domain types for the trip planner.
//!
//! Trips, itineraries and their segments, plus the date handling they
//! share. Types that carry an invariant enforce it at construction time;
//! itinerary schedules are the exception and are checked by the itinerary
//! validator instead.

mod itinerary;
mod place;
mod time;
mod transportation;
mod trip;
mod window;

pub use itinerary::{
    AccommodationInfo, Itinerary, ItineraryId, ItinerarySegments, MoveInfo, SegmentKind, StayInfo,
};
pub use place::PlaceInfo;
pub use time::{
    DATE_TIME_FORMAT, DateParseError, DateTimeSchedule, InvalidDateRange, TripSchedule,
    format_date_time, parse_date_time,
};
pub use transportation::{TransportationType, UnknownTransportationType};
pub use trip::{Trip, TripDetails, TripId, TripType};
pub use window::TripWindow;

#[cfg(test)]
pub(crate) use itinerary::fixtures;
