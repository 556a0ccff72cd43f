//! Itinerary creation, editing and lookup.
//!
//! An itinerary request names three segments with string times and place
//! keywords. The validator checks the times against each other and
//! against the trip; the builder resolves the places; the service ties
//! both to the stores.

mod builder;
mod error;
mod request;
mod response;
mod service;
pub mod validator;


pub use builder::{PlaceResolver, ResolveError, SegmentBuilder};
pub use error::ItineraryError;
pub use request::{AccommodationInfoRequest, ItineraryRequest, MoveInfoRequest, StayInfoRequest};
pub use response::{
    AccommodationInfoResponse, ItineraryResponse, MoveInfoResponse, StayInfoResponse,
};
pub use service::ItineraryService;
pub use validator::{validate_duration, validate_ordering};

#[cfg(test)]
pub(crate) use request::fixtures;
