//! Trip management: listing, lookup, creation, edits and search.

mod error;
mod request;
mod response;
mod service;

pub use error::TripError;
pub use request::{TripRequest, TripSearchRequest};
pub use response::TripResponse;
pub use service::TripService;
