//! Travel planning backend.
//!
//! Trips span calendar days; itineraries attach stay, move and
//! accommodation segments to a trip. Every itinerary write is checked
//! against the trip's dates, and place names are resolved to addresses
//! and coordinates through a keyword geocoding API.

pub mod cache;
pub mod config;
pub mod domain;
pub mod geocode;
pub mod itinerary;
pub mod store;
pub mod trip;
