//! Trip response DTOs.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Trip, TripId, TripType};
use crate::itinerary::ItineraryResponse;

/// A trip as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResponse {
    pub id: TripId,
    pub name: String,
    pub trip_type: TripType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub itineraries: Vec<ItineraryResponse>,
}

impl From<&Trip> for TripResponse {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id,
            name: trip.name.clone(),
            trip_type: trip.trip_type,
            start_date: trip.schedule.start_date(),
            end_date: trip.schedule.end_date(),
            itineraries: trip.itineraries.iter().map(ItineraryResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::segments;
    use crate::domain::{Itinerary, ItineraryId, TripDetails, TripSchedule};

    #[test]
    fn from_trip() {
        let d = |day| NaiveDate::from_ymd_opt(2023, 10, day).unwrap();
        let mut trip = Trip::new(
            TripId(4),
            TripDetails {
                name: "Jeonju".to_string(),
                trip_type: TripType::Domestic,
                schedule: TripSchedule::new(d(20), d(21)).unwrap(),
            },
        );
        trip.itineraries
            .push(Itinerary::new(ItineraryId(1), TripId(4), segments("Hanok Village")));

        let response = TripResponse::from(&trip);
        assert_eq!(response.id, TripId(4));
        assert_eq!(response.end_date, d(21));
        assert_eq!(response.itineraries.len(), 1);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["start_date"], "2023-10-20");
        assert_eq!(json["trip_type"], "DOMESTIC");
    }
}
