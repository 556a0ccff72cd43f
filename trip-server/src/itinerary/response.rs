//! Itinerary response DTOs.

use serde::Serialize;

use crate::domain::{
    AccommodationInfo, Itinerary, ItineraryId, MoveInfo, PlaceInfo, StayInfo, TransportationType,
    TripId, format_date_time,
};

/// The stay segment of a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StayInfoResponse {
    /// Start time in `yyyy-MM-dd HH:mm`
    pub start_date_time: String,

    /// End time in `yyyy-MM-dd HH:mm`
    pub end_date_time: String,

    pub stay_place_info: PlaceInfo,
}

/// The move segment of a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveInfoResponse {
    pub start_date_time: String,
    pub end_date_time: String,
    pub source_place_info: PlaceInfo,
    pub dest_place_info: PlaceInfo,
    pub transportation_type: TransportationType,
}

/// The accommodation segment of a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccommodationInfoResponse {
    pub start_date_time: String,
    pub end_date_time: String,
    pub accommodation_place_info: PlaceInfo,
}

/// An itinerary as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryResponse {
    pub id: ItineraryId,
    pub trip_id: TripId,
    pub stay_info: StayInfoResponse,
    pub move_info: MoveInfoResponse,
    pub accommodation_info: AccommodationInfoResponse,
}

impl From<&StayInfo> for StayInfoResponse {
    fn from(stay: &StayInfo) -> Self {
        Self {
            start_date_time: format_date_time(stay.stay_schedule.start_date_time()),
            end_date_time: format_date_time(stay.stay_schedule.end_date_time()),
            stay_place_info: stay.stay_place_info.clone(),
        }
    }
}

impl From<&MoveInfo> for MoveInfoResponse {
    fn from(m: &MoveInfo) -> Self {
        Self {
            start_date_time: format_date_time(m.move_schedule.start_date_time()),
            end_date_time: format_date_time(m.move_schedule.end_date_time()),
            source_place_info: m.source_place_info.clone(),
            dest_place_info: m.dest_place_info.clone(),
            transportation_type: m.transportation_type,
        }
    }
}

impl From<&AccommodationInfo> for AccommodationInfoResponse {
    fn from(a: &AccommodationInfo) -> Self {
        Self {
            start_date_time: format_date_time(a.accommodation_schedule.start_date_time()),
            end_date_time: format_date_time(a.accommodation_schedule.end_date_time()),
            accommodation_place_info: a.accommodation_place_info.clone(),
        }
    }
}

impl From<&Itinerary> for ItineraryResponse {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id,
            trip_id: itinerary.trip_id,
            stay_info: (&itinerary.stay_info).into(),
            move_info: (&itinerary.move_info).into(),
            accommodation_info: (&itinerary.accommodation_info).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::segments;

    #[test]
    fn times_use_boundary_format() {
        let itinerary = Itinerary::new(ItineraryId(2), TripId(1), segments("Museum"));
        let response = ItineraryResponse::from(&itinerary);

        assert_eq!(response.id, ItineraryId(2));
        assert_eq!(response.trip_id, TripId(1));
        assert_eq!(response.stay_info.start_date_time, "2023-10-20 09:00");
        assert_eq!(response.stay_info.end_date_time, "2023-10-20 18:00");
        assert_eq!(response.move_info.transportation_type, TransportationType::Bus);
        assert_eq!(
            response.accommodation_info.end_date_time,
            "2023-10-21 10:00"
        );
    }

    #[test]
    fn serializes_to_json() {
        let itinerary = Itinerary::new(ItineraryId(2), TripId(1), segments("Museum"));
        let json = serde_json::to_value(ItineraryResponse::from(&itinerary)).unwrap();

        assert_eq!(json["id"], 2);
        assert_eq!(json["trip_id"], 1);
        assert_eq!(json["move_info"]["transportation_type"], "BUS");
        assert_eq!(json["stay_info"]["stay_place_info"]["place_name"], "Museum");
    }
}
