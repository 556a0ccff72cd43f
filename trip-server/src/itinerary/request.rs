//! Raw itinerary requests.
//!
//! Times are `yyyy-MM-dd HH:mm` strings and places are free-text keywords,
//! exactly as received. Parsing happens in the validator and builder.

use serde::Deserialize;

use crate::domain::{DateParseError, DateTimeSchedule, SegmentKind};

/// Request for the stay segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StayInfoRequest {
    pub start_date_time: String,
    pub end_date_time: String,
    pub stay_place_name: String,
}

/// Request for the move segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveInfoRequest {
    pub start_date_time: String,
    pub end_date_time: String,
    pub source_place_name: String,
    pub dest_place_name: String,

    /// One of the `TransportationType` values, e.g. "TRAIN"
    pub transportation_type: String,
}

/// Request for the accommodation segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccommodationInfoRequest {
    pub start_date_time: String,
    pub end_date_time: String,
    pub accommodation_place_name: String,
}

/// Request to create an itinerary or replace one's segments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItineraryRequest {
    pub stay_info: StayInfoRequest,
    pub move_info: MoveInfoRequest,
    pub accommodation_info: AccommodationInfoRequest,
}

impl StayInfoRequest {
    pub fn schedule(&self) -> Result<DateTimeSchedule, DateParseError> {
        DateTimeSchedule::parse(&self.start_date_time, &self.end_date_time)
    }
}

impl MoveInfoRequest {
    pub fn schedule(&self) -> Result<DateTimeSchedule, DateParseError> {
        DateTimeSchedule::parse(&self.start_date_time, &self.end_date_time)
    }
}

impl AccommodationInfoRequest {
    pub fn schedule(&self) -> Result<DateTimeSchedule, DateParseError> {
        DateTimeSchedule::parse(&self.start_date_time, &self.end_date_time)
    }
}

impl ItineraryRequest {
    /// Parse every segment's schedule, in stay, move, accommodation order.
    ///
    /// Fails on the first string that does not match the datetime pattern.
    pub fn schedules(&self) -> Result<[(SegmentKind, DateTimeSchedule); 3], DateParseError> {
        Ok([
            (SegmentKind::Stay, self.stay_info.schedule()?),
            (SegmentKind::Move, self.move_info.schedule()?),
            (
                SegmentKind::Accommodation,
                self.accommodation_info.schedule()?,
            ),
        ])
    }
}
