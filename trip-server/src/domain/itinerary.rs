//! Itineraries and their three segments.

use serde::Serialize;
use std::fmt;

use super::place::PlaceInfo;
use super::time::DateTimeSchedule;
use super::transportation::TransportationType;
use super::trip::TripId;

/// Identifier of a stored itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItineraryId(pub u64);

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of an itinerary's segments a value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Stay,
    Move,
    Accommodation,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Stay => "stay",
            SegmentKind::Move => "move",
            SegmentKind::Accommodation => "accommodation",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time spent at a single place.
#[derive(Debug, Clone, PartialEq)]
pub struct StayInfo {
    pub stay_schedule: DateTimeSchedule,
    pub stay_place_info: PlaceInfo,
}

/// Travel from one place to another.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveInfo {
    pub move_schedule: DateTimeSchedule,
    pub source_place_info: PlaceInfo,
    pub dest_place_info: PlaceInfo,
    pub transportation_type: TransportationType,
}

/// Where the traveller sleeps.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationInfo {
    pub accommodation_schedule: DateTimeSchedule,
    pub accommodation_place_info: PlaceInfo,
}

/// A complete set of segments, built together from one request.
///
/// Used both to create a new itinerary and to overwrite the segments of
/// an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct ItinerarySegments {
    pub stay_info: StayInfo,
    pub move_info: MoveInfo,
    pub accommodation_info: AccommodationInfo,
}

impl ItinerarySegments {
    /// Each segment's schedule, in stay, move, accommodation order.
    pub fn schedules(&self) -> [(SegmentKind, DateTimeSchedule); 3] {
        [
            (SegmentKind::Stay, self.stay_info.stay_schedule),
            (SegmentKind::Move, self.move_info.move_schedule),
            (
                SegmentKind::Accommodation,
                self.accommodation_info.accommodation_schedule,
            ),
        ]
    }
}

/// One stay, one move and one accommodation belonging to a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub id: ItineraryId,

    /// The owning trip.
    pub trip_id: TripId,

    pub stay_info: StayInfo,
    pub move_info: MoveInfo,
    pub accommodation_info: AccommodationInfo,
}

impl Itinerary {
    pub fn new(id: ItineraryId, trip_id: TripId, segments: ItinerarySegments) -> Self {
        Self {
            id,
            trip_id,
            stay_info: segments.stay_info,
            move_info: segments.move_info,
            accommodation_info: segments.accommodation_info,
        }
    }

    /// Replace all three segments in place, keeping id and trip.
    pub fn update(&mut self, segments: ItinerarySegments) {
        self.stay_info = segments.stay_info;
        self.move_info = segments.move_info;
        self.accommodation_info = segments.accommodation_info;
    }
}
