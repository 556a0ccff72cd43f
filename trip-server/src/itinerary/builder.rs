//! Segment construction from raw requests.
//!
//! Turns string times and place keywords into typed segments. Place
//! keywords go through a [`PlaceResolver`]; ordering and trip-window checks
//! are left to the validator.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    AccommodationInfo, ItinerarySegments, MoveInfo, PlaceInfo, StayInfo, TransportationType,
};

use super::error::ItineraryError;
use super::request::{AccommodationInfoRequest, ItineraryRequest, MoveInfoRequest, StayInfoRequest};

/// Error from a place resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The keyword matched nothing
    #[error("no place matches the keyword")]
    NoMatch,

    /// The lookup itself failed
    #[error("place lookup failed: {0}")]
    Upstream(String),
}

/// Trait for turning a free-text place name into place data.
///
/// This abstraction allows segments to be built against a live geocoding
/// API, a cache, or fixed test data.
pub trait PlaceResolver {
    fn resolve(&self, keyword: &str) -> Result<PlaceInfo, ResolveError>;
}

impl<T: PlaceResolver + ?Sized> PlaceResolver for &T {
    fn resolve(&self, keyword: &str) -> Result<PlaceInfo, ResolveError> {
        (**self).resolve(keyword)
    }
}

impl<T: PlaceResolver + ?Sized> PlaceResolver for Arc<T> {
    fn resolve(&self, keyword: &str) -> Result<PlaceInfo, ResolveError> {
        (**self).resolve(keyword)
    }
}

/// Builds segments, resolving each place keyword exactly once.
///
/// Times are parsed before any resolver call, so a malformed request
/// never reaches the resolver. Any failure discards the partial segment.
pub struct SegmentBuilder<'a, R: ?Sized> {
    resolver: &'a R,
}

impl<'a, R: PlaceResolver + ?Sized> SegmentBuilder<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self { resolver }
    }

    pub fn stay(&self, request: &StayInfoRequest) -> Result<StayInfo, ItineraryError> {
        let stay_schedule = request.schedule()?;
        let stay_place_info = self.resolve(&request.stay_place_name)?;

        Ok(StayInfo {
            stay_schedule,
            stay_place_info,
        })
    }

    pub fn move_info(&self, request: &MoveInfoRequest) -> Result<MoveInfo, ItineraryError> {
        let move_schedule = request.schedule()?;
        let transportation_type = TransportationType::from_value(&request.transportation_type)?;
        let source_place_info = self.resolve(&request.source_place_name)?;
        let dest_place_info = self.resolve(&request.dest_place_name)?;

        Ok(MoveInfo {
            move_schedule,
            source_place_info,
            dest_place_info,
            transportation_type,
        })
    }

    pub fn accommodation(
        &self,
        request: &AccommodationInfoRequest,
    ) -> Result<AccommodationInfo, ItineraryError> {
        let accommodation_schedule = request.schedule()?;
        let accommodation_place_info = self.resolve(&request.accommodation_place_name)?;

        Ok(AccommodationInfo {
            accommodation_schedule,
            accommodation_place_info,
        })
    }

    /// Build all three segments of a request.
    pub fn segments(&self, request: &ItineraryRequest) -> Result<ItinerarySegments, ItineraryError> {
        Ok(ItinerarySegments {
            stay_info: self.stay(&request.stay_info)?,
            move_info: self.move_info(&request.move_info)?,
            accommodation_info: self.accommodation(&request.accommodation_info)?,
        })
    }

    fn resolve(&self, keyword: &str) -> Result<PlaceInfo, ItineraryError> {
        match self.resolver.resolve(keyword) {
            Ok(place) => {
                debug!(keyword, place = %place.place_name, "resolved place");
                Ok(place)
            }
            Err(source) => {
                warn!(keyword, error = %source, "place resolution failed");
                Err(ItineraryError::PlaceResolution {
                    keyword: keyword.to_string(),
                    source,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::place;
    use crate::domain::{SegmentKind, parse_date_time};
    use crate::itinerary::request::fixtures::request;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Resolver over a fixed keyword table that records every call.
    struct TableResolver {
        places: HashMap<String, PlaceInfo>,
        calls: Mutex<Vec<String>>,
    }

    impl TableResolver {
        fn new(keywords: &[&str]) -> Self {
            Self {
                places: keywords
                    .iter()
                    .map(|k| ((*k).to_string(), place(k)))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PlaceResolver for TableResolver {
        fn resolve(&self, keyword: &str) -> Result<PlaceInfo, ResolveError> {
            self.calls.lock().unwrap().push(keyword.to_string());
            self.places.get(keyword).cloned().ok_or(ResolveError::NoMatch)
        }
    }

    #[test]
    fn builds_all_segments() {
        let resolver = TableResolver::new(&["Gyeongbokgung", "Lotte Hotel"]);
        let segments = SegmentBuilder::new(&resolver).segments(&request()).unwrap();

        assert_eq!(
            segments.stay_info.stay_schedule.start_date_time(),
            parse_date_time("2023-10-20 09:00").unwrap()
        );
        assert_eq!(
            segments.stay_info.stay_place_info.place_name,
            "Gyeongbokgung"
        );
        assert_eq!(
            segments.move_info.transportation_type,
            TransportationType::Subway
        );
        assert_eq!(
            segments.move_info.dest_place_info.place_name,
            "Lotte Hotel"
        );
        assert_eq!(
            segments.accommodation_info.accommodation_place_info.place_name,
            "Lotte Hotel"
        );
    }

    #[test]
    fn resolves_each_keyword_once_in_order() {
        let resolver = TableResolver::new(&["Gyeongbokgung", "Lotte Hotel"]);
        SegmentBuilder::new(&resolver).segments(&request()).unwrap();

        assert_eq!(
            resolver.calls(),
            vec!["Gyeongbokgung", "Gyeongbokgung", "Lotte Hotel", "Lotte Hotel"]
        );
    }

    #[test]
    fn unknown_place_fails_whole_build() {
        let resolver = TableResolver::new(&["Gyeongbokgung"]);
        let err = SegmentBuilder::new(&resolver)
            .segments(&request())
            .unwrap_err();

        match err {
            ItineraryError::PlaceResolution { keyword, source } => {
                assert_eq!(keyword, "Lotte Hotel");
                assert_eq!(source, ResolveError::NoMatch);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_transportation_type() {
        let resolver = TableResolver::new(&["Gyeongbokgung", "Lotte Hotel"]);
        let mut req = request();
        req.move_info.transportation_type = "JETPACK".to_string();

        let err = SegmentBuilder::new(&resolver)
            .move_info(&req.move_info)
            .unwrap_err();
        assert!(matches!(err, ItineraryError::UnknownTransportationType(_)));
        assert!(resolver.calls().is_empty());
    }

    #[test]
    fn bad_time_skips_resolver() {
        let resolver = TableResolver::new(&["Gyeongbokgung", "Lotte Hotel"]);
        let mut req = request();
        req.stay_info.start_date_time = "2023-10-20 9:00".to_string();

        let err = SegmentBuilder::new(&resolver).stay(&req.stay_info).unwrap_err();
        assert!(matches!(err, ItineraryError::DateParse(_)));
        assert!(resolver.calls().is_empty());
    }

    #[test]
    fn builder_does_not_check_ordering() {
        let resolver = TableResolver::new(&["Gyeongbokgung", "Lotte Hotel"]);
        let mut req = request();
        req.move_info.start_date_time = "2023-10-20 10:00".to_string();
        req.move_info.end_date_time = "2023-10-20 09:00".to_string();

        let segments = SegmentBuilder::new(&resolver).segments(&req).unwrap();
        let (kind, schedule) = segments.schedules()[1];
        assert_eq!(kind, SegmentKind::Move);
        assert!(!schedule.is_ordered());
    }

    #[test]
    fn upstream_failure_propagates() {
        struct Down;
        impl PlaceResolver for Down {
            fn resolve(&self, _keyword: &str) -> Result<PlaceInfo, ResolveError> {
                Err(ResolveError::Upstream("timeout".to_string()))
            }
        }

        let err = SegmentBuilder::new(&Down)
            .stay(&request().stay_info)
            .unwrap_err();
        assert_eq!(err.to_string(), "could not resolve place \"Gyeongbokgung\"");
    }
}
