//! In-process store.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Itinerary, ItineraryId, ItinerarySegments, Trip, TripDetails, TripId};

use super::error::StoreError;
use super::{ItineraryStore, TripFilter, TripStore};

#[derive(Debug, Default)]
struct Tables {
    trips: BTreeMap<TripId, Trip>,
    itineraries: BTreeMap<ItineraryId, Itinerary>,
    last_trip_id: u64,
    last_itinerary_id: u64,
}

/// Thread-safe in-memory trip and itinerary storage.
///
/// Ids are issued from per-table sequences starting at 1. Every write
/// happens under one lock: creating an itinerary attaches it to its trip
/// and saving one refreshes the trip's copy, so a later `get_trip` always
/// sees the full list.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    /// Number of stored trips.
    pub fn trip_count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.trips.len())
    }

    /// Number of stored itineraries.
    pub fn itinerary_count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.itineraries.len())
    }
}

impl TripStore for MemoryStore {
    fn get_trip(&self, id: TripId) -> Result<Option<Trip>, StoreError> {
        Ok(self.read()?.trips.get(&id).cloned())
    }

    fn find_all_trips(&self) -> Result<Vec<Trip>, StoreError> {
        Ok(self.read()?.trips.values().cloned().collect())
    }

    fn search_trips(&self, filter: &TripFilter) -> Result<Vec<Trip>, StoreError> {
        Ok(self
            .read()?
            .trips
            .values()
            .filter(|trip| filter.matches(trip))
            .cloned()
            .collect())
    }

    fn create_trip(&self, details: TripDetails) -> Result<Trip, StoreError> {
        let mut tables = self.write()?;
        tables.last_trip_id += 1;
        let trip = Trip::new(TripId(tables.last_trip_id), details);
        tables.trips.insert(trip.id, trip.clone());
        Ok(trip)
    }

    fn update_trip(&self, id: TripId, details: TripDetails) -> Result<Option<Trip>, StoreError> {
        let mut tables = self.write()?;
        Ok(tables.trips.get_mut(&id).map(|trip| {
            trip.update(details);
            trip.clone()
        }))
    }
}

impl ItineraryStore for MemoryStore {
    fn create_itinerary(
        &self,
        trip_id: TripId,
        segments: ItinerarySegments,
    ) -> Result<Itinerary, StoreError> {
        let mut tables = self.write()?;
        let id = ItineraryId(tables.last_itinerary_id + 1);
        let itinerary = Itinerary::new(id, trip_id, segments);

        let trip = tables.trips.get_mut(&trip_id).ok_or(StoreError::Missing {
            entity: "trip",
            id: trip_id.0,
        })?;
        trip.itineraries.push(itinerary.clone());

        tables.last_itinerary_id = id.0;
        tables.itineraries.insert(id, itinerary.clone());
        Ok(itinerary)
    }

    fn save_itinerary(&self, itinerary: &Itinerary) -> Result<Itinerary, StoreError> {
        let mut tables = self.write()?;
        let slot = tables
            .itineraries
            .get_mut(&itinerary.id)
            .ok_or(StoreError::Missing {
                entity: "itinerary",
                id: itinerary.id.0,
            })?;
        *slot = itinerary.clone();

        if let Some(owned) = tables
            .trips
            .get_mut(&itinerary.trip_id)
            .and_then(|trip| trip.itinerary_mut(itinerary.id))
        {
            *owned = itinerary.clone();
        }

        Ok(itinerary.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::segments;
    use crate::domain::{TripSchedule, TripType};
    use chrono::NaiveDate;

    fn details(name: &str) -> TripDetails {
        let d = |day| NaiveDate::from_ymd_opt(2023, 10, day).unwrap();
        TripDetails {
            name: name.to_string(),
            trip_type: TripType::Domestic,
            schedule: TripSchedule::new(d(20), d(22)).unwrap(),
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.create_trip(details("a")).unwrap();
        let b = store.create_trip(details("b")).unwrap();
        assert_eq!(a.id, TripId(1));
        assert_eq!(b.id, TripId(2));
        assert_eq!(store.trip_count().unwrap(), 2);
    }

    #[test]
    fn get_returns_stored_copy() {
        let store = MemoryStore::new();
        let trip = store.create_trip(details("Gangneung")).unwrap();
        assert_eq!(store.get_trip(trip.id).unwrap(), Some(trip));
        assert_eq!(store.get_trip(TripId(99)).unwrap(), None);
    }

    #[test]
    fn find_all_in_id_order() {
        let store = MemoryStore::new();
        for name in ["x", "y", "z"] {
            store.create_trip(details(name)).unwrap();
        }
        let names: Vec<_> = store
            .find_all_trips()
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn search_applies_filter() {
        let store = MemoryStore::new();
        store.create_trip(details("Jeju spring")).unwrap();
        store.create_trip(details("Busan")).unwrap();
        store.create_trip(details("Jeju autumn")).unwrap();

        let filter = TripFilter {
            name: Some("Jeju".to_string()),
            ..TripFilter::default()
        };
        let found = store.search_trips(&filter).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, TripId(1));
        assert_eq!(found[1].id, TripId(3));
    }

    #[test]
    fn update_unknown_trip_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.update_trip(TripId(5), details("ghost")).unwrap(), None);
        assert_eq!(store.trip_count().unwrap(), 0);
    }

    #[test]
    fn update_trip_keeps_itineraries() {
        let store = MemoryStore::new();
        let trip = store.create_trip(details("Seoul")).unwrap();
        store.create_itinerary(trip.id, segments("Museum")).unwrap();

        let updated = store
            .update_trip(trip.id, details("Seoul again"))
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Seoul again");
        assert_eq!(updated.itineraries.len(), 1);
        assert_eq!(store.get_trip(trip.id).unwrap(), Some(updated));
    }

    #[test]
    fn create_itinerary_attaches_to_trip() {
        let store = MemoryStore::new();
        let trip = store.create_trip(details("Seoul")).unwrap();
        let a = store.create_itinerary(trip.id, segments("Museum")).unwrap();
        let b = store.create_itinerary(trip.id, segments("Palace")).unwrap();

        let loaded = store.get_trip(trip.id).unwrap().unwrap();
        let ids: Vec<_> = loaded.itineraries.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[test]
    fn itinerary_requires_existing_trip() {
        let store = MemoryStore::new();
        let result = store.create_itinerary(TripId(1), segments("Museum"));
        assert!(matches!(result, Err(StoreError::Missing { .. })));
        assert_eq!(store.itinerary_count().unwrap(), 0);
    }

    #[test]
    fn saving_itinerary_refreshes_trip_copy() {
        let store = MemoryStore::new();
        let trip = store.create_trip(details("Seoul")).unwrap();
        let itinerary = store
            .create_itinerary(trip.id, segments("Museum"))
            .unwrap();
        assert_eq!(itinerary.id, ItineraryId(1));

        let mut edited = itinerary;
        edited.update(segments("Palace"));
        store.save_itinerary(&edited).unwrap();

        let loaded = store.get_trip(trip.id).unwrap().unwrap();
        assert_eq!(
            loaded.itineraries[0].stay_info.stay_place_info.place_name,
            "Palace"
        );
    }
}
