//! Trip requests.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{InvalidDateRange, TripDetails, TripSchedule, TripType};
use crate::store::TripFilter;

/// Request to create a trip or overwrite one's details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TripRequest {
    pub name: String,
    pub trip_type: TripType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TripRequest {
    /// Validated trip details. Fails if the start date is after the end date.
    pub fn to_details(&self) -> Result<TripDetails, InvalidDateRange> {
        Ok(TripDetails {
            name: self.name.clone(),
            trip_type: self.trip_type,
            schedule: TripSchedule::new(self.start_date, self.end_date)?,
        })
    }
}

/// Request to search trips. Every field is optional, but not all at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TripSearchRequest {
    pub name: Option<String>,
    pub trip_type: Option<TripType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TripSearchRequest {
    /// True if no criterion is set.
    pub fn is_all_none(&self) -> bool {
        self.name.is_none()
            && self.trip_type.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// The store filter for this request.
    pub fn to_filter(&self) -> TripFilter {
        TripFilter {
            name: self.name.clone(),
            trip_type: self.trip_type,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
