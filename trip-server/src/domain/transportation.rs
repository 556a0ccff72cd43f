//! Transportation types for move segments.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Error returned when a transportation type string is not in the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transportation type: {value:?}")]
pub struct UnknownTransportationType {
    value: String,
}

impl UnknownTransportationType {
    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// How a move segment travels between its source and destination.
///
/// This is a closed set; lookups use the exact upper-case value.
///
/// # Examples
///
/// ```
/// use trip_server::domain::TransportationType;
///
/// let t: TransportationType = "TRAIN".parse().unwrap();
/// assert_eq!(t, TransportationType::Train);
/// assert_eq!(t.as_str(), "TRAIN");
///
/// assert!("train".parse::<TransportationType>().is_err());
/// assert!("JETPACK".parse::<TransportationType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportationType {
    Walk,
    Bicycle,
    Car,
    Taxi,
    Bus,
    Subway,
    Train,
    Airplane,
    Ship,
}

impl TransportationType {
    /// Every transportation type, in declaration order.
    pub const ALL: [TransportationType; 9] = [
        TransportationType::Walk,
        TransportationType::Bicycle,
        TransportationType::Car,
        TransportationType::Taxi,
        TransportationType::Bus,
        TransportationType::Subway,
        TransportationType::Train,
        TransportationType::Airplane,
        TransportationType::Ship,
    ];

    /// The string value this type is looked up by.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportationType::Walk => "WALK",
            TransportationType::Bicycle => "BICYCLE",
            TransportationType::Car => "CAR",
            TransportationType::Taxi => "TAXI",
            TransportationType::Bus => "BUS",
            TransportationType::Subway => "SUBWAY",
            TransportationType::Train => "TRAIN",
            TransportationType::Airplane => "AIRPLANE",
            TransportationType::Ship => "SHIP",
        }
    }

    /// Look up a type by its string value.
    pub fn from_value(value: &str) -> Result<Self, UnknownTransportationType> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| UnknownTransportationType {
                value: value.to_string(),
            })
    }
}

impl FromStr for TransportationType {
    type Err = UnknownTransportationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl fmt::Display for TransportationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
