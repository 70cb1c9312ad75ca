//! Travel strategies and their factory.

use super::PatternError;
use std::str::FromStr;
use tracing::instrument;

/// How a distance is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TravelMode {
    /// By road.
    #[strum(serialize = "car", to_string = "Car")]
    Car,
    /// By sea.
    #[strum(serialize = "ship", to_string = "Ship")]
    Ship,
    /// By coach.
    #[strum(serialize = "bus", to_string = "Bus")]
    Bus,
}

impl TravelMode {
    /// Describes travelling `distance` miles with this mode.
    ///
    /// The distance is printed with every significant digit and always
    /// shows a fractional part (`150.0`, `12.34`).
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidDistance`] for negative or non-finite distances.
    #[instrument]
    pub fn travel(self, distance: f64) -> Result<String, PatternError> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(PatternError::InvalidDistance(distance));
        }
        Ok(format!("Traveling {:?} miles by {}.", distance, self))
    }
}

/// Builds the travel mode registered under `name` (`car`, `ship`, `bus`).
///
/// # Errors
///
/// Returns [`PatternError::UnknownMode`] for any other name.
#[instrument]
pub fn travel_mode(name: &str) -> Result<TravelMode, PatternError> {
    TravelMode::from_str(name.trim()).map_err(|_| PatternError::UnknownMode(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory() {
        assert_eq!(travel_mode("car"), Ok(TravelMode::Car));
        assert_eq!(travel_mode("Ship"), Ok(TravelMode::Ship));
        assert_eq!(travel_mode("BUS"), Ok(TravelMode::Bus));
        assert_eq!(
            travel_mode("plane"),
            Err(PatternError::UnknownMode("plane".to_string()))
        );
    }

    #[test]
    fn test_travel_message() {
        assert_eq!(
            TravelMode::Car.travel(150.0).unwrap(),
            "Traveling 150.0 miles by Car."
        );
        assert_eq!(
            TravelMode::Ship.travel(12.34).unwrap(),
            "Traveling 12.34 miles by Ship."
        );
        assert_eq!(
            TravelMode::Bus.travel(0.125).unwrap(),
            "Traveling 0.125 miles by Bus."
        );
    }

    #[test]
    fn test_travel_rejects_negative_distance() {
        assert_eq!(
            TravelMode::Bus.travel(-3.0),
            Err(PatternError::InvalidDistance(-3.0))
        );
    }
}
