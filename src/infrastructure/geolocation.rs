use crate::domain::errors::{GeolocationError, LocationFailure};
use crate::domain::geolocation::Coordinates;
use crate::domain::ports::Geolocator;

/// What the customer's browser reported after asking for a position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportedPosition {
    Fix { latitude: f64, longitude: f64 },
    Unsupported,
    Failed(LocationFailure),
}

impl Geolocator for ReportedPosition {
    fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        match *self {
            ReportedPosition::Fix {
                latitude,
                longitude,
            } => Coordinates::checked(latitude, longitude),
            ReportedPosition::Unsupported => Err(GeolocationError::Unavailable),
            ReportedPosition::Failed(reason) => Err(GeolocationError::Failed(reason)),
        }
    }
}
