use super::customer::CustomerInfo;
use super::errors::{GeolocationError, LocationFailure};
use super::ports::Geolocator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Rejects fixes that cannot be a point on Earth.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, GeolocationError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeolocationError::Failed(LocationFailure::InvalidFix));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn as_address(&self) -> String {
        format!("Lokasi: {:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Replaces the address with the device's coordinates.
///
/// On failure the customer is left exactly as it was.
pub fn fill_address(
    customer: &mut CustomerInfo,
    locator: &dyn Geolocator,
) -> Result<Coordinates, GeolocationError> {
    let fix = locator.current_position()?;
    customer.address = fix.as_address();
    Ok(fix)
}
