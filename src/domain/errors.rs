use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0} is out of stock")]
    OutOfStock(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Reasons a free-text price is refused at the input boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("price '{0}' is not a number")]
    NotANumber(String),
    #[error("price must not be negative")]
    Negative,
    #[error("price must be a whole rupiah amount")]
    Fractional,
    #[error("price is too large")]
    TooLarge,
}

impl From<PriceError> for DomainError {
    fn from(e: PriceError) -> Self {
        DomainError::InvalidInput(e.to_string())
    }
}

/// Why an order could not be composed. Checked in declaration order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    #[error("customer name and address are required")]
    IncompleteCustomerInfo,
    #[error("cart is empty")]
    EmptyCart,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("geolocation is not available on this device")]
    Unavailable,
    #[error("location request failed: {0}")]
    Failed(LocationFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFailure {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    InvalidFix,
}

impl fmt::Display for LocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            LocationFailure::PermissionDenied => "permission denied",
            LocationFailure::PositionUnavailable => "position unavailable",
            LocationFailure::Timeout => "timed out",
            LocationFailure::InvalidFix => "coordinates out of range",
        };
        f.write_str(reason)
    }
}
