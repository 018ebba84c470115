use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::error;
use thiserror::Error;

use crate::domain::errors::{DomainError, GeolocationError, OrderError};

/// HTTP-facing error. The JSON body is the notification the storefront shows:
/// `{ "error": <title>, "description": <detail> }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// A recoverable problem the customer fixes and retries.
    #[error("{title}")]
    Notice {
        title: &'static str,
        description: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn notice(title: &'static str, description: impl Into<String>) -> Self {
        AppError::Notice {
            title,
            description: description.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) => AppError::NotFound(e.to_string()),
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::OutOfStock(name) => {
                AppError::notice("Menu habis", format!("{name} sedang tidak tersedia"))
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::IncompleteCustomerInfo => AppError::notice(
                "Data tidak lengkap",
                "Mohon isi nama dan alamat terlebih dahulu",
            ),
            OrderError::EmptyCart => {
                AppError::notice("Keranjang kosong", "Tambahkan menu terlebih dahulu")
            }
        }
    }
}

impl From<GeolocationError> for AppError {
    fn from(e: GeolocationError) -> Self {
        match e {
            GeolocationError::Unavailable => AppError::notice(
                "Geolocation tidak didukung",
                "Browser Anda tidak mendukung fitur geolocation",
            ),
            GeolocationError::Failed(_) => AppError::notice(
                "Gagal mendapatkan lokasi",
                "Pastikan Anda memberikan izin akses lokasi",
            ),
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Notice { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Notice { title, description } => serde_json::json!({
                "error": title,
                "description": description,
            }),
            AppError::Internal(msg) => {
                error!("Request failed: {msg}");
                serde_json::json!({ "error": "Internal server error" })
            }
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
