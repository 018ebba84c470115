use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::application::storefront::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL};
use crate::domain::order::{DEFAULT_STORE_HEADER, DEFAULT_WHATSAPP_NUMBER};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub admin_token: String,
    pub whatsapp_number: String,
    pub store_header: String,
    pub upload_dir: PathBuf,
    pub public_upload_base: String,
    pub session_ttl: Duration,
    pub max_sessions: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let optional = |key: &'static str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let port = optional("PORT", "8080")
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "PORT",
                message: e.to_string(),
            })?;

        let default_ttl = DEFAULT_SESSION_TTL.as_secs().to_string();
        let session_ttl = optional("SESSION_TTL_SECS", &default_ttl)
            .parse()
            .map(Duration::from_secs)
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "SESSION_TTL_SECS",
                message: e.to_string(),
            })?;

        let default_max = DEFAULT_MAX_SESSIONS.to_string();
        let max_sessions = optional("MAX_SESSIONS", &default_max)
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "MAX_SESSIONS",
                message: e.to_string(),
            })?;
        if max_sessions == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_SESSIONS",
                message: "must be at least 1".into(),
            });
        }

        let whatsapp_number = optional("WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER);
        if whatsapp_number.is_empty() || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                key: "WHATSAPP_NUMBER",
                message: "expected digits only, in international format".into(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: optional("HOST", "0.0.0.0"),
            port,
            admin_token: required("ADMIN_TOKEN")?,
            whatsapp_number,
            store_header: optional("STORE_HEADER", DEFAULT_STORE_HEADER),
            upload_dir: PathBuf::from(optional("UPLOAD_DIR", "uploads")),
            public_upload_base: optional("PUBLIC_UPLOAD_BASE", "/uploads"),
            session_ttl,
            max_sessions,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let s = settings(&[("DATABASE_URL", "postgres://x"), ("ADMIN_TOKEN", "t")]).unwrap();
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.port, 8080);
        assert_eq!(s.whatsapp_number, "6281312357574");
        assert_eq!(s.store_header, "Pesanan Baru dari Dapur Mama");
        assert_eq!(s.upload_dir, PathBuf::from("uploads"));
        assert_eq!(s.session_ttl, Duration::from_secs(7200));
        assert_eq!(s.max_sessions, 10_000);
    }

    #[test]
    fn reads_session_limits() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://x"),
            ("ADMIN_TOKEN", "t"),
            ("SESSION_TTL_SECS", "900"),
            ("MAX_SESSIONS", "50"),
        ])
        .unwrap();
        assert_eq!(s.session_ttl, Duration::from_secs(900));
        assert_eq!(s.max_sessions, 50);

        assert!(matches!(
            settings(&[
                ("DATABASE_URL", "postgres://x"),
                ("ADMIN_TOKEN", "t"),
                ("MAX_SESSIONS", "0"),
            ]),
            Err(ConfigError::Invalid { key: "MAX_SESSIONS", .. })
        ));
    }

    #[test]
    fn requires_database_url_and_admin_token() {
        assert_eq!(
            settings(&[("ADMIN_TOKEN", "t")]).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        );
        assert_eq!(
            settings(&[("DATABASE_URL", "postgres://x"), ("ADMIN_TOKEN", " ")]).unwrap_err(),
            ConfigError::Missing("ADMIN_TOKEN")
        );
    }

    #[test]
    fn rejects_bad_port_and_number() {
        let base = [("DATABASE_URL", "postgres://x"), ("ADMIN_TOKEN", "t")];

        let mut bad_port = base.to_vec();
        bad_port.push(("PORT", "eighty"));
        assert!(matches!(
            settings(&bad_port),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));

        let mut bad_number = base.to_vec();
        bad_number.push(("WHATSAPP_NUMBER", "+62 813"));
        assert!(matches!(
            settings(&bad_number),
            Err(ConfigError::Invalid {
                key: "WHATSAPP_NUMBER",
                ..
            })
        ));
    }
}
