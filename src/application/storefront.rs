use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::domain::cart::Cart;
use crate::domain::customer::CustomerInfo;
use crate::domain::errors::{DomainError, GeolocationError, OrderError};
use crate::domain::geolocation::{fill_address, Coordinates};
use crate::domain::menu::MenuItem;
use crate::domain::order::{ComposedOrder, OrderComposer};
use crate::domain::ports::Geolocator;

/// Idle sessions are dropped after this long unless configured otherwise.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(2 * 60 * 60);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Cart and customer details for one browsing session.
#[derive(Debug)]
pub struct StorefrontSession {
    cart: Cart,
    customer: CustomerInfo,
    last_seen: Instant,
}

impl Default for StorefrontSession {
    fn default() -> Self {
        Self {
            cart: Cart::default(),
            customer: CustomerInfo::default(),
            last_seen: Instant::now(),
        }
    }
}

impl StorefrontSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_seen(&self) -> Instant {
        self.last_seen
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Sold-out items cannot be ordered.
    pub fn add_menu_item(&mut self, item: &MenuItem) -> Result<(), DomainError> {
        if !item.is_available() {
            return Err(DomainError::OutOfStock(item.name.clone()));
        }
        self.cart.add(item);
        debug!("Added {} to cart ({} items)", item.name, self.cart.total_items());
        Ok(())
    }

    pub fn update_quantity(&mut self, id: Uuid, quantity: i64) {
        self.cart.set_quantity(id, quantity);
    }

    /// Only the fields that are given change.
    pub fn update_customer(&mut self, name: Option<String>, address: Option<String>) {
        if let Some(name) = name {
            self.customer.name = name;
        }
        if let Some(address) = address {
            self.customer.address = address;
        }
    }

    pub fn share_location(
        &mut self,
        locator: &dyn Geolocator,
    ) -> Result<Coordinates, GeolocationError> {
        fill_address(&mut self.customer, locator).inspect_err(|e| {
            warn!("Could not fill address from location: {e}");
        })
    }

    /// Builds the WhatsApp handoff. The cart is kept afterwards so a customer
    /// whose message never went out can simply send it again.
    pub fn place_order(&self, composer: &OrderComposer) -> Result<ComposedOrder, OrderError> {
        composer.prepare(&self.cart, &self.customer).inspect_err(|e| {
            debug!("Order not composed: {e}");
        })
    }
}

/// Live sessions keyed by id, owned by the application state.
///
/// A browser that goes away never closes its session, so every access
/// sweeps out sessions idle for longer than `ttl`. When `max_sessions` are
/// live, opening another drops the least recently used one.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, StorefrontSession>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn open(&self) -> Uuid {
        self.open_at(Instant::now())
    }

    pub fn close(&self, id: Uuid) -> Result<(), DomainError> {
        self.lock()
            .remove(&id)
            .map(|_| debug!("Closed session {id}"))
            .ok_or(DomainError::NotFound("session"))
    }

    /// Runs `f` against the session while holding the store lock, and marks
    /// the session as seen.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut StorefrontSession) -> T,
    ) -> Result<T, DomainError> {
        self.with_session_at(id, Instant::now(), f)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn open_at(&self, now: Instant) -> Uuid {
        let mut sessions = self.lock();
        self.evict_idle(&mut sessions, now);
        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_seen)
                .map(|(id, _)| *id)
            else {
                break;
            };
            sessions.remove(&oldest);
            warn!("Session limit of {} reached, dropped {oldest}", self.max_sessions);
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            StorefrontSession {
                last_seen: now,
                ..StorefrontSession::default()
            },
        );
        debug!("Opened session {id}");
        id
    }

    fn with_session_at<T>(
        &self,
        id: Uuid,
        now: Instant,
        f: impl FnOnce(&mut StorefrontSession) -> T,
    ) -> Result<T, DomainError> {
        let mut sessions = self.lock();
        self.evict_idle(&mut sessions, now);
        let session = sessions
            .get_mut(&id)
            .ok_or(DomainError::NotFound("session"))?;
        session.last_seen = now;
        Ok(f(session))
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, StorefrontSession>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.last_seen) <= self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Dropped {evicted} idle session(s)");
        }
    }

    // Session operations never leave a session half-updated, so a poisoned
    // lock still guards consistent data.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, StorefrontSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
