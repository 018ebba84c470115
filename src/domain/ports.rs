use std::sync::Arc;

use uuid::Uuid;

use super::errors::{DomainError, GeolocationError};
use super::geolocation::Coordinates;
use super::header_image::HeaderImage;
use super::menu::{MenuItem, MenuItemDraft};

pub trait MenuRepository: Send + Sync + 'static {
    /// All items, ordered by category then name.
    fn list(&self) -> Result<Vec<MenuItem>, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, DomainError>;
    fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, DomainError>;
    fn update(&self, id: Uuid, draft: MenuItemDraft) -> Result<Option<MenuItem>, DomainError>;
    /// Returns whether a row was removed.
    fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

pub trait HeaderImageRepository: Send + Sync + 'static {
    /// All slots, ordered by position.
    fn list(&self) -> Result<Vec<HeaderImage>, DomainError>;
    fn update_image_url(
        &self,
        id: Uuid,
        image_url: &str,
    ) -> Result<Option<HeaderImage>, DomainError>;
}

pub trait ImageStorage: Send + Sync + 'static {
    /// Stores `bytes` under `object_name` and returns its public URL.
    /// Existing objects with the same name are overwritten.
    fn store(&self, object_name: &str, bytes: &[u8]) -> Result<String, DomainError>;
}

/// One-shot position fix from whatever device the customer is using.
pub trait Geolocator {
    fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

impl<T: MenuRepository + ?Sized> MenuRepository for Arc<T> {
    fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        (**self).list()
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, DomainError> {
        (**self).find_by_id(id)
    }

    fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        (**self).create(draft)
    }

    fn update(&self, id: Uuid, draft: MenuItemDraft) -> Result<Option<MenuItem>, DomainError> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        (**self).delete(id)
    }
}

impl<T: HeaderImageRepository + ?Sized> HeaderImageRepository for Arc<T> {
    fn list(&self) -> Result<Vec<HeaderImage>, DomainError> {
        (**self).list()
    }

    fn update_image_url(
        &self,
        id: Uuid,
        image_url: &str,
    ) -> Result<Option<HeaderImage>, DomainError> {
        (**self).update_image_url(id, image_url)
    }
}

impl<T: ImageStorage + ?Sized> ImageStorage for Arc<T> {
    fn store(&self, object_name: &str, bytes: &[u8]) -> Result<String, DomainError> {
        (**self).store(object_name, bytes)
    }
}
