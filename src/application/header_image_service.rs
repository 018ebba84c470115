use log::info;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::header_image::HeaderImage;
use crate::domain::ports::HeaderImageRepository;

pub struct HeaderImageService<R> {
    repo: R,
}

impl<R: HeaderImageRepository> HeaderImageService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Every slot, including ones still waiting for an image.
    pub fn list_slots(&self) -> Result<Vec<HeaderImage>, DomainError> {
        self.repo.list()
    }

    /// Slides the storefront shows, in position order.
    pub fn carousel_images(&self) -> Result<Vec<HeaderImage>, DomainError> {
        Ok(self
            .repo
            .list()?
            .into_iter()
            .filter(HeaderImage::has_image)
            .collect())
    }

    pub fn replace_image(&self, id: Uuid, image_url: &str) -> Result<HeaderImage, DomainError> {
        let image_url = image_url.trim();
        if image_url.is_empty() {
            return Err(DomainError::InvalidInput("an image is required".into()));
        }
        let image = self
            .repo
            .update_image_url(id, image_url)?
            .ok_or(DomainError::NotFound("header image"))?;
        info!("Replaced header image at position {}", image.position);
        Ok(image)
    }
}
