use log::info;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::menu::{group_by_category, MenuItem, MenuItemForm, MenuSection};
use crate::domain::ports::MenuRepository;

pub struct MenuService<R> {
    repo: R,
}

impl<R: MenuRepository> MenuService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_menu(&self) -> Result<Vec<MenuItem>, DomainError> {
        self.repo.list()
    }

    pub fn menu_sections(&self) -> Result<Vec<MenuSection>, DomainError> {
        Ok(group_by_category(self.repo.list()?))
    }

    pub fn get_item(&self, id: Uuid) -> Result<MenuItem, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound("menu item"))
    }

    /// New items must come with an uploaded image.
    pub fn create_item(
        &self,
        form: &MenuItemForm,
        image_url: Option<String>,
    ) -> Result<MenuItem, DomainError> {
        let image_url = image_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| DomainError::InvalidInput("an image is required".into()))?;
        let item = self.repo.create(form.validate(image_url)?)?;
        info!("Created menu item {} ({})", item.id, item.name);
        Ok(item)
    }

    /// Without a new image the item keeps its current one.
    pub fn update_item(
        &self,
        id: Uuid,
        form: &MenuItemForm,
        image_url: Option<String>,
    ) -> Result<MenuItem, DomainError> {
        let image_url = match image_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => url,
            None => self.get_item(id)?.image_url,
        };
        let item = self
            .repo
            .update(id, form.validate(image_url)?)?
            .ok_or(DomainError::NotFound("menu item"))?;
        info!("Updated menu item {} ({})", item.id, item.name);
        Ok(item)
    }

    pub fn delete_item(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id)? {
            return Err(DomainError::NotFound("menu item"));
        }
        info!("Deleted menu item {id}");
        Ok(())
    }
}
