//! In-memory stand-ins for the storefront's ports.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use storefront::domain::errors::DomainError;
use storefront::domain::header_image::HeaderImage;
use storefront::domain::menu::{sort_for_display, MenuItem, MenuItemDraft};
use storefront::domain::order::OrderComposer;
use storefront::domain::ports::{HeaderImageRepository, ImageStorage, MenuRepository};
use storefront::AppState;
use uuid::Uuid;

pub const ADMIN_TOKEN: &str = "test-admin-token";

#[derive(Default)]
pub struct MemoryMenu {
    items: Mutex<Vec<MenuItem>>,
}

impl MenuRepository for MemoryMenu {
    fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        let mut items = self.items.lock().unwrap().clone();
        sort_for_display(&mut items);
        Ok(items)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, DomainError> {
        Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        let item = MenuItem {
            id: Uuid::new_v4(),
            name: draft.name,
            price: draft.price,
            image_url: draft.image_url,
            category: draft.category,
            stock_status: draft.stock_status,
        };
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    fn update(&self, id: Uuid, draft: MenuItemDraft) -> Result<Option<MenuItem>, DomainError> {
        let mut items = self.items.lock().unwrap();
        Ok(items.iter_mut().find(|i| i.id == id).map(|item| {
            item.name = draft.name;
            item.price = draft.price;
            item.image_url = draft.image_url;
            item.category = draft.category;
            item.stock_status = draft.stock_status;
            item.clone()
        }))
    }

    fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() < before)
    }
}

pub struct MemoryHeaderImages {
    slots: Mutex<Vec<HeaderImage>>,
}

impl Default for MemoryHeaderImages {
    fn default() -> Self {
        let slots = (1..=3)
            .map(|position| HeaderImage {
                id: Uuid::new_v4(),
                image_url: String::new(),
                position,
            })
            .collect();
        Self {
            slots: Mutex::new(slots),
        }
    }
}

impl HeaderImageRepository for MemoryHeaderImages {
    fn list(&self) -> Result<Vec<HeaderImage>, DomainError> {
        Ok(self.slots.lock().unwrap().clone())
    }

    fn update_image_url(
        &self,
        id: Uuid,
        image_url: &str,
    ) -> Result<Option<HeaderImage>, DomainError> {
        let mut slots = self.slots.lock().unwrap();
        Ok(slots.iter_mut().find(|s| s.id == id).map(|slot| {
            slot.image_url = image_url.to_string();
            slot.clone()
        }))
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    pub objects: Mutex<Vec<(String, Vec<u8>)>>,
}

impl ImageStorage for MemoryStorage {
    fn store(&self, object_name: &str, bytes: &[u8]) -> Result<String, DomainError> {
        self.objects
            .lock()
            .unwrap()
            .push((object_name.to_string(), bytes.to_vec()));
        Ok(format!("https://cdn.example/images/{object_name}"))
    }
}

pub struct Harness {
    pub state: AppState,
    pub menu: Arc<MemoryMenu>,
    pub storage: Arc<MemoryStorage>,
}

pub fn harness() -> Harness {
    let menu = Arc::new(MemoryMenu::default());
    let storage = Arc::new(MemoryStorage::default());
    let state = AppState::new(
        menu.clone(),
        Arc::new(MemoryHeaderImages::default()),
        storage.clone(),
        OrderComposer::default(),
        ADMIN_TOKEN,
    );
    Harness {
        state,
        menu,
        storage,
    }
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {ADMIN_TOKEN}"))
}
