use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::header_image::HeaderImage;
use crate::domain::menu::{MenuItem, MenuItemDraft};
use crate::domain::money::Rupiah;
use crate::schema::{header_images, menu_items};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub category: String,
    pub stock_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItemRow {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub category: String,
    pub stock_status: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = menu_items)]
pub struct MenuItemChanges {
    pub name: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub category: String,
    pub stock_status: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = header_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HeaderImageRow {
    pub id: Uuid,
    pub image_url: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewMenuItemRow {
    pub fn from_draft(id: Uuid, draft: MenuItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price.to_decimal(),
            image_url: draft.image_url,
            category: draft.category.label().to_string(),
            stock_status: draft.stock_status.label().to_string(),
        }
    }
}

impl From<MenuItemDraft> for MenuItemChanges {
    fn from(draft: MenuItemDraft) -> Self {
        Self {
            name: draft.name,
            price: draft.price.to_decimal(),
            image_url: draft.image_url,
            category: draft.category.label().to_string(),
            stock_status: draft.stock_status.label().to_string(),
            updated_at: Utc::now(),
        }
    }
}

// Rows written by other clients of the backend may not satisfy our types.
impl TryFrom<MenuItemRow> for MenuItem {
    type Error = DomainError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        let price = Rupiah::try_from(&row.price).map_err(|e| {
            DomainError::Internal(format!("menu item {} has a bad price: {e}", row.id))
        })?;
        Ok(MenuItem {
            id: row.id,
            price,
            category: row.category.parse()?,
            stock_status: row.stock_status.parse()?,
            name: row.name,
            image_url: row.image_url,
        })
    }
}

impl From<HeaderImageRow> for HeaderImage {
    fn from(row: HeaderImageRow) -> Self {
        HeaderImage {
            id: row.id,
            image_url: row.image_url,
            position: row.position,
        }
    }
}
