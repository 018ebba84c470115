use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::header_image::{Carousel, CarouselStep, HeaderImage, AUTO_ADVANCE};
use crate::domain::menu::{MenuItem, MenuSection};
use crate::errors::AppError;
use crate::state::AppState;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    /// Whole rupiah.
    pub price: u64,
    /// Display form, e.g. "Rp 15.000".
    pub price_label: String,
    pub image_url: String,
    pub category: String,
    pub stock_status: String,
    pub available: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuSectionResponse {
    pub category: String,
    pub items: Vec<MenuItemResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuResponse {
    pub sections: Vec<MenuSectionResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HeaderImageResponse {
    pub id: Uuid,
    pub image_url: String,
    pub position: i32,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SlideStep {
    Next,
    Prev,
    Tick,
}

impl From<SlideStep> for CarouselStep {
    fn from(step: SlideStep) -> Self {
        match step {
            SlideStep::Next => CarouselStep::Next,
            SlideStep::Prev => CarouselStep::Prev,
            SlideStep::Tick => CarouselStep::Tick,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlideQuery {
    /// Slide currently shown by the client.
    pub index: Option<usize>,
    /// Move to apply from `index`.
    #[param(inline)]
    pub step: Option<SlideStep>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HeaderImagesResponse {
    pub images: Vec<HeaderImageResponse>,
    /// Slide to show, after applying `step`.
    pub index: usize,
    /// Seconds between automatic slide changes.
    pub auto_advance_secs: u64,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            price: item.price.amount(),
            price_label: format!("Rp {}", item.price),
            available: item.is_available(),
            category: item.category.to_string(),
            stock_status: item.stock_status.to_string(),
            name: item.name,
            image_url: item.image_url,
        }
    }
}

impl From<MenuSection> for MenuSectionResponse {
    fn from(section: MenuSection) -> Self {
        Self {
            category: section.category.to_string(),
            items: section.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<HeaderImage> for HeaderImageResponse {
    fn from(image: HeaderImage) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url,
            position: image.position,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /menu
///
/// The whole menu, split into the Makanan, Minuman and Lainnya tabs.
#[utoipa::path(
    get,
    path = "/menu",
    responses(
        (status = 200, description = "Menu grouped by category", body = MenuResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "menu"
)]
pub async fn list_menu(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let menu = state.menu.clone();
    let sections = web::block(move || menu.menu_sections()).await??;

    Ok(HttpResponse::Ok().json(MenuResponse {
        sections: sections.into_iter().map(Into::into).collect(),
    }))
}

/// GET /menu/{id}
#[utoipa::path(
    get,
    path = "/menu/{id}",
    params(
        ("id" = Uuid, Path, description = "Menu item UUID"),
    ),
    responses(
        (status = 200, description = "Menu item found", body = MenuItemResponse),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "menu"
)]
pub async fn get_menu_item(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let menu = state.menu.clone();
    let item = web::block(move || menu.get_item(id)).await??;

    Ok(HttpResponse::Ok().json(MenuItemResponse::from(item)))
}

/// GET /header-images
///
/// Slides for the header carousel, in position order. Empty slots are left out.
/// With `index` and `step` the response also carries the slide to show next.
#[utoipa::path(
    get,
    path = "/header-images",
    params(SlideQuery),
    responses(
        (status = 200, description = "Carousel slides", body = HeaderImagesResponse),
    ),
    tag = "menu"
)]
pub async fn list_header_images(
    state: web::Data<AppState>,
    query: web::Query<SlideQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let header_images = state.header_images.clone();
    let images = web::block(move || header_images.carousel_images()).await??;
    let carousel = Carousel::resume(images.len(), query.index, query.step.map(Into::into));

    Ok(HttpResponse::Ok().json(HeaderImagesResponse {
        images: images.into_iter().map(Into::into).collect(),
        index: carousel.index(),
        auto_advance_secs: AUTO_ADVANCE.as_secs(),
    }))
}
