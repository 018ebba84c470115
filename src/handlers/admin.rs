use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::auth::Admin;
use crate::domain::menu::MenuItemForm;
use crate::domain::upload::UploadKind;
use crate::errors::AppError;
use crate::state::AppState;

use super::menu::{HeaderImageResponse, MenuItemResponse};

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Menu form fields as typed by the admin. The price is free text and is
/// validated into a whole, non-negative rupiah amount.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuItemRequest {
    pub name: String,
    pub price: String,
    /// Makanan, Minuman or Lainnya. Defaults to Makanan.
    pub category: Option<String>,
    /// Tersedia or Habis. Defaults to Tersedia.
    pub stock_status: Option<String>,
    /// URL returned by the upload endpoint. Required when creating.
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceHeaderImageRequest {
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UploadTarget {
    Menu,
    Header,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadParams {
    #[param(inline)]
    pub kind: UploadTarget,
    /// Slot position, required for header images.
    pub position: Option<i32>,
    /// Original file name; only its extension is kept.
    pub file_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HeaderSlotsResponse {
    pub slots: Vec<HeaderImageResponse>,
}

impl MenuItemRequest {
    fn into_parts(self) -> (MenuItemForm, Option<String>) {
        let form = MenuItemForm {
            name: self.name,
            price: self.price,
            category: self.category,
            stock_status: self.stock_status,
        };
        (form, self.image_url)
    }
}

impl UploadParams {
    fn kind(&self) -> Result<UploadKind, AppError> {
        match (self.kind, self.position) {
            (UploadTarget::Menu, _) => Ok(UploadKind::MenuItem),
            (UploadTarget::Header, Some(position)) => Ok(UploadKind::HeaderImage { position }),
            (UploadTarget::Header, None) => Err(AppError::BadRequest(
                "position is required for header images".into(),
            )),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /admin/menu-items
///
/// Flat list ordered by category then name.
#[utoipa::path(
    get,
    path = "/admin/menu-items",
    responses(
        (status = 200, description = "All menu items", body = [MenuItemResponse]),
        (status = 401, description = "Missing or wrong admin token"),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn list_menu_items(
    _admin: Admin,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let menu = state.menu.clone();
    let items = web::block(move || menu.list_menu()).await??;

    let body: Vec<MenuItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /admin/menu-items
#[utoipa::path(
    post,
    path = "/admin/menu-items",
    request_body = MenuItemRequest,
    responses(
        (status = 201, description = "Menu item created", body = MenuItemResponse),
        (status = 400, description = "Invalid form input"),
        (status = 401, description = "Missing or wrong admin token"),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn create_menu_item(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<MenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let (form, image_url) = body.into_inner().into_parts();

    let menu = state.menu.clone();
    let item = web::block(move || menu.create_item(&form, image_url)).await??;

    Ok(HttpResponse::Created().json(MenuItemResponse::from(item)))
}

/// PUT /admin/menu-items/{id}
///
/// Without `image_url` the current image is kept.
#[utoipa::path(
    put,
    path = "/admin/menu-items/{id}",
    params(("id" = Uuid, Path, description = "Menu item UUID")),
    request_body = MenuItemRequest,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItemResponse),
        (status = 400, description = "Invalid form input"),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 404, description = "Menu item not found"),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn update_menu_item(
    _admin: Admin,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<MenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let (form, image_url) = body.into_inner().into_parts();

    let menu = state.menu.clone();
    let item = web::block(move || menu.update_item(id, &form, image_url)).await??;

    Ok(HttpResponse::Ok().json(MenuItemResponse::from(item)))
}

/// DELETE /admin/menu-items/{id}
#[utoipa::path(
    delete,
    path = "/admin/menu-items/{id}",
    params(("id" = Uuid, Path, description = "Menu item UUID")),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 404, description = "Menu item not found"),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn delete_menu_item(
    _admin: Admin,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let menu = state.menu.clone();
    web::block(move || menu.delete_item(id)).await??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /admin/header-images
///
/// All carousel slots, including empty ones.
#[utoipa::path(
    get,
    path = "/admin/header-images",
    responses(
        (status = 200, description = "Carousel slots", body = HeaderSlotsResponse),
        (status = 401, description = "Missing or wrong admin token"),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn list_header_slots(
    _admin: Admin,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let header_images = state.header_images.clone();
    let slots = web::block(move || header_images.list_slots()).await??;

    Ok(HttpResponse::Ok().json(HeaderSlotsResponse {
        slots: slots.into_iter().map(Into::into).collect(),
    }))
}

/// PUT /admin/header-images/{id}
#[utoipa::path(
    put,
    path = "/admin/header-images/{id}",
    params(("id" = Uuid, Path, description = "Header image UUID")),
    request_body = ReplaceHeaderImageRequest,
    responses(
        (status = 200, description = "Slot image replaced", body = HeaderImageResponse),
        (status = 400, description = "Empty image URL"),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 404, description = "Header image not found"),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn replace_header_image(
    _admin: Admin,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<ReplaceHeaderImageRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let image_url = body.into_inner().image_url;

    let header_images = state.header_images.clone();
    let image = web::block(move || header_images.replace_image(id, &image_url)).await??;

    Ok(HttpResponse::Ok().json(HeaderImageResponse::from(image)))
}

/// POST /admin/uploads
///
/// Raw image bytes in the body. Returns the public URL to put on a menu item
/// or header slot.
#[utoipa::path(
    post,
    path = "/admin/uploads",
    params(UploadParams),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Image stored", body = UploadResponse),
        (status = 400, description = "Empty file or missing position"),
        (status = 401, description = "Missing or wrong admin token"),
    ),
    security(("bearer" = [])),
    tag = "admin"
)]
pub async fn upload_image(
    _admin: Admin,
    state: web::Data<AppState>,
    query: web::Query<UploadParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let kind = params.kind()?;

    let uploads = state.uploads.clone();
    let url = web::block(move || uploads.upload(kind, &params.file_name, &body)).await??;

    Ok(HttpResponse::Created().json(UploadResponse { url }))
}
