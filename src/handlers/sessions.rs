use actix_web::http::header::LOCATION;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::cart::Cart;
use crate::domain::customer::CustomerInfo;
use crate::domain::errors::LocationFailure;
use crate::errors::AppError;
use crate::infrastructure::geolocation::ReportedPosition;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub menu_item_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Zero or less removes the line. At most 4294967295.
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineResponse {
    pub id: Uuid,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub subtotal: u64,
    pub subtotal_label: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub total_items: u64,
    pub total_price: u64,
    pub total_price_label: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub name: String,
    pub address: String,
}

/// Outcome of the browser's position request.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LocationReport {
    Fix { latitude: f64, longitude: f64 },
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub message: String,
    /// Open in a new window to hand the order to WhatsApp.
    pub whatsapp_url: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|l| CartLineResponse {
                    id: l.id,
                    name: l.name.clone(),
                    unit_price: l.unit_price.amount(),
                    quantity: l.quantity,
                    subtotal: l.subtotal().amount(),
                    subtotal_label: format!("Rp {}", l.subtotal()),
                })
                .collect(),
            total_items: cart.total_items(),
            total_price: cart.total_price().amount(),
            total_price_label: format!("Rp {}", cart.total_price()),
        }
    }
}

impl From<&CustomerInfo> for CustomerResponse {
    fn from(customer: &CustomerInfo) -> Self {
        Self {
            name: customer.name.clone(),
            address: customer.address.clone(),
        }
    }
}

impl From<LocationReport> for ReportedPosition {
    fn from(report: LocationReport) -> Self {
        match report {
            LocationReport::Fix {
                latitude,
                longitude,
            } => ReportedPosition::Fix {
                latitude,
                longitude,
            },
            LocationReport::Unsupported => ReportedPosition::Unsupported,
            LocationReport::PermissionDenied => {
                ReportedPosition::Failed(LocationFailure::PermissionDenied)
            }
            LocationReport::PositionUnavailable => {
                ReportedPosition::Failed(LocationFailure::PositionUnavailable)
            }
            LocationReport::Timeout => ReportedPosition::Failed(LocationFailure::Timeout),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /sessions
///
/// Starts an empty cart for a new visitor.
#[utoipa::path(
    post,
    path = "/sessions",
    responses(
        (status = 201, description = "Session opened", body = SessionResponse),
    ),
    tag = "cart"
)]
pub async fn open_session(state: web::Data<AppState>) -> HttpResponse {
    let id = state.sessions.open();
    HttpResponse::Created().json(SessionResponse { id })
}

/// DELETE /sessions/{id}
#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session UUID")),
    responses(
        (status = 204, description = "Session closed"),
        (status = 404, description = "Session not found"),
    ),
    tag = "cart"
)]
pub async fn close_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.sessions.close(path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /sessions/{id}/cart
#[utoipa::path(
    get,
    path = "/sessions/{id}/cart",
    params(("id" = Uuid, Path, description = "Session UUID")),
    responses(
        (status = 200, description = "Cart lines and totals", body = CartResponse),
        (status = 404, description = "Session not found"),
    ),
    tag = "cart"
)]
pub async fn get_cart(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let cart = state
        .sessions
        .with_session(path.into_inner(), |s| CartResponse::from(s.cart()))?;
    Ok(HttpResponse::Ok().json(cart))
}

/// POST /sessions/{id}/cart
///
/// Adds one unit of a menu item, merging with an existing line.
#[utoipa::path(
    post,
    path = "/sessions/{id}/cart",
    params(("id" = Uuid, Path, description = "Session UUID")),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 404, description = "Session or menu item not found"),
        (status = 422, description = "Menu item is sold out"),
    ),
    tag = "cart"
)]
pub async fn add_to_cart(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, AppError> {
    let session_id = path.into_inner();
    let item_id = body.into_inner().menu_item_id;

    let menu = state.menu.clone();
    let item = web::block(move || menu.get_item(item_id)).await??;

    let cart = state.sessions.with_session(session_id, |s| {
        s.add_menu_item(&item)
            .map(|()| CartResponse::from(s.cart()))
    })??;
    Ok(HttpResponse::Ok().json(cart))
}

/// PUT /sessions/{id}/cart/{item_id}
#[utoipa::path(
    put,
    path = "/sessions/{id}/cart/{item_id}",
    params(
        ("id" = Uuid, Path, description = "Session UUID"),
        ("item_id" = Uuid, Path, description = "Menu item UUID of the cart line"),
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 400, description = "Quantity above 4294967295"),
        (status = 404, description = "Session not found"),
    ),
    tag = "cart"
)]
pub async fn update_quantity(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<UpdateQuantityRequest>,
) -> Result<HttpResponse, AppError> {
    let (session_id, item_id) = path.into_inner();
    let quantity = body.into_inner().quantity;
    if quantity > i64::from(u32::MAX) {
        return Err(AppError::BadRequest(format!(
            "quantity must not exceed {}",
            u32::MAX
        )));
    }

    let cart = state.sessions.with_session(session_id, |s| {
        s.update_quantity(item_id, quantity);
        CartResponse::from(s.cart())
    })?;
    Ok(HttpResponse::Ok().json(cart))
}

/// PUT /sessions/{id}/customer
///
/// Updates whichever of name and address are present.
#[utoipa::path(
    put,
    path = "/sessions/{id}/customer",
    params(("id" = Uuid, Path, description = "Session UUID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Current customer details", body = CustomerResponse),
        (status = 404, description = "Session not found"),
    ),
    tag = "cart"
)]
pub async fn update_customer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let UpdateCustomerRequest { name, address } = body.into_inner();

    let customer = state.sessions.with_session(path.into_inner(), |s| {
        s.update_customer(name, address);
        CustomerResponse::from(s.customer())
    })?;
    Ok(HttpResponse::Ok().json(customer))
}

/// POST /sessions/{id}/location
///
/// Fills the address from the browser's position fix. On failure the
/// address is left as it was.
#[utoipa::path(
    post,
    path = "/sessions/{id}/location",
    params(("id" = Uuid, Path, description = "Session UUID")),
    request_body = LocationReport,
    responses(
        (status = 200, description = "Address replaced by coordinates", body = CustomerResponse),
        (status = 404, description = "Session not found"),
        (status = 422, description = "Location unavailable or refused"),
    ),
    tag = "cart"
)]
pub async fn share_location(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<LocationReport>,
) -> Result<HttpResponse, AppError> {
    let position = ReportedPosition::from(body.into_inner());

    let customer = state.sessions.with_session(path.into_inner(), |s| {
        s.share_location(&position)
            .map(|_| CustomerResponse::from(s.customer()))
    })??;
    Ok(HttpResponse::Ok().json(customer))
}

/// POST /sessions/{id}/order
///
/// Composes the WhatsApp order. Nothing is recorded; the client opens the
/// returned link (also sent as `Location`) and the cart stays as it is.
#[utoipa::path(
    post,
    path = "/sessions/{id}/order",
    params(("id" = Uuid, Path, description = "Session UUID")),
    responses(
        (status = 200, description = "Order message and WhatsApp link", body = OrderResponse),
        (status = 404, description = "Session not found"),
        (status = 422, description = "Missing customer details or empty cart"),
    ),
    tag = "cart"
)]
pub async fn place_order(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let composer = state.composer.clone();
    let order = state
        .sessions
        .with_session(path.into_inner(), |s| s.place_order(&composer))??;

    Ok(HttpResponse::Ok()
        .insert_header((LOCATION, order.link.as_str()))
        .json(OrderResponse {
            message: order.message.into_string(),
            whatsapp_url: order.link.to_string(),
        }))
}
