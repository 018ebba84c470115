pub mod admin;
pub mod menu;
pub mod sessions;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        menu::list_menu,
        menu::get_menu_item,
        menu::list_header_images,
        sessions::open_session,
        sessions::close_session,
        sessions::get_cart,
        sessions::add_to_cart,
        sessions::update_quantity,
        sessions::update_customer,
        sessions::share_location,
        sessions::place_order,
        admin::list_menu_items,
        admin::create_menu_item,
        admin::update_menu_item,
        admin::delete_menu_item,
        admin::list_header_slots,
        admin::replace_header_image,
        admin::upload_image,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "menu", description = "Public menu and header carousel"),
        (name = "cart", description = "Per-visitor cart and WhatsApp order handoff"),
        (name = "admin", description = "Menu and header image management"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}
