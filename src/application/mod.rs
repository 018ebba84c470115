pub mod header_image_service;
pub mod menu_service;
pub mod storefront;
pub mod upload_service;
