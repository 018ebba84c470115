pub mod cart;
pub mod customer;
pub mod errors;
pub mod geolocation;
pub mod header_image;
pub mod menu;
pub mod money;
pub mod order;
pub mod ports;
pub mod upload;
