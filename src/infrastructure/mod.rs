pub mod geolocation;
pub mod header_image_repo;
pub mod image_storage;
pub mod menu_repo;
pub mod models;

#[cfg(test)]
pub(crate) mod test_support;
