use std::sync::Arc;

use crate::application::header_image_service::HeaderImageService;
use crate::application::menu_service::MenuService;
use crate::application::storefront::SessionStore;
use crate::application::upload_service::UploadService;
use crate::config::Settings;
use crate::db::DbPool;
use crate::domain::order::OrderComposer;
use crate::domain::ports::{HeaderImageRepository, ImageStorage, MenuRepository};
use crate::infrastructure::header_image_repo::DieselHeaderImageRepository;
use crate::infrastructure::image_storage::FsImageStorage;
use crate::infrastructure::menu_repo::DieselMenuRepository;

pub type Menu = MenuService<Arc<dyn MenuRepository>>;
pub type HeaderImages = HeaderImageService<Arc<dyn HeaderImageRepository>>;
pub type Uploads = UploadService<Arc<dyn ImageStorage>>;

/// Everything the handlers share. Cloning is cheap; all parts sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<Menu>,
    pub header_images: Arc<HeaderImages>,
    pub uploads: Arc<Uploads>,
    pub sessions: Arc<SessionStore>,
    pub composer: Arc<OrderComposer>,
    pub admin_token: Arc<str>,
}

impl AppState {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        header_repo: Arc<dyn HeaderImageRepository>,
        storage: Arc<dyn ImageStorage>,
        composer: OrderComposer,
        admin_token: &str,
    ) -> Self {
        Self {
            menu: Arc::new(MenuService::new(menu_repo)),
            header_images: Arc::new(HeaderImageService::new(header_repo)),
            uploads: Arc::new(UploadService::new(storage)),
            sessions: Arc::new(SessionStore::new()),
            composer: Arc::new(composer),
            admin_token: Arc::from(admin_token),
        }
    }

    /// Wires the Postgres repositories and the filesystem image store.
    pub fn from_settings(pool: DbPool, settings: &Settings) -> Self {
        let mut state = Self::new(
            Arc::new(DieselMenuRepository::new(pool.clone())),
            Arc::new(DieselHeaderImageRepository::new(pool)),
            Arc::new(FsImageStorage::new(
                settings.upload_dir.clone(),
                settings.public_upload_base.clone(),
            )),
            OrderComposer::new(
                settings.store_header.clone(),
                settings.whatsapp_number.clone(),
            ),
            &settings.admin_token,
        );
        state.sessions = Arc::new(SessionStore::with_limits(
            settings.session_ttl,
            settings.max_sessions,
        ));
        state
    }
}
