use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::header_image::HeaderImage;
use crate::domain::ports::HeaderImageRepository;
use crate::schema::header_images;

use super::models::HeaderImageRow;

pub struct DieselHeaderImageRepository {
    pool: DbPool,
}

impl DieselHeaderImageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl HeaderImageRepository for DieselHeaderImageRepository {
    fn list(&self) -> Result<Vec<HeaderImage>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = header_images::table
            .select(HeaderImageRow::as_select())
            .order(header_images::position.asc())
            .load::<HeaderImageRow>(&mut conn)?;
        Ok(rows.into_iter().map(HeaderImage::from).collect())
    }

    fn update_image_url(
        &self,
        id: Uuid,
        image_url: &str,
    ) -> Result<Option<HeaderImage>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(header_images::table.find(id))
            .set((
                header_images::image_url.eq(image_url),
                header_images::updated_at.eq(Utc::now()),
            ))
            .returning(HeaderImageRow::as_returning())
            .get_result::<HeaderImageRow>(&mut conn)
            .optional()?;
        Ok(row.map(HeaderImage::from))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::DieselHeaderImageRepository;
    use crate::domain::ports::HeaderImageRepository;
    use crate::infrastructure::test_support::setup_db;

    #[tokio::test]
    async fn migrations_seed_three_empty_slots() {
        let (_container, pool) = setup_db().await;
        let repo = DieselHeaderImageRepository::new(pool);

        let slots = repo.list().expect("list failed");

        let positions: Vec<i32> = slots.iter().map(|s| s.position).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert!(slots.iter().all(|s| !s.has_image()));
    }

    #[tokio::test]
    async fn update_image_url_keeps_position() {
        let (_container, pool) = setup_db().await;
        let repo = DieselHeaderImageRepository::new(pool);
        let second = repo.list().expect("list failed")[1].clone();

        let updated = repo
            .update_image_url(second.id, "https://cdn.example/header-2.jpg")
            .expect("update failed")
            .expect("slot should exist");

        assert_eq!(updated.position, 2);
        assert_eq!(updated.image_url, "https://cdn.example/header-2.jpg");
    }

    #[tokio::test]
    async fn update_unknown_slot_returns_none() {
        let (_container, pool) = setup_db().await;
        let repo = DieselHeaderImageRepository::new(pool);

        let updated = repo
            .update_image_url(Uuid::new_v4(), "x.jpg")
            .expect("update should not error");
        assert!(updated.is_none());
    }
}
