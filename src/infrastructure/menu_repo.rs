use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItem, MenuItemDraft};
use crate::domain::ports::MenuRepository;
use crate::schema::menu_items;

use super::models::{MenuItemChanges, MenuItemRow, NewMenuItemRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselMenuRepository {
    pool: DbPool,
}

impl DieselMenuRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl MenuRepository for DieselMenuRepository {
    fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        let mut conn = self.pool.get()?;

        menu_items::table
            .select(MenuItemRow::as_select())
            .order((menu_items::category.asc(), menu_items::name.asc()))
            .load::<MenuItemRow>(&mut conn)?
            .into_iter()
            .map(MenuItem::try_from)
            .collect()
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>, DomainError> {
        let mut conn = self.pool.get()?;

        menu_items::table
            .find(id)
            .select(MenuItemRow::as_select())
            .first::<MenuItemRow>(&mut conn)
            .optional()?
            .map(MenuItem::try_from)
            .transpose()
    }

    fn create(&self, draft: MenuItemDraft) -> Result<MenuItem, DomainError> {
        let mut conn = self.pool.get()?;

        let row: MenuItemRow = diesel::insert_into(menu_items::table)
            .values(&NewMenuItemRow::from_draft(Uuid::new_v4(), draft))
            .returning(MenuItemRow::as_returning())
            .get_result(&mut conn)?;
        MenuItem::try_from(row)
    }

    fn update(&self, id: Uuid, draft: MenuItemDraft) -> Result<Option<MenuItem>, DomainError> {
        let mut conn = self.pool.get()?;

        diesel::update(menu_items::table.find(id))
            .set(&MenuItemChanges::from(draft))
            .returning(MenuItemRow::as_returning())
            .get_result::<MenuItemRow>(&mut conn)
            .optional()?
            .map(MenuItem::try_from)
            .transpose()
    }

    fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(menu_items::table.find(id)).execute(&mut conn)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::DieselMenuRepository;
    use crate::domain::menu::{Category, MenuItemForm, StockStatus};
    use crate::domain::money::Rupiah;
    use crate::domain::ports::MenuRepository;
    use crate::infrastructure::test_support::setup_db;

    fn draft(name: &str, price: &str, category: &str) -> crate::domain::menu::MenuItemDraft {
        MenuItemForm {
            name: name.into(),
            price: price.into(),
            category: Some(category.into()),
            stock_status: None,
        }
        .validate(format!("https://cdn.example/{name}.jpg"))
        .expect("valid draft")
    }

    #[tokio::test]
    async fn create_and_find_by_id_roundtrip() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);

        let created = repo
            .create(draft("Nasi Goreng", "15000", "Makanan"))
            .expect("create failed");
        let found = repo
            .find_by_id(created.id)
            .expect("find failed")
            .expect("item should exist");

        assert_eq!(found, created);
        assert_eq!(found.price, Rupiah::new(15_000));
        assert_eq!(found.stock_status, StockStatus::Tersedia);
    }

    #[tokio::test]
    async fn list_orders_by_category_then_name() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);

        for (name, category) in [
            ("Teh Manis", "Minuman"),
            ("Soto", "Makanan"),
            ("Kerupuk", "Lainnya"),
            ("Bakso", "Makanan"),
        ] {
            repo.create(draft(name, "1000", category))
                .expect("create failed");
        }

        let names: Vec<String> = repo
            .list()
            .expect("list failed")
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["Kerupuk", "Bakso", "Soto", "Teh Manis"]);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);
        let created = repo
            .create(draft("Es Teh", "4000", "Minuman"))
            .expect("create failed");

        let mut changed = draft("Es Teh Manis", "5000", "Minuman");
        changed.stock_status = StockStatus::Habis;
        let updated = repo
            .update(created.id, changed)
            .expect("update failed")
            .expect("item should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Es Teh Manis");
        assert_eq!(updated.price, Rupiah::new(5_000));
        assert_eq!(updated.category, Category::Minuman);
        assert!(!updated.is_available());
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);

        let updated = repo
            .update(Uuid::new_v4(), draft("X", "1", "Lainnya"))
            .expect("update should not error");
        assert!(updated.is_none());
        assert!(!repo.delete(Uuid::new_v4()).expect("delete failed"));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (_container, pool) = setup_db().await;
        let repo = DieselMenuRepository::new(pool);
        let created = repo
            .create(draft("Soto", "18000", "Makanan"))
            .expect("create failed");

        assert!(repo.delete(created.id).expect("delete failed"));
        assert!(repo.find_by_id(created.id).expect("find failed").is_none());
    }
}
