use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::errors::DomainError;
use super::money::Rupiah;

/// Menu tab an item is listed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Makanan,
    Minuman,
    Lainnya,
}

impl Category {
    /// Tabs in the order the storefront shows them.
    pub const ALL: [Category; 3] = [Category::Makanan, Category::Minuman, Category::Lainnya];

    pub fn label(self) -> &'static str {
        match self {
            Category::Makanan => "Makanan",
            Category::Minuman => "Minuman",
            Category::Lainnya => "Lainnya",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown category '{s}'")))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StockStatus {
    #[default]
    Tersedia,
    Habis,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Tersedia => "Tersedia",
            StockStatus::Habis => "Habis",
        }
    }

    pub fn is_available(self) -> bool {
        self == StockStatus::Tersedia
    }
}

impl FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Tersedia" => Ok(StockStatus::Tersedia),
            "Habis" => Ok(StockStatus::Habis),
            other => Err(DomainError::InvalidInput(format!(
                "unknown stock status '{other}'"
            ))),
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub price: Rupiah,
    pub image_url: String,
    pub category: Category,
    pub stock_status: StockStatus,
}

impl MenuItem {
    pub fn is_available(&self) -> bool {
        self.stock_status.is_available()
    }
}

/// Admin input exactly as typed into the menu form.
#[derive(Debug, Clone, Default)]
pub struct MenuItemForm {
    pub name: String,
    pub price: String,
    pub category: Option<String>,
    pub stock_status: Option<String>,
}

/// A menu item that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDraft {
    pub name: String,
    pub price: Rupiah,
    pub image_url: String,
    pub category: Category,
    pub stock_status: StockStatus,
}

impl MenuItemForm {
    pub fn validate(&self, image_url: String) -> Result<MenuItemDraft, DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("menu name is required".into()));
        }
        if image_url.trim().is_empty() {
            return Err(DomainError::InvalidInput("an image is required".into()));
        }
        let category = match self.category.as_deref() {
            Some(label) if !label.trim().is_empty() => label.parse()?,
            _ => Category::default(),
        };
        let stock_status = match self.stock_status.as_deref() {
            Some(label) if !label.trim().is_empty() => label.parse()?,
            _ => StockStatus::default(),
        };

        Ok(MenuItemDraft {
            name: name.to_string(),
            price: self.price.parse()?,
            image_url,
            category,
            stock_status,
        })
    }
}

/// One storefront tab with its items.
#[derive(Debug, Clone)]
pub struct MenuSection {
    pub category: Category,
    pub items: Vec<MenuItem>,
}

/// Orders items the way the menu source lists them: by category label, then name.
pub fn sort_for_display(items: &mut [MenuItem]) {
    items.sort_by(|a, b| {
        a.category
            .label()
            .cmp(b.category.label())
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Splits a listing into the fixed tabs. Every tab is present, possibly empty,
/// and items keep their relative order.
pub fn group_by_category(items: Vec<MenuItem>) -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = Category::ALL
        .into_iter()
        .map(|category| MenuSection {
            category,
            items: Vec::new(),
        })
        .collect();
    for item in items {
        if let Some(section) = sections.iter_mut().find(|s| s.category == item.category) {
            section.items.push(item);
        }
    }
    sections
}
