use uuid::Uuid;

use super::menu::MenuItem;
use super::money::Rupiah;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub id: Uuid,
    pub name: String,
    pub unit_price: Rupiah,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> Rupiah {
        self.unit_price.times(self.quantity)
    }
}

/// Selected line items in insertion order, at most one per menu item id.
///
/// A line never sits in the cart with quantity zero: dropping the quantity to
/// zero or below removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, merging with an existing line for the same id.
    pub fn add(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(LineItem {
                id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
            }),
        }
    }

    /// Sets the quantity of an existing line. Zero or less removes the line;
    /// unknown ids are ignored. Quantities are held as `u32`, so anything
    /// larger saturates at `u32::MAX`; the HTTP layer refuses such values.
    pub fn set_quantity(&mut self, id: Uuid, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|l| l.id != id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Badge count: units across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total_price(&self) -> Rupiah {
        self.lines.iter().map(LineItem::subtotal).sum()
    }
}
