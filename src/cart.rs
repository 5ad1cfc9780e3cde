//! Order cart scoped to a single category page visit

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::error::MenuError;
use crate::menu::{MenuItem, Price};

/// A dish and how many of it were ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Snapshot of the dish taken when it was first added
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn total(&self) -> Price {
        self.item.price * self.quantity
    }
}

/// Lines keyed by dish name, kept in first-add order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// What was ordered when the cart was checked out
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub item_count: u32,
    pub placed_at: DateTime<Local>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item`. A dish already in the cart keeps its position.
    pub fn add_to_cart(&mut self, item: &MenuItem) {
        match self.line_mut(&item.name) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                debug!(name = %item.name, quantity = line.quantity, "Incremented cart line");
            }
            None => {
                debug!(name = %item.name, "New cart line");
                self.lines.push(CartLine {
                    item: item.clone(),
                    quantity: 1,
                });
            }
        }
    }

    /// Set the quantity of a line directly. Anything below one removes it.
    pub fn update_quantity(&mut self, name: &str, new_qty: i64) -> Result<(), MenuError> {
        if new_qty < 1 {
            return self.remove_from_cart(name).map(|_| ());
        }

        let line = self
            .line_mut(name)
            .ok_or_else(|| MenuError::NameNotFound(name.to_string()))?;
        line.quantity = u32::try_from(new_qty).unwrap_or(u32::MAX);
        Ok(())
    }

    pub fn remove_from_cart(&mut self, name: &str) -> Result<CartLine, MenuError> {
        let index = self
            .lines
            .iter()
            .position(|line| line.item.name == name)
            .ok_or_else(|| MenuError::NameNotFound(name.to_string()))?;
        Ok(self.lines.remove(index))
    }

    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Sum of all quantities
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.item.name == name)
            .map(|line| line.quantity)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empty the cart into a receipt. Nothing happens for an empty cart.
    pub fn checkout(&mut self) -> Option<OrderReceipt> {
        if self.lines.is_empty() {
            return None;
        }

        let receipt = OrderReceipt {
            total: self.total(),
            item_count: self.item_count(),
            lines: std::mem::take(&mut self.lines),
            placed_at: Local::now(),
        };
        info!(
            items = receipt.item_count,
            total = %receipt.total,
            "Order placed"
        );
        Some(receipt)
    }

    fn line_mut(&mut self, name: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.item.name == name)
    }
}
