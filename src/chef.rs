//! Chef panel: the add/edit form and list operations over the catalog

use tracing::{info, warn};

use crate::app::Status;
use crate::error::MenuError;
use crate::menu::{Course, MenuCatalog, MenuItem, Price};

/// Input fields of the dish form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Course,
    Price,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Course,
        FormField::Price,
        FormField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Dish Name",
            FormField::Course => "Course",
            FormField::Price => "Price",
            FormField::Description => "Description",
        }
    }
}

/// What a successful save did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added(usize),
    Updated(usize),
}

/// Dish form. Raw text is kept as typed so a failed save loses nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChefForm {
    pub name: String,
    pub course: Course,
    pub price: String,
    pub description: String,
    /// Name of the dish being edited; `None` means the form adds a new dish
    editing: Option<String>,
}

impl Default for ChefForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            course: Course::Starters,
            price: "0".to_string(),
            description: String::new(),
            editing: None,
        }
    }
}

impl ChefForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Load a dish into the form for editing
    pub fn begin_edit(&mut self, item: &MenuItem) {
        self.name = item.name.clone();
        self.course = item.course;
        self.price = item.price.to_string();
        self.description = item.description.clone();
        self.editing = Some(item.name.clone());
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Price => Some(&mut self.price),
            FormField::Description => Some(&mut self.description),
            FormField::Course => None,
        }
    }

    /// Build the dish described by the form without touching the catalog
    pub fn to_item(&self) -> Result<MenuItem, MenuError> {
        let price: Price = self.price.parse()?;
        MenuItem::new(&*self.name, self.course, price, &*self.description).validated()
    }

    /// Add or update in `catalog`. On error neither the catalog nor the
    /// form changes; on success the form goes back to an empty add form.
    pub fn save(&mut self, catalog: &mut MenuCatalog) -> Result<SaveOutcome, MenuError> {
        let item = self.to_item()?;

        let outcome = match &self.editing {
            Some(original) => {
                // Resolve by name now rather than trusting a stale position.
                let index = catalog
                    .position_of(original)
                    .ok_or_else(|| MenuError::NameNotFound(original.clone()))?;
                catalog.update(index, item)?;
                SaveOutcome::Updated(index)
            }
            None => SaveOutcome::Added(catalog.add(item)?),
        };

        self.reset();
        Ok(outcome)
    }
}

/// Transient state of the chef panel screen
#[derive(Debug, Clone, Default)]
pub struct ChefPanel {
    pub form: ChefForm,
    pub focus: ChefFocus,
    pub cursor: usize,
    pub status: Option<Status>,
}

/// Which part of the chef panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChefFocus {
    Field(FormField),
    List,
}

impl Default for ChefFocus {
    fn default() -> Self {
        ChefFocus::Field(FormField::Name)
    }
}

impl ChefFocus {
    pub fn next(&self) -> ChefFocus {
        match self {
            ChefFocus::Field(FormField::Name) => ChefFocus::Field(FormField::Course),
            ChefFocus::Field(FormField::Course) => ChefFocus::Field(FormField::Price),
            ChefFocus::Field(FormField::Price) => ChefFocus::Field(FormField::Description),
            ChefFocus::Field(FormField::Description) => ChefFocus::List,
            ChefFocus::List => ChefFocus::Field(FormField::Name),
        }
    }

    pub fn prev(&self) -> ChefFocus {
        match self {
            ChefFocus::Field(FormField::Name) => ChefFocus::List,
            ChefFocus::Field(FormField::Course) => ChefFocus::Field(FormField::Name),
            ChefFocus::Field(FormField::Price) => ChefFocus::Field(FormField::Course),
            ChefFocus::Field(FormField::Description) => ChefFocus::Field(FormField::Price),
            ChefFocus::List => ChefFocus::Field(FormField::Description),
        }
    }
}

impl ChefPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, catalog: &mut MenuCatalog) {
        let name = self.form.name.trim().to_string();
        self.status = Some(match self.form.save(catalog) {
            Ok(SaveOutcome::Added(index)) => {
                info!(%name, index, "Dish added");
                self.cursor = index;
                self.focus = ChefFocus::Field(FormField::Name);
                Status::info(format!("Added {name}"))
            }
            Ok(SaveOutcome::Updated(index)) => {
                info!(%name, index, "Dish updated");
                self.cursor = index;
                self.focus = ChefFocus::Field(FormField::Name);
                Status::info(format!("Updated {name}"))
            }
            Err(e) => {
                warn!("Save rejected: {}", e);
                Status::error(e.to_string())
            }
        });
    }

    /// Load the dish under the cursor into the form
    pub fn edit_selected(&mut self, catalog: &MenuCatalog) {
        match catalog.get(self.cursor) {
            Some(item) => {
                self.form.begin_edit(item);
                self.focus = ChefFocus::Field(FormField::Name);
                self.status = Some(Status::info(format!("Editing {}", item.name)));
            }
            None => self.status = Some(Status::error(MenuError::NotFound(self.cursor).to_string())),
        }
    }

    pub fn delete_selected(&mut self, catalog: &mut MenuCatalog) {
        match catalog.delete(self.cursor) {
            Ok(removed) => {
                info!(name = %removed.name, "Dish deleted");
                if self.form.editing() == Some(removed.name.as_str()) {
                    self.form.reset();
                }
                self.cursor = self.cursor.min(catalog.len().saturating_sub(1));
                self.status = Some(Status::info(format!("Deleted {}", removed.name)));
            }
            Err(e) => {
                warn!("Delete ignored: {}", e);
                self.status = Some(Status::error(e.to_string()));
            }
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemField;

    fn filled(name: &str, price: &str, description: &str) -> ChefForm {
        ChefForm {
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            ..ChefForm::default()
        }
    }

    #[test]
    fn test_save_adds_and_resets() {
        let mut catalog = MenuCatalog::new();
        let mut form = filled("Bruschetta", "45.99", "Toasted bread");
        assert_eq!(form.save(&mut catalog), Ok(SaveOutcome::Added(0)));
        assert_eq!(catalog.get(0).unwrap().price, Price::from_cents(4599));
        assert_eq!(form, ChefForm::default());
    }

    #[test]
    fn test_invalid_input_is_preserved() {
        let mut catalog = MenuCatalog::new();
        let mut form = filled("Soup", "12", "   ");
        let before = form.clone();

        assert_eq!(
            form.save(&mut catalog),
            Err(MenuError::InvalidItem(ItemField::Description))
        );
        assert_eq!(form, before);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_price_is_rejected_not_zeroed() {
        let mut catalog = MenuCatalog::new();
        let mut form = filled("Soup", "12abc", "Hot");
        assert!(matches!(
            form.save(&mut catalog),
            Err(MenuError::MalformedPrice(_))
        ));
        assert_eq!(form.price, "12abc");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_edit_follows_the_dish_by_name() {
        let mut catalog = MenuCatalog::new();
        for name in ["A", "B", "C"] {
            filled(name, "1", "x").save(&mut catalog).unwrap();
        }

        let mut form = ChefForm::new();
        form.begin_edit(catalog.get(2).unwrap());
        assert_eq!(form.editing(), Some("C"));

        // Something else removes a dish before the edit is saved.
        catalog.delete(0).unwrap();

        form.description = "changed".to_string();
        assert_eq!(form.save(&mut catalog), Ok(SaveOutcome::Updated(1)));
        assert_eq!(catalog.get(1).unwrap().description, "changed");
        assert_eq!(catalog.get(0).unwrap().name, "B");
    }

    #[test]
    fn test_edit_of_vanished_dish_is_not_found() {
        let mut catalog = MenuCatalog::new();
        filled("A", "1", "x").save(&mut catalog).unwrap();

        let mut form = ChefForm::new();
        form.begin_edit(catalog.get(0).unwrap());
        catalog.delete(0).unwrap();

        assert_eq!(
            form.save(&mut catalog),
            Err(MenuError::NameNotFound("A".into()))
        );
        assert!(catalog.is_empty());
        assert_eq!(form.editing(), Some("A"));
    }

    #[test]
    fn test_panel_delete_resets_form_editing_that_dish() {
        let mut catalog = MenuCatalog::new();
        filled("A", "1", "x").save(&mut catalog).unwrap();
        filled("B", "2", "y").save(&mut catalog).unwrap();

        let mut panel = ChefPanel::new();
        panel.cursor = 1;
        panel.edit_selected(&catalog);
        assert_eq!(panel.form.editing(), Some("B"));

        panel.delete_selected(&mut catalog);
        assert_eq!(panel.form, ChefForm::default());
        assert_eq!(panel.cursor, 0);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_panel_save_failure_sets_error_status() {
        let mut catalog = MenuCatalog::new();
        let mut panel = ChefPanel::new();
        panel.save(&mut catalog);
        assert!(panel.status.as_ref().unwrap().is_error);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_focus_cycles_through_form_and_list() {
        let mut focus = ChefFocus::default();
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, ChefFocus::default());
        assert_eq!(ChefFocus::default().prev(), ChefFocus::List);
    }
}
