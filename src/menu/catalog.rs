//! The menu catalog and its CRUD operations

use tracing::debug;

use super::{defaults, Course, CourseFilter, MenuItem};
use crate::error::MenuError;

/// Ordered list of dishes. Insertion order is display order within a course.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the built-in dishes of every course
    pub fn seeded() -> Self {
        let items = Course::ALL
            .iter()
            .flat_map(|course| defaults::dishes_for(*course))
            .collect();
        Self { items }
    }

    /// Append a dish. Returns its position.
    pub fn add(&mut self, item: MenuItem) -> Result<usize, MenuError> {
        let item = item.validated()?;
        if self.position_of(&item.name).is_some() {
            return Err(MenuError::DuplicateName(item.name));
        }

        debug!(name = %item.name, course = %item.course, "Adding dish");
        self.items.push(item);
        Ok(self.items.len() - 1)
    }

    /// Replace the whole record at `index`
    pub fn update(&mut self, index: usize, item: MenuItem) -> Result<(), MenuError> {
        let item = item.validated()?;
        if index >= self.items.len() {
            return Err(MenuError::NotFound(index));
        }
        // Keeping the same name is fine; taking another dish's name is not.
        if let Some(other) = self.position_of(&item.name) {
            if other != index {
                return Err(MenuError::DuplicateName(item.name));
            }
        }

        debug!(index, name = %item.name, "Updating dish");
        self.items[index] = item;
        Ok(())
    }

    /// Remove the dish at `index`; later dishes shift down by one
    pub fn delete(&mut self, index: usize) -> Result<MenuItem, MenuError> {
        if index >= self.items.len() {
            return Err(MenuError::NotFound(index));
        }
        let removed = self.items.remove(index);
        debug!(index, name = %removed.name, "Deleted dish");
        Ok(removed)
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.items.iter().position(|item| item.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lazy view of the dishes matching `filter`, in catalog order
    pub fn filter_by_course(
        &self,
        filter: impl Into<CourseFilter>,
    ) -> impl Iterator<Item = &MenuItem> + '_ {
        let filter = filter.into();
        self.items.iter().filter(move |item| filter.matches(item.course))
    }

    pub fn items_in(&self, course: Course) -> Vec<&MenuItem> {
        self.filter_by_course(course).collect()
    }

    pub fn group_by_course(&self) -> Vec<(Course, Vec<&MenuItem>)> {
        group_by_course(&self.items)
    }
}

impl<'a> IntoIterator for &'a MenuCatalog {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Group dishes by course, courses in first-seen order, dishes in input order
pub fn group_by_course<'a, I>(items: I) -> Vec<(Course, Vec<&'a MenuItem>)>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut groups: Vec<(Course, Vec<&'a MenuItem>)> = Vec::new();

    for item in items {
        match groups.iter_mut().find(|(course, _)| *course == item.course) {
            Some((_, dishes)) => dishes.push(item),
            None => groups.push((item.course, vec![item])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ItemField;
    use crate::menu::Price;

    fn dish(name: &str, course: Course, cents: u64) -> MenuItem {
        MenuItem::new(name, course, Price::from_cents(cents), format!("{name} description"))
    }

    fn names<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Vec<&'a str> {
        items.into_iter().map(|i| i.name.as_str()).collect()
    }

    fn sample() -> MenuCatalog {
        let mut catalog = MenuCatalog::new();
        catalog.add(dish("Garlic Prawns", Course::Starters, 8999)).unwrap();
        catalog.add(dish("Beef Steak", Course::MainMeal, 18999)).unwrap();
        catalog.add(dish("Bruschetta", Course::Starters, 4599)).unwrap();
        catalog.add(dish("Cheesecake", Course::Desserts, 6599)).unwrap();
        catalog
    }

    #[test]
    fn test_items_in_keeps_catalog_order() {
        let catalog = sample();
        assert_eq!(names(catalog.items_in(Course::Starters)), ["Garlic Prawns", "Bruschetta"]);
        assert_eq!(catalog.items_in(Course::MainMeal).len(), 1);
    }

    #[test]
    fn test_add_appends_in_order() {
        let catalog = sample();
        assert_eq!(
            names(&catalog),
            ["Garlic Prawns", "Beef Steak", "Bruschetta", "Cheesecake"]
        );
    }

    #[test]
    fn test_add_blank_fields_leaves_catalog_unchanged() {
        let mut catalog = sample();
        let before = catalog.items().to_vec();

        let err = catalog
            .add(MenuItem::new("  ", Course::Starters, Price::ZERO, "soup"))
            .unwrap_err();
        assert_eq!(err, MenuError::InvalidItem(ItemField::Name));

        let err = catalog
            .add(MenuItem::new("Soup", Course::Starters, Price::ZERO, " \n"))
            .unwrap_err();
        assert_eq!(err, MenuError::InvalidItem(ItemField::Description));

        assert_eq!(catalog.items(), before.as_slice());
    }

    #[test]
    fn test_add_rejects_duplicate_names() {
        let mut catalog = sample();
        let err = catalog
            .add(dish("Bruschetta", Course::MainMeal, 100))
            .unwrap_err();
        assert_eq!(err, MenuError::DuplicateName("Bruschetta".into()));

        // Surrounding whitespace does not make a new name
        assert!(catalog.add(dish(" Bruschetta ", Course::Starters, 100)).is_err());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let mut catalog = sample();
        catalog
            .update(1, dish("Ribeye", Course::MainMeal, 21000))
            .unwrap();
        assert_eq!(catalog.get(1).unwrap().name, "Ribeye");
        assert_eq!(catalog.get(1).unwrap().price, Price::from_cents(21000));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_update_keeps_own_name_but_rejects_collisions() {
        let mut catalog = sample();
        catalog
            .update(0, dish("Garlic Prawns", Course::Starters, 9999))
            .unwrap();
        assert_eq!(catalog.get(0).unwrap().price, Price::from_cents(9999));

        let err = catalog
            .update(0, dish("Cheesecake", Course::Desserts, 1))
            .unwrap_err();
        assert_eq!(err, MenuError::DuplicateName("Cheesecake".into()));
        assert_eq!(catalog.get(0).unwrap().name, "Garlic Prawns");
    }

    #[test]
    fn test_update_and_delete_out_of_range_are_not_found() {
        let mut catalog = sample();
        assert_eq!(
            catalog.update(9, dish("Ghost", Course::Starters, 1)),
            Err(MenuError::NotFound(9))
        );
        assert_eq!(catalog.delete(4), Err(MenuError::NotFound(4)));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_delete_shifts_later_items_down() {
        let mut catalog = MenuCatalog::new();
        catalog.add(dish("A", Course::Starters, 1)).unwrap();
        catalog.add(dish("B", Course::MainMeal, 2)).unwrap();
        catalog.add(dish("C", Course::Desserts, 3)).unwrap();

        let removed = catalog.delete(0).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(catalog.get(0).unwrap().name, "B");
        assert_eq!(catalog.get(1).unwrap().name, "C");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_filter_by_course() {
        let catalog = sample();
        assert_eq!(
            names(catalog.filter_by_course(CourseFilter::All)),
            names(&catalog)
        );
        assert_eq!(
            names(catalog.filter_by_course(Course::Starters)),
            ["Garlic Prawns", "Bruschetta"]
        );
        assert_eq!(
            names(catalog.filter_by_course(Course::Desserts)),
            ["Cheesecake"]
        );
        assert_eq!(MenuCatalog::new().filter_by_course(CourseFilter::All).count(), 0);
    }

    #[test]
    fn test_group_by_course_uses_first_seen_order() {
        let catalog = sample();
        let groups = catalog.group_by_course();
        let courses: Vec<Course> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(courses, [Course::Starters, Course::MainMeal, Course::Desserts]);
        assert_eq!(names(groups[0].1.iter().copied()), ["Garlic Prawns", "Bruschetta"]);
        assert!(MenuCatalog::new().group_by_course().is_empty());
    }

    #[test]
    fn test_seeded_catalog_has_unique_names() {
        let catalog = MenuCatalog::seeded();
        assert_eq!(catalog.len(), 9);
        for item in &catalog {
            assert_eq!(catalog.position_of(&item.name).map(|i| &catalog.items()[i]), Some(item));
        }
    }
}
