//! Application state: the shared catalog, the navigator and per-screen state

use std::time::Instant;

use tracing::{debug, warn};

use crate::cart::{Cart, OrderReceipt};
use crate::chef::ChefPanel;
use crate::config::AppConfig;
use crate::menu::{defaults, Course, CourseFilter, MenuCatalog, MenuItem, Price};
use crate::nav::{NavAction, Navigator, Screen};

/// One-line feedback shown under a form or list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuEntry {
    Course(Course),
    FilterAll,
    ChefPanel,
}

impl MainMenuEntry {
    pub const ALL: [MainMenuEntry; 5] = [
        MainMenuEntry::Course(Course::Starters),
        MainMenuEntry::Course(Course::MainMeal),
        MainMenuEntry::Course(Course::Desserts),
        MainMenuEntry::FilterAll,
        MainMenuEntry::ChefPanel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainMenuEntry::Course(course) => course.label(),
            MainMenuEntry::FilterAll => "Filter All",
            MainMenuEntry::ChefPanel => "Open Chef Panel",
        }
    }

    pub fn action(&self) -> NavAction {
        match self {
            MainMenuEntry::Course(course) => NavAction::OpenCategory(*course),
            MainMenuEntry::FilterAll => NavAction::OpenFilter,
            MainMenuEntry::ChefPanel => NavAction::OpenChef,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MainMenuState {
    pub cursor: usize,
}

impl MainMenuState {
    pub fn selected(&self) -> MainMenuEntry {
        MainMenuEntry::ALL[self.cursor.min(MainMenuEntry::ALL.len() - 1)]
    }

    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.cursor + 1 < MainMenuEntry::ALL.len() {
            self.cursor += 1;
        }
    }
}

/// Which list of the category page receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFocus {
    #[default]
    Dishes,
    Cart,
}

/// Category screen state. The cart lives and dies with the page.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub course: Course,
    pub cart: Cart,
    pub focus: CategoryFocus,
    pub dish_cursor: usize,
    pub cart_cursor: usize,
    pub receipt: Option<OrderReceipt>,
    pub status: Option<Status>,
    fallback: Vec<MenuItem>,
}

impl CategoryPage {
    pub fn new(course: Course, show_default_dishes: bool) -> Self {
        let fallback = if show_default_dishes {
            defaults::dishes_for(course)
        } else {
            Vec::new()
        };

        Self {
            course,
            cart: Cart::new(),
            focus: CategoryFocus::Dishes,
            dish_cursor: 0,
            cart_cursor: 0,
            receipt: None,
            status: None,
            fallback,
        }
    }

    /// Dishes of this course, or the built-in ones when the catalog has none
    pub fn dishes<'a>(&'a self, catalog: &'a MenuCatalog) -> Vec<&'a MenuItem> {
        let dishes = catalog.items_in(self.course);
        if dishes.is_empty() {
            self.fallback.iter().collect()
        } else {
            dishes
        }
    }

    pub fn showing_defaults(&self, catalog: &MenuCatalog) -> bool {
        catalog.filter_by_course(self.course).next().is_none() && !self.fallback.is_empty()
    }

    pub fn add_selected(&mut self, catalog: &MenuCatalog) {
        let dishes = self.dishes(catalog);
        let Some(item) = dishes.get(self.dish_cursor).copied().cloned() else {
            return;
        };
        self.cart.add_to_cart(&item);
        self.receipt = None;
        self.status = Some(Status::info(format!("Added {} to order", item.name)));
    }

    /// Change the selected cart line's quantity by `delta`
    pub fn adjust_selected(&mut self, delta: i64) {
        let Some(line) = self.cart.lines().get(self.cart_cursor) else {
            return;
        };
        let name = line.item.name.clone();
        let quantity = i64::from(line.quantity) + delta;
        if let Err(e) = self.cart.update_quantity(&name, quantity) {
            warn!("Quantity change ignored: {}", e);
        }
        self.receipt = None;
        self.clamp_cart_cursor();
    }

    pub fn remove_selected(&mut self) {
        let Some(line) = self.cart.lines().get(self.cart_cursor) else {
            return;
        };
        let name = line.item.name.clone();
        match self.cart.remove_from_cart(&name) {
            Ok(_) => self.status = Some(Status::info(format!("Removed {name}"))),
            Err(e) => warn!("Remove ignored: {}", e),
        }
        self.clamp_cart_cursor();
    }

    pub fn checkout(&mut self) {
        match self.cart.checkout() {
            Some(receipt) => {
                self.status = None;
                self.receipt = Some(receipt);
                self.focus = CategoryFocus::Dishes;
                self.cart_cursor = 0;
            }
            None => self.status = Some(Status::error("Your order is empty")),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            CategoryFocus::Dishes if !self.cart.is_empty() => CategoryFocus::Cart,
            _ => CategoryFocus::Dishes,
        };
    }

    pub fn cursor_up(&mut self) {
        match self.focus {
            CategoryFocus::Dishes => self.dish_cursor = self.dish_cursor.saturating_sub(1),
            CategoryFocus::Cart => self.cart_cursor = self.cart_cursor.saturating_sub(1),
        }
    }

    pub fn cursor_down(&mut self, dish_count: usize) {
        match self.focus {
            CategoryFocus::Dishes => {
                if self.dish_cursor + 1 < dish_count {
                    self.dish_cursor += 1;
                }
            }
            CategoryFocus::Cart => {
                if self.cart_cursor + 1 < self.cart.len() {
                    self.cart_cursor += 1;
                }
            }
        }
    }

    fn clamp_cart_cursor(&mut self) {
        if self.cart.is_empty() {
            self.cart_cursor = 0;
            self.focus = CategoryFocus::Dishes;
        } else {
            self.cart_cursor = self.cart_cursor.min(self.cart.len() - 1);
        }
    }
}

/// Filter-by-course screen state
#[derive(Debug, Clone, Default)]
pub struct FilterPage {
    pub filter: CourseFilter,
    /// Show results under per-course headings
    pub grouped: bool,
}

impl FilterPage {
    pub fn select(&mut self, filter: CourseFilter) {
        self.filter = filter;
    }

    pub fn next_filter(&mut self) {
        self.filter = CourseFilter::ALL[(self.position() + 1) % CourseFilter::ALL.len()];
    }

    pub fn prev_filter(&mut self) {
        let len = CourseFilter::ALL.len();
        self.filter = CourseFilter::ALL[(self.position() + len - 1) % len];
    }

    pub fn results<'a>(&self, catalog: &'a MenuCatalog) -> Vec<&'a MenuItem> {
        catalog.filter_by_course(self.filter).collect()
    }

    fn position(&self) -> usize {
        CourseFilter::ALL
            .iter()
            .position(|f| *f == self.filter)
            .unwrap_or(0)
    }
}

/// Per-screen transient state, rebuilt on every transition
#[derive(Debug, Clone)]
pub enum Page {
    Splash,
    MainMenu(MainMenuState),
    Category(CategoryPage),
    Filter(FilterPage),
    Chef(ChefPanel),
}

impl Page {
    fn enter(screen: Screen, config: &AppConfig) -> Self {
        match screen {
            Screen::Splash => Page::Splash,
            Screen::MainMenu => Page::MainMenu(MainMenuState::default()),
            Screen::Category(course) => {
                Page::Category(CategoryPage::new(course, config.show_default_dishes))
            }
            Screen::Filter => Page::Filter(FilterPage::default()),
            Screen::Chef => Page::Chef(ChefPanel::new()),
        }
    }
}

/// Everything the UI shows, owned by the event loop
pub struct App {
    pub config: AppConfig,
    pub catalog: MenuCatalog,
    pub page: Page,
    pub should_quit: bool,
    nav: Navigator,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::starting_at(config, Instant::now())
    }

    pub fn starting_at(config: AppConfig, start: Instant) -> Self {
        let catalog = if config.seed_catalog {
            MenuCatalog::seeded()
        } else {
            MenuCatalog::new()
        };
        let nav = Navigator::starting_at(start, config.splash_delay());

        Self {
            page: Page::enter(nav.screen(), &config),
            config,
            catalog,
            should_quit: false,
            nav,
        }
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    /// Move to another screen, discarding the current screen's state
    pub fn navigate(&mut self, action: NavAction) {
        match self.nav.dispatch(action) {
            Ok(screen) => self.page = Page::enter(screen, &self.config),
            Err(e) => warn!("Navigation ignored: {}", e),
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(screen) = self.nav.tick(now) {
            self.page = Page::enter(screen, &self.config);
        }
    }

    pub fn quit(&mut self) {
        debug!(screen = ?self.screen(), "Quit requested");
        self.nav.shutdown();
        self.should_quit = true;
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, price: Price) -> String {
        price.with_symbol(&self.config.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app_on_main_menu() -> App {
        let start = Instant::now();
        let mut app = App::starting_at(AppConfig::default(), start);
        app.on_tick(start + Duration::from_millis(3000));
        assert_eq!(app.screen(), Screen::MainMenu);
        app
    }

    fn add_dish(app: &mut App, name: &str, course: Course, cents: u64) {
        app.catalog
            .add(MenuItem::new(name, course, Price::from_cents(cents), "dish"))
            .unwrap();
    }

    #[test]
    fn test_page_follows_screen() {
        let mut app = app_on_main_menu();
        app.navigate(NavAction::OpenCategory(Course::Desserts));
        assert!(matches!(&app.page, Page::Category(p) if p.course == Course::Desserts));
        app.navigate(NavAction::Back);
        assert!(matches!(app.page, Page::MainMenu(_)));
        app.navigate(NavAction::Back);
        assert_eq!(app.screen(), Screen::MainMenu);
    }

    #[test]
    fn test_cart_is_discarded_when_leaving_category() {
        let mut app = app_on_main_menu();
        add_dish(&mut app, "Garlic Prawns", Course::Starters, 8999);

        app.navigate(NavAction::OpenCategory(Course::Starters));
        if let Page::Category(page) = &mut app.page {
            page.add_selected(&app.catalog);
            assert_eq!(page.cart.item_count(), 1);
        }
        app.navigate(NavAction::Back);
        app.navigate(NavAction::OpenCategory(Course::Starters));
        match &app.page {
            Page::Category(page) => assert!(page.cart.is_empty()),
            other => panic!("unexpected page {other:?}"),
        }
    }

    #[test]
    fn test_category_scenario() {
        let mut app = app_on_main_menu();
        add_dish(&mut app, "Garlic Prawns", Course::Starters, 8999);
        add_dish(&mut app, "Beef Steak", Course::MainMeal, 18999);
        add_dish(&mut app, "Bruschetta", Course::Starters, 4599);
        app.navigate(NavAction::OpenCategory(Course::Starters));

        let Page::Category(page) = &mut app.page else {
            panic!("expected category page");
        };
        let names: Vec<&str> = page
            .dishes(&app.catalog)
            .into_iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, ["Garlic Prawns", "Bruschetta"]);

        page.add_selected(&app.catalog);
        page.add_selected(&app.catalog);
        page.cursor_down(2);
        page.add_selected(&app.catalog);
        let total = page.cart.total();
        assert_eq!(total, Price::from_cents(22597));
        assert_eq!(app.money(total), "R225.97");
    }

    #[test]
    fn test_empty_course_falls_back_to_defaults() {
        let mut app = app_on_main_menu();
        app.navigate(NavAction::OpenCategory(Course::MainMeal));
        let Page::Category(page) = &app.page else {
            panic!("expected category page");
        };
        assert!(page.showing_defaults(&app.catalog));
        assert_eq!(page.dishes(&app.catalog)[0].name, "Grilled Salmon");

        let config = AppConfig {
            show_default_dishes: false,
            ..AppConfig::default()
        };
        let page = CategoryPage::new(Course::MainMeal, config.show_default_dishes);
        assert!(page.dishes(&app.catalog).is_empty());
        assert!(!page.showing_defaults(&app.catalog));
    }

    #[test]
    fn test_cart_quantity_controls() {
        let catalog = MenuCatalog::seeded();
        let mut page = CategoryPage::new(Course::Desserts, true);
        page.add_selected(&catalog);
        page.toggle_focus();
        assert_eq!(page.focus, CategoryFocus::Cart);

        page.adjust_selected(1);
        assert_eq!(page.cart.quantity_of("Chocolate Cake"), Some(2));
        page.adjust_selected(-2);
        assert!(page.cart.is_empty());
        assert_eq!(page.focus, CategoryFocus::Dishes);
    }

    #[test]
    fn test_checkout_shows_receipt() {
        let catalog = MenuCatalog::seeded();
        let mut page = CategoryPage::new(Course::Starters, true);
        page.checkout();
        assert!(page.status.as_ref().unwrap().is_error);

        page.add_selected(&catalog);
        page.checkout();
        assert!(page.cart.is_empty());
        assert_eq!(page.receipt.as_ref().unwrap().total, Price::from_cents(8999));
    }

    #[test]
    fn test_filter_page_cycles_and_is_idempotent() {
        let catalog = MenuCatalog::seeded();
        let mut page = FilterPage::default();
        assert_eq!(page.results(&catalog).len(), 9);

        page.select(CourseFilter::Only(Course::Desserts));
        page.select(CourseFilter::Only(Course::Desserts));
        assert_eq!(page.results(&catalog).len(), 3);
        assert_eq!(catalog.len(), 9);

        page.next_filter();
        assert_eq!(page.filter, CourseFilter::All);
        page.prev_filter();
        assert_eq!(page.filter, CourseFilter::Only(Course::Desserts));
    }

    #[test]
    fn test_seeded_config_fills_catalog() {
        let config = AppConfig {
            seed_catalog: true,
            ..AppConfig::default()
        };
        assert_eq!(App::new(config).catalog.len(), 9);
        assert!(App::new(AppConfig::default()).catalog.is_empty());
    }

    #[test]
    fn test_quit_during_splash_cancels_advance() {
        let start = Instant::now();
        let mut app = App::starting_at(AppConfig::default(), start);
        app.quit();
        app.on_tick(start + Duration::from_secs(10));
        assert_eq!(app.screen(), Screen::Splash);
        assert!(app.should_quit);
    }
}
