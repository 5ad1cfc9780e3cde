//! Maison Menu
//!
//! Terminal restaurant menu: a splash screen, per-course ordering with a
//! cart and checkout, a course filter view, and a chef panel for managing
//! the dishes on offer.

pub mod app;
pub mod cart;
pub mod chef;
pub mod config;
pub mod error;
pub mod event;
pub mod menu;
pub mod nav;
pub mod ui;

pub use app::App;
pub use cart::{Cart, CartLine, OrderReceipt};
pub use config::AppConfig;
pub use error::{MenuError, NavError};
pub use menu::{Course, CourseFilter, MenuCatalog, MenuItem, Price};
pub use nav::{NavAction, Navigator, Screen};
