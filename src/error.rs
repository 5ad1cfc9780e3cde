//! Error types for catalog, cart and navigation operations
//!
//! None of these are fatal: the UI absorbs them into a status line and the
//! state they refer to is left untouched.

use thiserror::Error;

use crate::menu::Course;
use crate::nav::{NavAction, Screen};

/// Fields of a menu item that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Description,
}

impl ItemField {
    pub fn label(&self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Description => "description",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Dish {} must not be blank", .0.label())]
    InvalidItem(ItemField),

    #[error("Price '{0}' is not a valid amount")]
    MalformedPrice(String),

    #[error("A dish named '{0}' is already on the menu")]
    DuplicateName(String),

    #[error("No dish at position {0}")]
    NotFound(usize),

    #[error("No dish named '{0}'")]
    NameNotFound(String),

    #[error("Unknown course '{0}'")]
    UnknownCourse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Cannot {action:?} from {from:?}")]
    InvalidTransition { from: Screen, action: NavAction },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(
            MenuError::InvalidItem(ItemField::Description).to_string(),
            "Dish description must not be blank"
        );
        assert_eq!(
            MenuError::DuplicateName("Bruschetta".into()).to_string(),
            "A dish named 'Bruschetta' is already on the menu"
        );
    }

    #[test]
    fn nav_error_mentions_both_sides() {
        let err = NavError::InvalidTransition {
            from: Screen::Filter,
            action: NavAction::OpenCategory(Course::Desserts),
        };
        let text = err.to_string();
        assert!(text.contains("Filter"));
        assert!(text.contains("Desserts"));
    }
}
