//! Menu data model: courses, prices and dishes

pub mod catalog;
pub mod defaults;

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::{ItemField, MenuError};

pub use catalog::{group_by_course, MenuCatalog};

/// Course a dish belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    Starters,
    MainMeal,
    Desserts,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::MainMeal, Course::Desserts];

    pub fn label(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::MainMeal => "Main Meal",
            Course::Desserts => "Desserts",
        }
    }

    /// Next course in display order, wrapping around
    pub fn next(&self) -> Course {
        match self {
            Course::Starters => Course::MainMeal,
            Course::MainMeal => Course::Desserts,
            Course::Desserts => Course::Starters,
        }
    }

    pub fn prev(&self) -> Course {
        match self {
            Course::Starters => Course::Desserts,
            Course::MainMeal => Course::Starters,
            Course::Desserts => Course::MainMeal,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starters" => Ok(Course::Starters),
            "main meal" | "mainmeal" | "main" => Ok(Course::MainMeal),
            "desserts" => Ok(Course::Desserts),
            _ => Err(MenuError::UnknownCourse(s.to_string())),
        }
    }
}

/// Filter value of the filter-by-course view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    pub const ALL: [CourseFilter; 4] = [
        CourseFilter::All,
        CourseFilter::Only(Course::Starters),
        CourseFilter::Only(Course::MainMeal),
        CourseFilter::Only(Course::Desserts),
    ];

    pub fn matches(&self, course: Course) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(c) => *c == course,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseFilter::All => "All",
            CourseFilter::Only(c) => c.label(),
        }
    }
}

impl From<Course> for CourseFilter {
    fn from(course: Course) -> Self {
        CourseFilter::Only(course)
    }
}

impl FromStr for CourseFilter {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CourseFilter::All)
        } else {
            s.parse().map(CourseFilter::Only)
        }
    }
}

/// Non-negative amount of money, held in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Two-decimal amount prefixed with a currency symbol, e.g. `R89.99`
    pub fn with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = MenuError;

    /// Accepts `45`, `45.5` and `45.99`. Signs, exponents and more than
    /// two decimal places are rejected instead of being coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let malformed = || MenuError::MalformedPrice(raw.to_string());

        let (whole, frac) = raw.split_once('.').unwrap_or((raw, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(malformed());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) || frac.len() > 2 {
            return Err(malformed());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| malformed())?
        };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| malformed())? * 10,
            _ => frac.parse().map_err(|_| malformed())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac))
            .map(Price)
            .ok_or_else(malformed)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

/// A dish on the menu. The name is the natural key within a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub course: Course,
    pub price: Price,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        course: Course,
        price: Price,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            course,
            price,
            description: description.into(),
        }
    }

    /// Trim text fields and reject blank ones
    pub fn validated(self) -> Result<Self, MenuError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(MenuError::InvalidItem(ItemField::Name));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(MenuError::InvalidItem(ItemField::Description));
        }

        Ok(Self {
            name: name.to_string(),
            course: self.course,
            price: self.price,
            description: description.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(price("45"), Price::from_cents(4500));
        assert_eq!(price("45.5"), Price::from_cents(4550));
        assert_eq!(price(" 89.99 "), Price::from_cents(8999));
        assert_eq!(price(".5"), Price::from_cents(50));
        assert_eq!(price("0"), Price::ZERO);
    }

    #[test]
    fn test_malformed_prices_are_rejected() {
        for bad in ["", ".", "abc", "-5", "+5", "1e3", "12.345", "1,50", "NaN"] {
            assert!(
                matches!(bad.parse::<Price>(), Err(MenuError::MalformedPrice(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_price_display_always_two_decimals() {
        assert_eq!(Price::from_cents(4500).to_string(), "45.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::from_cents(123456789).with_symbol("R"), "R1234567.89");
    }

    #[test]
    fn test_price_arithmetic() {
        let total: Price = [price("89.99") * 2, price("45.99")].into_iter().sum();
        assert_eq!(total.to_string(), "225.97");
    }

    #[test]
    fn test_course_parsing() {
        assert_eq!("Main Meal".parse::<Course>().unwrap(), Course::MainMeal);
        assert_eq!("mainmeal".parse::<Course>().unwrap(), Course::MainMeal);
        assert_eq!("DESSERTS".parse::<Course>().unwrap(), Course::Desserts);
        assert!("Soup".parse::<Course>().is_err());
        assert_eq!("All".parse::<CourseFilter>().unwrap(), CourseFilter::All);
        assert_eq!(
            "Starters".parse::<CourseFilter>().unwrap(),
            CourseFilter::Only(Course::Starters)
        );
    }

    #[test]
    fn test_course_cycles() {
        for course in Course::ALL {
            assert_eq!(course.next().prev(), course);
        }
        assert_eq!(Course::Desserts.next(), Course::Starters);
    }

    #[test]
    fn test_validated_trims_and_rejects_blank() {
        let item = MenuItem::new("  Cheesecake ", Course::Desserts, price("65.99"), " Berry ")
            .validated()
            .unwrap();
        assert_eq!(item.name, "Cheesecake");
        assert_eq!(item.description, "Berry");

        let blank_name = MenuItem::new("   ", Course::Desserts, Price::ZERO, "x");
        assert_eq!(
            blank_name.validated(),
            Err(MenuError::InvalidItem(ItemField::Name))
        );
        let blank_desc = MenuItem::new("Cake", Course::Desserts, Price::ZERO, "\t");
        assert_eq!(
            blank_desc.validated(),
            Err(MenuError::InvalidItem(ItemField::Description))
        );
    }
}
