//! Built-in dishes shown when a course has nothing on the menu yet

use super::{Course, MenuItem, Price};

pub fn dishes_for(course: Course) -> Vec<MenuItem> {
    let table: &[(&str, u64, &str)] = match course {
        Course::Starters => &[
            ("Garlic Prawns", 8999, "Fresh prawns in garlic butter sauce"),
            ("Bruschetta", 4599, "Toasted bread with tomatoes and basil"),
            ("Caesar Salad", 6599, "Fresh lettuce with Caesar dressing and croutons"),
        ],
        Course::MainMeal => &[
            ("Grilled Salmon", 15999, "Atlantic salmon with lemon butter"),
            ("Beef Steak", 18999, "Prime beef steak with mushroom sauce"),
            ("Chicken Parmesan", 12999, "Breaded chicken with tomato sauce and cheese"),
        ],
        Course::Desserts => &[
            ("Chocolate Cake", 5999, "Rich chocolate cake with ganache"),
            ("Cheesecake", 6599, "New York style cheesecake with berry compote"),
            ("Ice Cream Sundae", 4999, "Vanilla ice cream with chocolate sauce and nuts"),
        ],
    };

    table
        .iter()
        .map(|(name, cents, description)| {
            MenuItem::new(*name, course, Price::from_cents(*cents), *description)
        })
        .collect()
}
