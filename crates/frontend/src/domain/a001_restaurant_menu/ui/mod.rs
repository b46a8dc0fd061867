pub mod category;
pub mod dish_card;
pub mod page;
pub mod toolbar;
