pub mod aggregate;
pub mod controller;
pub mod error;
pub mod filter_state;
pub mod pipeline;

pub use aggregate::{Category, Dish, Menu};
pub use controller::{Dispatch, MenuController, MenuEvent, MenuLoadState};
pub use error::LoadError;
pub use filter_state::{FilterEvent, FilterState, SortMode};
pub use pipeline::{derive_items, derive_menu, CategoryView};
