use serde::{Deserialize, Serialize};

use super::aggregate::Menu;
use super::error::LoadError;
use super::filter_state::{FilterEvent, FilterState};
use super::pipeline::{derive_menu, CategoryView};

/// Where the menu for the current restaurant is in its lifecycle.
///
/// `Loading` and `Failed` are distinct from a loaded menu with no
/// categories and must be rendered differently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum MenuLoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Menu),
    Failed(LoadError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MenuEvent {
    IdentifierChanged(String),
    MenuResolved {
        restaurant_id: String,
        result: Result<Menu, LoadError>,
    },
    Filter(FilterEvent),
}

/// Outcome of a single [`MenuController::dispatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    Unchanged,
    /// A fetch result for an identifier that is no longer current
    DiscardedStale,
}

/// Owns the menu and filter selection of one restaurant page.
///
/// All changes go through [`dispatch`](Self::dispatch), one event at a time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuController {
    pub restaurant_id: Option<String>,
    pub load_state: MenuLoadState,
    pub filter: FilterState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, event: MenuEvent) -> Dispatch {
        match event {
            MenuEvent::IdentifierChanged(id) => {
                if self.restaurant_id.as_deref() == Some(id.as_str()) {
                    return Dispatch::Unchanged;
                }
                self.restaurant_id = Some(id);
                self.load_state = MenuLoadState::Loading;
                self.filter.reset();
                Dispatch::Applied
            }
            MenuEvent::MenuResolved {
                restaurant_id,
                result,
            } => {
                if self.restaurant_id.as_deref() != Some(restaurant_id.as_str()) {
                    return Dispatch::DiscardedStale;
                }
                self.load_state = match result {
                    Ok(menu) => MenuLoadState::Loaded(menu),
                    Err(e) => MenuLoadState::Failed(e),
                };
                Dispatch::Applied
            }
            MenuEvent::Filter(event) => {
                let next = std::mem::take(&mut self.filter).apply(event);
                self.filter = next;
                Dispatch::Applied
            }
        }
    }

    pub fn menu(&self) -> Option<&Menu> {
        match &self.load_state {
            MenuLoadState::Loaded(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, MenuLoadState::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.load_state {
            MenuLoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Derived per-category dishes, only when a menu is loaded
    pub fn categories(&self) -> Option<Vec<CategoryView>> {
        self.menu().map(|menu| derive_menu(menu, &self.filter))
    }
}
