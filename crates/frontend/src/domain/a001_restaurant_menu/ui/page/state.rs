use contracts::domain::a001_restaurant_menu::{Dispatch, FilterEvent, MenuController, MenuEvent};
use leptos::prelude::*;

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<MenuController> {
    RwSignal::new(MenuController::new())
}

/// Feed one event into the controller.
///
/// Returns `None` when the page has been unmounted in the meantime.
pub fn dispatch(state: RwSignal<MenuController>, event: MenuEvent) -> Option<Dispatch> {
    state.try_update(|controller| controller.dispatch(event))
}

pub fn dispatch_filter(state: RwSignal<MenuController>, event: FilterEvent) {
    dispatch(state, MenuEvent::Filter(event));
}
