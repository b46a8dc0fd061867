pub mod state;

use self::state::{create_state, dispatch};
use contracts::domain::a001_restaurant_menu::{Dispatch, MenuController, MenuEvent, MenuLoadState};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use std::collections::HashSet;

use super::category::CategorySection;
use super::toolbar::MenuToolbar;
use crate::domain::a001_restaurant_menu::api::fetch_menu;
use crate::shared::icons::icon;

/// Coarse load phase, so the page body is rebuilt only when it changes
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Loading,
    Failed(String),
    Loaded,
}

fn phase_of(controller: &MenuController) -> Phase {
    match &controller.load_state {
        MenuLoadState::Idle | MenuLoadState::Loading => Phase::Loading,
        MenuLoadState::Failed(e) => Phase::Failed(e.to_string()),
        MenuLoadState::Loaded(_) => Phase::Loaded,
    }
}

#[component]
pub fn RestaurantMenuPage() -> impl IntoView {
    let params = use_params_map();
    let state = create_state();
    let restaurant_id = Memo::new(move |_| params.read().get("restaurant_id"));

    // Every new restaurant id starts a fetch; results for an id that is no
    // longer current are dropped by the controller
    Effect::new(move |_| {
        let Some(id) = restaurant_id.get() else {
            return;
        };
        if dispatch(state, MenuEvent::IdentifierChanged(id.clone())) != Some(Dispatch::Applied) {
            return;
        }

        log::info!("Loading menu '{}'", id);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_menu(&id).await;
            if let Err(e) = &result {
                log::error!("Failed to load menu '{}': {}", id, e);
            }
            match dispatch(
                state,
                MenuEvent::MenuResolved {
                    restaurant_id: id.clone(),
                    result,
                },
            ) {
                Some(Dispatch::DiscardedStale) => {
                    log::debug!("Discarded stale menu result for '{}'", id)
                }
                None => log::debug!("Menu page gone before '{}' resolved", id),
                _ => {}
            }
        });
    });

    let phase = Memo::new(move |_| state.with(phase_of));

    view! {
        <div class="menu-page">
            {move || match phase.get() {
                Phase::Loading => view! {
                    <p class="menu-page__status">"Loading menu..."</p>
                }
                .into_any(),
                Phase::Failed(message) => view! {
                    <div class="error">
                        <strong>"Could not load this menu"</strong>
                        <p>{message}</p>
                    </div>
                }
                .into_any(),
                Phase::Loaded => view! { <LoadedMenu state=state /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn LoadedMenu(state: RwSignal<MenuController>) -> impl IntoView {
    let header = Memo::new(move |_| {
        state.with(|c| {
            c.menu()
                .map(|m| (m.name.clone(), m.location.clone(), m.image.clone()))
        })
    });
    let categories = Memo::new(move |_| state.with(|c| c.categories().unwrap_or_default()));
    let search = Memo::new(move |_| state.with(|c| c.filter.search_text.clone()));

    // Collapsed categories by name; everything starts expanded
    let collapsed = RwSignal::new(HashSet::<String>::new());

    view! {
        {move || {
            header
                .get()
                .map(|(name, location, image)| {
                    view! {
                        <header class="menu-header">
                            <img class="menu-header__image" src=image alt=name.clone() />
                            <h1 class="menu-header__name">{name}</h1>
                            <p class="menu-header__location">{icon("map-pin")} {location}</p>
                        </header>
                    }
                })
        }}

        <MenuToolbar state=state categories=categories />

        <div class="menu-categories">
            {move || {
                let search = search.get();
                categories
                    .get()
                    .into_iter()
                    .map(|category| {
                        let name_for_state = category.name.clone();
                        let name_for_toggle = category.name.clone();
                        view! {
                            <CategorySection
                                category=category
                                expanded=Signal::derive(move || {
                                    !collapsed.with(|c| c.contains(&name_for_state))
                                })
                                on_toggle=Callback::new(move |_| {
                                    collapsed.update(|c| {
                                        if !c.remove(&name_for_toggle) {
                                            c.insert(name_for_toggle.clone());
                                        }
                                    })
                                })
                                search=search.clone()
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
