use crate::domain::a001_restaurant_menu::ui::page::RestaurantMenuPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="menu-page">
            <p class="menu-page__status">"Restaurant not found"</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/:restaurant_id") view=RestaurantMenuPage />
                </Routes>
            </main>
        </Router>
    }
}
