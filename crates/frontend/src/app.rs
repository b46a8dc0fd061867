use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppRoutes />
        <footer class="app-footer">"Prices include taxes. Ask staff about allergens."</footer>
    }
}
