use contracts::domain::a001_restaurant_menu::CategoryView;
use leptos::prelude::*;

use super::dish_card::DishCard;
use crate::shared::icons::icon;

/// Collapsible section with the derived dishes of one category
#[component]
pub fn CategorySection(
    category: CategoryView,
    #[prop(into)] expanded: Signal<bool>,
    on_toggle: Callback<()>,
    #[prop(into)] search: String,
) -> impl IntoView {
    let CategoryView { name, items, total } = category;
    let shown = items.len();

    let body = if items.is_empty() {
        view! {
            <p class="category__empty">"No dishes match the current filters"</p>
        }
        .into_any()
    } else {
        view! {
            <div class="category__grid">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, dish)| {
                        view! { <DishCard dish=dish index=index search=search.clone() /> }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="category">
            <button class="category__header" on:click=move |_| on_toggle.run(())>
                <span class="category__name">{name}</span>
                <span class="category__count">{format!("{} / {}", shown, total)}</span>
                <span class=move || {
                    if expanded.get() {
                        "category__chevron category__chevron--expanded"
                    } else {
                        "category__chevron"
                    }
                }>{icon("chevron")}</span>
            </button>
            <div class="category__panel" class:category__panel--collapsed=move || !expanded.get()>
                {body}
            </div>
        </section>
    }
}
