use contracts::domain::a001_restaurant_menu::filter_state::tag_label;
use contracts::domain::a001_restaurant_menu::Dish;
use leptos::prelude::*;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::badge::{tag_variant, Badge};
use crate::shared::list_utils::highlight_matches;
use crate::shared::number_format::{format_price, format_rating};

#[component]
pub fn DishCard(
    dish: Dish,
    /// Position within the category grid
    index: usize,
    /// Current search text, matches in the name are highlighted
    #[prop(into)]
    search: String,
) -> impl IntoView {
    let Dish {
        name,
        image,
        price,
        description,
        rating,
        tags,
    } = dish;

    view! {
        <CardAnimated index=index>
            <div class="dish-card">
                <img class="dish-card__image" src=image alt=name.clone() loading="lazy" />
                <h3 class="dish-card__name">{highlight_matches(&name, &search)}</h3>
                <p class="dish-card__description">{description}</p>
                <div class="dish-card__meta">
                    <span class="dish-card__price">{format_price(price)}</span>
                    <span class="dish-card__rating">{format_rating(rating)}</span>
                </div>
                <div class="dish-card__tags">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            let variant = tag_variant(&tag).to_string();
                            view! { <Badge variant=variant>{tag_label(&tag)}</Badge> }
                        })
                        .collect_view()}
                </div>
            </div>
        </CardAnimated>
    }
}
