//! Derivation of the displayed dishes from a category and the current filters.
//!
//! Order of steps is fixed: tag filter, then search, then sort. Sorting
//! operates on the already filtered subset and is always stable, so dishes
//! that compare equal keep their source order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::aggregate::{Dish, Menu};
use super::filter_state::{FilterState, SortMode};

/// Dishes of one category as they should be rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    pub name: String,
    pub items: Vec<Dish>,
    /// Number of dishes in the category before filtering
    pub total: usize,
}

/// Keep dishes carrying every active tag
pub fn filter_by_tags<'a, I>(items: I, state: &FilterState) -> Vec<&'a Dish>
where
    I: IntoIterator<Item = &'a Dish>,
{
    items
        .into_iter()
        .filter(|dish| state.active_tags.iter().all(|tag| dish.has_tag(tag)))
        .collect()
}

/// Keep dishes whose name contains the query, case-insensitive
pub fn filter_by_search<'a>(items: Vec<&'a Dish>, query: &str) -> Vec<&'a Dish> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|dish| dish.name.to_lowercase().contains(&query))
        .collect()
}

fn compare_rating_desc(a: &Dish, b: &Dish) -> Ordering {
    // Missing rating sorts below any present rating
    match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by the given mode; `SortMode::None` keeps the input order
pub fn sort_dishes(items: &mut [&Dish], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::RatingDesc => items.sort_by(|a, b| compare_rating_desc(a, b)),
    }
}

/// Full pipeline for one category's items
pub fn derive_items(items: &[Dish], state: &FilterState) -> Vec<Dish> {
    let tagged = filter_by_tags(items, state);
    let mut found = filter_by_search(tagged, &state.search_text);
    sort_dishes(&mut found, state.sort);
    found.into_iter().cloned().collect()
}

/// Apply the pipeline to every category of the menu, keeping category order
pub fn derive_menu(menu: &Menu, state: &FilterState) -> Vec<CategoryView> {
    menu.categories
        .iter()
        .map(|category| CategoryView {
            name: category.name.clone(),
            items: derive_items(&category.items, state),
            total: category.items.len(),
        })
        .collect()
}

pub fn visible_count(views: &[CategoryView]) -> usize {
    views.iter().map(|v| v.items.len()).sum()
}
