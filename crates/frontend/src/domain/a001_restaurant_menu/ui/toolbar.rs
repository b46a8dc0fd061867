use contracts::domain::a001_restaurant_menu::filter_state::{tag_label, STANDARD_TAGS};
use contracts::domain::a001_restaurant_menu::pipeline::visible_count;
use contracts::domain::a001_restaurant_menu::{
    CategoryView, FilterEvent, Menu, MenuController, SortMode,
};
use leptos::prelude::*;

use super::page::state::dispatch_filter;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::list_utils::SearchInput;

/// Tags offered as chips: the standard set first, then any other tag the
/// menu carries, in sorted order
pub fn chip_tags(menu: Option<&Menu>) -> Vec<String> {
    let mut tags: Vec<String> = STANDARD_TAGS.iter().map(|t| t.to_string()).collect();
    if let Some(menu) = menu {
        for tag in menu.known_tags() {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

pub fn sort_options() -> Vec<(String, String)> {
    SortMode::ALL
        .iter()
        .map(|m| (m.as_str().to_string(), m.label().to_string()))
        .collect()
}

/// "shown of total" line for the filter panel header
pub fn summary_text(views: &[CategoryView]) -> String {
    let total: usize = views.iter().map(|v| v.total).sum();
    format!("{} of {} dishes", visible_count(views), total)
}

/// Sort dropdown; picking "None" switches sorting off
#[component]
fn SortSelect(
    #[prop(into)] sort: Signal<SortMode>,
    on_select: Callback<SortMode>,
) -> impl IntoView {
    view! {
        <label class="form__group">
            <span class="form__label">"Sort By"</span>
            <select
                class="form__select"
                prop:value=move || sort.get().as_str()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    match SortMode::parse(&value) {
                        Some(mode) => on_select.run(mode),
                        None => log::warn!("Unknown sort mode '{}'", value),
                    }
                }
            >
                {sort_options()
                    .into_iter()
                    .map(|(value, label)| {
                        let option_value = value.clone();
                        view! {
                            <option value=value selected=move || sort.get().as_str() == option_value>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Filter controls for a loaded menu. `categories` is the page's derived menu,
/// shared so the pipeline runs once per change.
#[component]
pub fn MenuToolbar(
    state: RwSignal<MenuController>,
    categories: Memo<Vec<CategoryView>>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(true);
    let filter = Memo::new(move |_| state.with(|c| c.filter.clone()));
    let tag_options = Memo::new(move |_| state.with(|c| chip_tags(c.menu())));

    let active_filters_count = Signal::derive(move || filter.with(|f| f.active_filter_count()));
    let summary = Signal::derive(move || categories.with(|v| summary_text(v)));

    let search_value = Signal::derive(move || filter.with(|f| f.search_text.clone()));
    let sort_value = Signal::derive(move || filter.with(|f| f.sort));

    let on_search = Callback::new(move |text: String| {
        dispatch_filter(state, FilterEvent::SetSearch(text));
    });

    let on_sort = Callback::new(move |mode: SortMode| {
        dispatch_filter(state, FilterEvent::SetSort(mode));
    });

    let active_chips = move || {
        let f = filter.get();
        let mut chips: Vec<AnyView> = Vec::new();

        for tag in f.active_tags.iter() {
            let tag_for_remove = tag.clone();
            chips.push(
                view! {
                    <FilterTag
                        label=tag_label(tag)
                        on_remove=Callback::new(move |_| {
                            dispatch_filter(state, FilterEvent::ToggleTag(tag_for_remove.clone()))
                        })
                    />
                }
                .into_any(),
            );
        }

        if !f.search_text.trim().is_empty() {
            chips.push(
                view! {
                    <FilterTag
                        label=format!("Search: {}", f.search_text.trim())
                        on_remove=Callback::new(move |_| {
                            dispatch_filter(state, FilterEvent::SetSearch(String::new()))
                        })
                    />
                }
                .into_any(),
            );
        }

        if f.sort != SortMode::None {
            let mode = f.sort;
            chips.push(
                view! {
                    <FilterTag
                        label=format!("Sort: {}", mode.label())
                        on_remove=Callback::new(move |_| {
                            // Re-selecting the active mode switches sorting off
                            dispatch_filter(state, FilterEvent::SetSort(mode))
                        })
                    />
                }
                .into_any(),
            );
        }

        chips
    };

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_filters_count
            summary=summary
        >
            <div class="menu-toolbar">
                <div class="menu-toolbar__chips">
                    {move || {
                        tag_options
                            .get()
                            .into_iter()
                            .map(|tag| {
                                let tag_for_class = tag.clone();
                                let tag_for_click = tag.clone();
                                view! {
                                    <button
                                        class="tag-chip"
                                        class:tag-chip--active=move || {
                                            filter.with(|f| f.is_tag_active(&tag_for_class))
                                        }
                                        on:click=move |_| {
                                            dispatch_filter(
                                                state,
                                                FilterEvent::ToggleTag(tag_for_click.clone()),
                                            )
                                        }
                                    >
                                        {tag_label(&tag)}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="menu-toolbar__controls">
                    <SearchInput value=search_value on_change=on_search />
                    <SortSelect sort=sort_value on_select=on_sort />
                    <button
                        class="button button--secondary"
                        disabled=move || filter.with(|f| f.is_default())
                        on:click=move |_| dispatch_filter(state, FilterEvent::Reset)
                    >
                        "Clear"
                    </button>
                </div>
                <div class="menu-toolbar__active">{active_chips}</div>
            </div>
        </FilterPanel>
    }
}
