use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Tags
// ============================================================================

pub const VEG: &str = "veg";
pub const NON_VEG: &str = "non-veg";
pub const SPICY: &str = "spicy";
pub const CHEF_SPECIAL: &str = "chef-special";
pub const BESTSELLER: &str = "bestseller";

/// Tags offered as filter chips on every menu, in display order
pub const STANDARD_TAGS: [&str; 5] = [VEG, NON_VEG, SPICY, CHEF_SPECIAL, BESTSELLER];

/// Mutually exclusive diet group: at most one member may be active
const DIET_GROUP: [&str; 2] = [VEG, NON_VEG];

/// Human readable label for a tag
pub fn tag_label(tag: &str) -> String {
    match tag {
        VEG => "Veg".to_string(),
        NON_VEG => "Non-Veg".to_string(),
        SPICY => "Spicy".to_string(),
        CHEF_SPECIAL => "Chef Special".to_string(),
        BESTSELLER => "Bestseller".to_string(),
        other => other
            .split(['-', '_', ' '])
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

// ============================================================================
// Sort mode
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "price-low")]
    PriceAsc,
    #[serde(rename = "price-high")]
    PriceDesc,
    #[serde(rename = "rating-high")]
    RatingDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::None,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::PriceAsc => "price-low",
            SortMode::PriceDesc => "price-high",
            SortMode::RatingDesc => "rating-high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::None => "None",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::RatingDesc => "Rating: High to Low",
        }
    }
}

// ============================================================================
// Filter state
// ============================================================================

/// Текущий выбор фильтров, поиска и сортировки для страницы меню
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub active_tags: BTreeSet<String>,
    pub search_text: String,
    pub sort: SortMode,
}

/// User intent that changes a [`FilterState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterEvent {
    ToggleTag(String),
    SetSearch(String),
    SetSort(SortMode),
    Reset,
}

impl FilterState {
    /// Flip a tag. Activating `veg` or `non-veg` deactivates the other one.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.active_tags.remove(tag) {
            return;
        }
        if DIET_GROUP.contains(&tag) {
            for member in DIET_GROUP {
                self.active_tags.remove(member);
            }
        }
        self.active_tags.insert(tag.to_string());
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Selecting the current mode again turns sorting off
    pub fn set_sort(&mut self, mode: SortMode) {
        self.sort = if self.sort == mode { SortMode::None } else { mode };
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    /// Number of active constraints, for the filter badge
    pub fn active_filter_count(&self) -> usize {
        let search = usize::from(!self.search_text.trim().is_empty());
        let sort = usize::from(self.sort != SortMode::None);
        self.active_tags.len() + search + sort
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    pub fn apply(mut self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::ToggleTag(tag) => self.toggle_tag(&tag),
            FilterEvent::SetSearch(text) => self.set_search_text(text),
            FilterEvent::SetSort(mode) => self.set_sort(mode),
            FilterEvent::Reset => self.reset(),
        }
        self
    }
}
