use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use super::error::LoadError;

// ============================================================================
// Dish
// ============================================================================

/// Блюдо в категории меню
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub image: String,
    pub price: f64,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Dish {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("dish name must not be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!(
                "dish '{}': price must be a non-negative number, got {}",
                self.name, self.price
            ));
        }
        if let Some(rating) = self.rating {
            if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
                return Err(format!(
                    "dish '{}': rating must be within 0..=5, got {}",
                    self.name, rating
                ));
            }
        }
        Ok(())
    }

    /// Drops repeated tags, keeping the first occurrence
    fn dedup_tags(&mut self) {
        let mut seen = HashSet::new();
        self.tags.retain(|t| seen.insert(t.clone()));
    }
}

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<Dish>,
}

impl Category {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("category name must not be empty".into());
        }
        let mut names = HashSet::new();
        for dish in &self.items {
            dish.validate()?;
            if !names.insert(dish.name.as_str()) {
                return Err(format!(
                    "category '{}': duplicate dish '{}'",
                    self.name, dish.name
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Menu
// ============================================================================

/// Меню одного ресторана. Загружается целиком и не изменяется после загрузки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub name: String,
    pub location: String,
    pub image: String,
    pub categories: Vec<Category>,
}

impl Menu {
    /// Parse and validate a per-restaurant menu document.
    ///
    /// Shape mismatches become [`LoadError::Malformed`], semantic violations
    /// (negative price, duplicate names, rating out of range) become
    /// [`LoadError::Invalid`].
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let mut menu: Menu = serde_json::from_str(text)?;
        menu.validate().map_err(LoadError::Invalid)?;
        for dish in menu.categories.iter_mut().flat_map(|c| c.items.iter_mut()) {
            dish.dedup_tags();
        }
        Ok(menu)
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("menu name must not be empty".into());
        }
        let mut names = HashSet::new();
        for category in &self.categories {
            category.validate()?;
            if !names.insert(category.name.as_str()) {
                return Err(format!("duplicate category '{}'", category.name));
            }
        }
        Ok(())
    }

    pub fn dish_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Every tag carried by at least one dish, sorted
    pub fn known_tags(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .flat_map(|d| d.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "Trattoria",
        "location": "Via Roma 1",
        "image": "/img/trattoria.jpg",
        "categories": [
            {
                "name": "Pizza",
                "items": [
                    { "name": "Margherita", "image": "/img/m.jpg", "price": 9.5,
                      "description": "Tomato, mozzarella", "rating": 4.6, "tags": ["veg", "bestseller", "veg"] },
                    { "name": "Diavola", "image": "/img/d.jpg", "price": 11,
                      "description": "Spicy salami", "tags": ["non-veg", "spicy"] }
                ]
            },
            { "name": "Desserts", "items": [] }
        ]
    }"#;

    #[test]
    fn test_parses_valid_document() {
        let menu = Menu::from_json(SAMPLE).unwrap();
        assert_eq!(menu.name, "Trattoria");
        assert_eq!(menu.categories.len(), 2);
        assert_eq!(menu.dish_count(), 2);

        let diavola = &menu.categories[0].items[1];
        assert_eq!(diavola.rating, None);
        assert_eq!(diavola.price, 11.0);
        assert!(diavola.has_tag("spicy"));
    }

    #[test]
    fn test_collapses_duplicate_tags() {
        let menu = Menu::from_json(SAMPLE).unwrap();
        assert_eq!(menu.categories[0].items[0].tags, vec!["veg", "bestseller"]);
    }

    #[test]
    fn test_known_tags_are_sorted_and_unique() {
        let menu = Menu::from_json(SAMPLE).unwrap();
        assert_eq!(
            menu.known_tags(),
            vec!["bestseller", "non-veg", "spicy", "veg"]
        );
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = Menu::from_json(r#"{ "name": "X", "location": "Y", "image": "" }"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            Menu::from_json("<html>404</html>"),
            Err(LoadError::Malformed(_))
        ));
    }

    #[test]
    fn test_negative_price_is_invalid() {
        let doc = SAMPLE.replace("\"price\": 11", "\"price\": -1");
        let err = Menu::from_json(&doc).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(ref m) if m.contains("Diavola")));
    }

    #[test]
    fn test_rating_out_of_range_is_invalid() {
        let doc = SAMPLE.replace("\"rating\": 4.6", "\"rating\": 7");
        assert!(matches!(Menu::from_json(&doc), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn test_duplicate_dish_is_invalid() {
        let doc = SAMPLE.replace("\"name\": \"Diavola\"", "\"name\": \"Margherita\"");
        let err = Menu::from_json(&doc).unwrap_err();
        assert_eq!(
            err,
            LoadError::Invalid("category 'Pizza': duplicate dish 'Margherita'".into())
        );
    }

    #[test]
    fn test_duplicate_category_is_invalid() {
        let doc = SAMPLE.replace("\"name\": \"Desserts\"", "\"name\": \"Pizza\"");
        assert_eq!(
            Menu::from_json(&doc).unwrap_err(),
            LoadError::Invalid("duplicate category 'Pizza'".into())
        );
    }
}
