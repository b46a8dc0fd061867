use contracts::domain::a001_restaurant_menu::{LoadError, Menu};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Ошибки чтения документа меню
#[derive(Debug, Error)]
pub enum MenuStoreError {
    #[error("invalid restaurant id: {0:?}")]
    InvalidId(String),

    #[error("menu '{0}' not found")]
    NotFound(String),

    #[error("failed to read menu '{id}': {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Document(#[from] LoadError),
}

/// Read-only access to the per-restaurant menu documents in a directory
#[derive(Debug, Clone)]
pub struct MenuStore {
    dir: PathBuf,
}

/// Restaurant ids become file names, so only a safe alphabet is accepted
pub fn is_valid_restaurant_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 128
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl MenuStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn document_path(&self, restaurant_id: &str) -> Result<PathBuf, MenuStoreError> {
        if !is_valid_restaurant_id(restaurant_id) {
            return Err(MenuStoreError::InvalidId(restaurant_id.to_string()));
        }
        Ok(self.dir.join(format!("{restaurant_id}.json")))
    }

    /// Read and validate the menu of one restaurant
    pub async fn load(&self, restaurant_id: &str) -> Result<Menu, MenuStoreError> {
        let path = self.document_path(restaurant_id)?;

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MenuStoreError::NotFound(restaurant_id.to_string()))
            }
            Err(e) => {
                return Err(MenuStoreError::Io {
                    id: restaurant_id.to_string(),
                    source: e,
                })
            }
        };

        let menu = Menu::from_json(&text)?;
        tracing::debug!(
            "Loaded menu '{}' ({} categories, {} dishes)",
            restaurant_id,
            menu.categories.len(),
            menu.dish_count()
        );
        Ok(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "name": "Curry House",
        "location": "High Street 5",
        "image": "/img/curry.jpg",
        "categories": [
            { "name": "Mains", "items": [
                { "name": "Paneer Tikka", "image": "/img/pt.jpg", "price": 12,
                  "description": "Grilled paneer", "rating": 4.4, "tags": ["veg", "spicy"] }
            ] }
        ]
    }"#;

    fn temp_store(name: &str) -> MenuStore {
        let dir = std::env::temp_dir().join(format!(
            "menu-store-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        MenuStore::new(dir)
    }

    #[test]
    fn test_restaurant_id_alphabet() {
        assert!(is_valid_restaurant_id("r1"));
        assert!(is_valid_restaurant_id("curry_house-2"));
        assert!(!is_valid_restaurant_id(""));
        assert!(!is_valid_restaurant_id("../secrets"));
        assert!(!is_valid_restaurant_id("a/b"));
        assert!(!is_valid_restaurant_id("r1.json"));
    }

    #[test]
    fn test_document_path_rejects_traversal() {
        let store = MenuStore::new("/srv/menus");
        assert_eq!(
            store.document_path("r1").unwrap(),
            PathBuf::from("/srv/menus/r1.json")
        );
        assert!(matches!(
            store.document_path(".."),
            Err(MenuStoreError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_load_valid_menu() {
        let store = temp_store("valid");
        std::fs::write(store.dir().join("curry.json"), VALID).unwrap();

        let menu = store.load("curry").await.unwrap();
        assert_eq!(menu.name, "Curry House");
        assert_eq!(menu.dish_count(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_menu() {
        let store = temp_store("missing");
        let err = store.load("nobody").await.unwrap_err();
        assert!(matches!(err, MenuStoreError::NotFound(ref id) if id == "nobody"));
    }

    #[tokio::test]
    async fn test_load_malformed_menu() {
        let store = temp_store("malformed");
        std::fs::write(store.dir().join("broken.json"), "{ \"name\": ").unwrap();

        let err = store.load("broken").await.unwrap_err();
        assert!(matches!(
            err,
            MenuStoreError::Document(LoadError::Malformed(_))
        ));
    }
}
