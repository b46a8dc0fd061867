use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_restaurant_menu::Menu;
use serde_json::json;

use crate::domain::a001_restaurant_menu::service::{MenuStore, MenuStoreError};

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<MenuStoreError> for ApiError {
    fn from(e: MenuStoreError) -> Self {
        let status = match &e {
            MenuStoreError::InvalidId(_) => StatusCode::BAD_REQUEST,
            MenuStoreError::NotFound(_) => StatusCode::NOT_FOUND,
            MenuStoreError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            MenuStoreError::Document(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        if status.is_server_error() || status == StatusCode::UNPROCESSABLE_ENTITY {
            tracing::error!("Menu request failed: {}", e);
        }
        Self {
            status,
            message: e.to_string(),
        }
    }
}

/// GET /menus/:file, where file is `{restaurant_id}.json`
pub async fn get_menu(
    State(store): State<MenuStore>,
    Path(file): Path<String>,
) -> Result<Json<Menu>, ApiError> {
    let restaurant_id = file.strip_suffix(".json").ok_or_else(|| ApiError {
        status: StatusCode::NOT_FOUND,
        message: format!("unknown resource '{file}'"),
    })?;

    let menu = store.load(restaurant_id).await?;
    Ok(Json(menu))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(name: &str, files: &[(&str, &str)]) -> MenuStore {
        let dir = std::env::temp_dir().join(format!(
            "menu-handler-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        for (file, body) in files {
            std::fs::write(dir.join(file), body).unwrap();
        }
        MenuStore::new(dir)
    }

    async fn call(store: MenuStore, file: &str) -> Result<Json<Menu>, ApiError> {
        get_menu(State(store), Path(file.to_string())).await
    }

    #[tokio::test]
    async fn test_serves_valid_menu() {
        let store = store_with(
            "ok",
            &[(
                "r1.json",
                r#"{"name":"R1","location":"L","image":"","categories":[]}"#,
            )],
        );
        let Json(menu) = call(store, "r1.json").await.unwrap();
        assert_eq!(menu.name, "R1");
    }

    #[tokio::test]
    async fn test_requires_json_suffix() {
        let store = store_with("suffix", &[]);
        let err = call(store, "r1").await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_status_codes() {
        let store = store_with(
            "status",
            &[(
                "bad.json",
                r#"{"name":"Bad","location":"L","image":"","categories":[
                    {"name":"C","items":[{"name":"X","image":"","price":-3,"description":""}]}
                ]}"#,
            )],
        );

        let err = call(store.clone(), "missing.json").await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = call(store.clone(), "..%2F.json").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = call(store, "bad.json").await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message.contains("price"));
    }
}
