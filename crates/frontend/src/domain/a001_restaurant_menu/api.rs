use contracts::domain::a001_restaurant_menu::{LoadError, Menu};
use gloo_net::http::Request;

use crate::shared::api_utils::menu_url;

/// Map a non-success HTTP status to the corresponding load error
pub fn status_error(status: u16, restaurant_id: &str) -> Option<LoadError> {
    match status {
        200..=299 => None,
        404 => Some(LoadError::NotFound(restaurant_id.to_string())),
        _ => Some(LoadError::Unavailable(format!("HTTP error: {}", status))),
    }
}

/// Получить меню ресторана
pub async fn fetch_menu(restaurant_id: &str) -> Result<Menu, LoadError> {
    let url = menu_url(restaurant_id);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| LoadError::Unavailable(format!("Request failed: {}", e)))?;

    if let Some(err) = status_error(response.status(), restaurant_id) {
        return Err(err);
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::Unavailable(format!("Failed to read response: {}", e)))?;

    Menu::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        assert_eq!(status_error(200, "r1"), None);
        assert_eq!(
            status_error(404, "r1"),
            Some(LoadError::NotFound("r1".into()))
        );
        assert_eq!(
            status_error(503, "r1"),
            Some(LoadError::Unavailable("HTTP error: 503".into()))
        );
    }
}
