//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing menu document URLs.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Path of the menu document for a restaurant, relative to the API base
pub fn menu_path(restaurant_id: &str) -> String {
    format!("/menus/{}.json", urlencoding::encode(restaurant_id))
}

/// Full URL of the menu document for a restaurant
pub fn menu_url(restaurant_id: &str) -> String {
    format!("{}{}", api_base(), menu_path(restaurant_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_path_encodes_id() {
        assert_eq!(menu_path("r1"), "/menus/r1.json");
        assert_eq!(menu_path("a b/c"), "/menus/a%20b%2Fc.json");
    }
}
