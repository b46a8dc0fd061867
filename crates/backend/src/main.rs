pub mod domain;
pub mod handlers;
pub mod shared;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::domain::a001_restaurant_menu::service::MenuStore;

// Форматирование чисел с разделителями триад
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    use axum::body::to_bytes;

    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} body read failed after {}ms: {}",
                method,
                uri.path(),
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    tracing::info!(
        "{} {} -> {} | {}ms | {} bytes | {}",
        method,
        uri.path(),
        parts.status.as_u16(),
        start.elapsed().as_millis(),
        format_number(bytes.len()),
        chrono::Local::now().format("%H:%M:%S")
    );

    Response::from_parts(parts, Body::from(bytes))
}

/// API routes plus the built frontend from `dist_dir`. Unknown paths get the
/// app's `index.html` so client-side routes like `/r1` load the app.
pub fn build_router(store: MenuStore, dist_dir: &Path) -> Router {
    let frontend =
        ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/menus/:file",
            get(handlers::a001_restaurant_menu::get_menu),
        )
        .with_state(store)
        .fallback_service(frontend)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let menus_dir = shared::config::get_menus_dir(&config);
    if !menus_dir.is_dir() {
        tracing::warn!(
            "Menus directory {} does not exist, every menu request will return 404",
            menus_dir.display()
        );
    }
    tracing::info!("Serving menus from {}", menus_dir.display());

    let app = build_router(MenuStore::new(menus_dir), Path::new("dist"));
    let addr = shared::config::get_bind_address(&config)?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
