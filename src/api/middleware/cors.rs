//! Cross-origin resource sharing for the browser front end.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

/// Creates a CORS layer for the configured origins.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight request instead of using a wildcard. The `*` origin cannot be
/// combined with credentials, so it is skipped with a warning, as are
/// origins that are not valid header values.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/client", get(list_clients_handler))
///     .layer(cors::layer(&["http://localhost:3000".to_string()]));
/// ```
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| {
            if origin.as_str() == "*" {
                tracing::warn!("Ignoring wildcard CORS origin; credentials are allowed");
                return false;
            }
            true
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
