//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

use filegate_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// The method and header lists are fixed by the API contract; only the
/// origin allow-list and the credentials flag come from config. A `"*"`
/// origin entry switches to a wildcard layer with credentials disabled,
/// since that combination is rejected by browsers.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);

        if config.allow_credentials {
            layer = layer.allow_credentials(true);
        }
    }

    layer
}
