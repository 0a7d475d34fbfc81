pub mod design_patterns;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /health                          service and store health
///
/// /designpatterns                  create (POST), update (PUT)
/// /designpatterns/{id}             get, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(design_patterns::router())
}
