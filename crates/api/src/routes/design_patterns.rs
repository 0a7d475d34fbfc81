use axum::routing::{get, post};
use axum::Router;

use crate::handlers::design_patterns;
use crate::state::AppState;

/// Route group for the design pattern resource.
pub const GROUP: &str = "/designpatterns";

/// Mount the design pattern CRUD routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            GROUP,
            post(design_patterns::create_pattern).put(design_patterns::update_pattern),
        )
        .route(
            &format!("{GROUP}/{{id}}"),
            get(design_patterns::get_pattern).delete(design_patterns::delete_pattern),
        )
}
