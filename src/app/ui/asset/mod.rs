use axum::Router;
use tower_http::services::ServeDir;

use crate::app::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest_service("/assets", ServeDir::new("assets"))
}
