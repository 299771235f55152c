use axum::Router;

use super::AppState;

mod health;
mod subscriber;

pub fn router() -> Router<AppState> {
    health::router().merge(subscriber::router())
}
