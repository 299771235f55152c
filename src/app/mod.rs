use std::{io, net::SocketAddr, sync::Arc};

use axum::{http::Request, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::Settings,
    store::{PgSubscriberStore, SubscriberStore},
};

mod api;
mod error;
mod ui;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn SubscriberStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn SubscriberStore>) -> Self {
        Self { store }
    }
}

/// Every route of the service, with the request tracing layer applied.
pub fn app_router(state: AppState) -> Router {
    api::router()
        .merge(ui::router())
        .fallback(ui::not_found::not_found_page)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let id = uuid::Uuid::new_v4();
                tracing::info_span!(
                    "request",
                    method = ?request.method(),
                    uri = ?request.uri(),
                    %id,
                )
            }),
        )
}

pub struct App {
    listener: TcpListener,
}

impl App {
    pub async fn with(config: &Settings) -> Result<Self, io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await?;

        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, io::Error> {
        self.listener.local_addr()
    }

    pub async fn serve(self, db: PgPool) -> Result<(), io::Error> {
        self.serve_with_store(Arc::new(PgSubscriberStore::new(db)))
            .await
    }

    pub async fn serve_with_store(self, store: Arc<dyn SubscriberStore>) -> Result<(), io::Error> {
        let app = app_router(AppState::new(store));

        axum::serve(self.listener, app.into_make_service()).await
    }
}
