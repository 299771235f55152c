use axum::{extract::State, http::StatusCode, Json};

use super::schema::CreateSubscriberRequestBody;
use crate::{
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::subscriber::{NewSubscriber, Subscriber},
};

#[tracing::instrument(
    name = "Creating a subscriber",
    skip(state, body),
    fields(email = %body.email)
)]
pub async fn create_subscriber(
    State(state): State<AppState>,
    Json(body): Json<CreateSubscriberRequestBody>,
) -> AppResult<(StatusCode, Json<Subscriber>)> {
    let new_subscriber =
        NewSubscriber::try_from(body).map_err(|message| AppError::ValidationError {
            field: "email",
            message,
        })?;

    let subscriber = state.store.create_subscriber(&new_subscriber).await?;

    Ok((StatusCode::CREATED, Json(subscriber)))
}
