use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};

use super::schema::{Feature, SignUpFormData, FEATURES};
use crate::{
    app::AppState,
    signup::{FormState, SignupForm, Submission},
};

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    form: FormState,
    features: &'static [Feature],
}

impl HomeTemplate {
    fn new(form: FormState) -> Self {
        Self {
            form,
            features: FEATURES,
        }
    }
}

#[tracing::instrument(name = "Home page")]
pub async fn home_page() -> impl IntoResponse {
    HomeTemplate::new(FormState::default())
}

#[tracing::instrument(
    name = "Sign up form",
    skip(state, body),
    fields(email = tracing::field::Empty)
)]
pub async fn sign_up(
    State(state): State<AppState>,
    body: Result<Form<SignUpFormData>, FormRejection>,
) -> impl IntoResponse {
    // An unreadable body is treated like an empty email field.
    let email = match body {
        Ok(Form(body)) => body.email,
        Err(rejection) => {
            tracing::warn!(detail = %rejection, "failed to read the signup form");
            String::new()
        }
    };
    tracing::Span::current().record("email", &tracing::field::display(&email));

    let form = SignupForm::with_email(email);

    let status = match form.submit(state.store.as_ref()).await {
        Submission::Subscribed(_) => StatusCode::OK,
        Submission::Invalid(_) => StatusCode::BAD_REQUEST,
        Submission::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Submission::Busy => StatusCode::CONFLICT,
    };

    (status, HomeTemplate::new(form.state()))
}
