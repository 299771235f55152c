//! State machine behind the landing page's signup form.
//!
//! The form owns four pieces of state (email text, loading flag, error flag and
//! status message). [`SignupForm::submit`] validates the email, calls the
//! [`SubscriberStore`] at most once and always leaves the loading flag cleared.
//! Observers can follow every transition through [`SignupForm::watch`].

use tokio::sync::watch;

use crate::{
    domain::subscriber::{email::SubscriberEmail, NewSubscriber, Subscriber},
    store::{StoreError, SubscriberStore},
};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address 📧";
pub const WELCOME_MESSAGE: &str = "Welcome aboard! 🎉 We'll keep you in the loop!";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub is_loading: bool,
    pub is_error: bool,
    pub message: Option<String>,
}

/// How a call to [`SignupForm::submit`] ended.
#[derive(Debug)]
pub enum Submission {
    Subscribed(Subscriber),
    /// The email did not pass validation; the store was not called.
    Invalid(String),
    Failed(StoreError),
    /// Another submission of the same form is still in flight.
    Busy,
}

pub struct SignupForm {
    state: watch::Sender<FormState>,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self { state }
    }

    pub fn with_email(email: impl Into<String>) -> Self {
        let form = Self::new();
        form.set_email(email);
        form
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.state.send_modify(|state| state.email = email);
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    #[tracing::instrument(
        name = "Submitting signup form",
        skip(self, store),
        fields(email = %self.state.borrow().email)
    )]
    pub async fn submit(&self, store: &dyn SubscriberStore) -> Submission {
        // Check-and-set under the channel lock, so two racing submits cannot both start.
        let started = self.state.send_if_modified(|state| {
            if state.is_loading {
                return false;
            }
            state.is_loading = true;
            state.is_error = false;
            true
        });
        if !started {
            tracing::warn!("a submission is already in flight");
            return Submission::Busy;
        }
        let _loading = LoadingGuard(&self.state);

        let email = self.state.borrow().email.clone();
        let new_subscriber = match SubscriberEmail::parse(email) {
            Ok(email) => NewSubscriber { email },
            Err(e) => {
                tracing::info!(detail = e.as_str(), "rejected an invalid email");
                self.finish(true, INVALID_EMAIL_MESSAGE);
                return Submission::Invalid(e);
            }
        };

        match store.create_subscriber(&new_subscriber).await {
            Ok(subscriber) => {
                tracing::info!(subscriber_id = %subscriber.id, "new subscriber stored");
                self.finish(false, WELCOME_MESSAGE);
                Submission::Subscribed(subscriber)
            }
            Err(e) => {
                tracing::error!(detail = ?e, "failed to store the new subscriber");
                self.finish(true, FAILURE_MESSAGE);
                Submission::Failed(e)
            }
        }
    }

    fn finish(&self, is_error: bool, message: &str) {
        self.state.send_modify(|state| {
            state.is_error = is_error;
            state.message = Some(message.to_owned());
        });
    }
}

/// Clears the loading flag when dropped, including when the submission future is cancelled.
struct LoadingGuard<'a>(&'a watch::Sender<FormState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|state| state.is_loading = false);
    }
}
