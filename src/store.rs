use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::subscriber::{email::SubscriberEmail, NewSubscriber, Subscriber};

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("a subscriber with this email already exists")]
    Duplicate,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Persists signups. One call writes one row.
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    async fn create_subscriber(
        &self,
        subscriber: &NewSubscriber,
    ) -> Result<Subscriber, StoreError>;
}

#[derive(Clone)]
pub struct PgSubscriberStore {
    db: PgPool,
}

impl PgSubscriberStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: Uuid,
    email: String,
    subscribed_at: DateTime<Utc>,
}

impl TryFrom<SubscriberRow> for Subscriber {
    type Error = anyhow::Error;

    fn try_from(row: SubscriberRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            email: SubscriberEmail::parse(row.email).map_err(anyhow::Error::msg)?,
            subscribed_at: row.subscribed_at,
        })
    }
}

#[async_trait]
impl SubscriberStore for PgSubscriberStore {
    #[tracing::instrument(
        name = "Inserting new subscriber into the database",
        skip(self, subscriber),
        fields(email = %subscriber.email)
    )]
    async fn create_subscriber(
        &self,
        subscriber: &NewSubscriber,
    ) -> Result<Subscriber, StoreError> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            r#"
            insert into subscribers (id, email, subscribed_at)
            values ($1, $2, $3)
            returning id, email, subscribed_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(subscriber.email.as_ref())
        .bind(Utc::now())
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            tracing::error!(detail = e.to_string(), "failed to save new subscriber");
            match e {
                sqlx::Error::Database(ref db_error) if db_error.is_unique_violation() => {
                    StoreError::Duplicate
                }
                e => StoreError::Unexpected(
                    anyhow::Error::new(e).context("Failed to insert subscriber."),
                ),
            }
        })?;

        let subscriber = Subscriber::try_from(row).context("The stored subscriber is invalid.")?;

        Ok(subscriber)
    }
}
