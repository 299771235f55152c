pub mod email;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use self::email::SubscriberEmail;

/// A signup that has passed validation but has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub email: SubscriberEmail,
}

/// A stored subscriber. The id and timestamp are assigned by the store.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: SubscriberEmail,
    pub subscribed_at: DateTime<Utc>,
}
