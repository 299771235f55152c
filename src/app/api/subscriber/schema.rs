use serde::Deserialize;

use crate::domain::subscriber::{email::SubscriberEmail, NewSubscriber};

#[derive(Deserialize)]
pub struct CreateSubscriberRequestBody {
    pub email: String,
}

impl TryFrom<CreateSubscriberRequestBody> for NewSubscriber {
    type Error = String;
    fn try_from(value: CreateSubscriberRequestBody) -> Result<Self, Self::Error> {
        let email = SubscriberEmail::try_from(value.email)?;
        Ok(Self { email })
    }
}
