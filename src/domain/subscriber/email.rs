use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the domain.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("The email pattern should compile.")
});

#[derive(Debug, Clone, PartialEq, Eq, Display, serde::Serialize)]
#[display(fmt = "{}", _0)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(value: String) -> Result<Self, String> {
        if value.is_empty() {
            return Err("email is empty".into());
        }

        if !EMAIL_SHAPE.is_match(&value) {
            return Err(format!("{} is not a valid email", value));
        }

        Ok(Self(value))
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
