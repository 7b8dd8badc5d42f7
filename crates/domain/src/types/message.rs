//! Outgoing message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MIN_RECIPIENT_LEN, PARAM_BODY, PARAM_RECIPIENTS, RECIPIENT_SEPARATORS};

/// A text body addressed to one or more recipients.
///
/// Recipients are kept exactly as the caller supplied them. Filtering of
/// unusable entries happens at send time through [`usable_recipients`].
///
/// [`usable_recipients`]: MessageRequest::usable_recipients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    recipients: Vec<String>,
    body: String,
}

impl MessageRequest {
    pub fn new<I, S>(recipients: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { recipients: recipients.into_iter().map(Into::into).collect(), body: body.into() }
    }

    /// Build a request from a dispatch parameter list.
    ///
    /// The first parameter is the recipient list separated by `,` or `;`, the
    /// second is the body. Missing parameters are treated as empty.
    pub fn from_params(params: &[String]) -> Self {
        let recipients = params
            .get(PARAM_RECIPIENTS)
            .map(|raw| {
                raw.split(RECIPIENT_SEPARATORS).map(|part| part.trim().to_string()).collect()
            })
            .unwrap_or_default();
        let body = params.get(PARAM_BODY).cloned().unwrap_or_default();

        Self { recipients, body }
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Recipients long enough to be dialable.
    ///
    /// Length is counted in Unicode characters (`char`s), not bytes or UTF-16
    /// units, so a single astral-plane character counts as one.
    pub fn usable_recipients(&self) -> impl Iterator<Item = &str> {
        self.recipients
            .iter()
            .map(String::as_str)
            .filter(|recipient| recipient.chars().count() > MIN_RECIPIENT_LEN)
    }

    pub fn has_usable_recipients(&self) -> bool {
        self.usable_recipients().next().is_some()
    }
}

/// Result of a successful send call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendOutcome {
    /// The gateway accepted the batch.
    Sent,
    /// Every recipient was filtered out, so nothing went over the wire.
    NothingToSend,
}

/// A sent message as handed to the message store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: Uuid,
    pub recipients: Vec<String>,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl StoredMessage {
    pub fn new(recipients: &[String], body: &str) -> Self {
        Self {
            id: Uuid::now_v7(),
            recipients: recipients.to_vec(),
            body: body.to_string(),
            sent_at: Utc::now(),
        }
    }
}
