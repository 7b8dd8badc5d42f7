use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use websms_core::MessageStore;
use websms_domain::{Result, StoredMessage, WebSmsError};

/// Keeps sent messages in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    messages: RwLock<Vec<StoredMessage>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything stored so far, oldest first.
    pub fn messages(&self) -> Vec<StoredMessage> {
        self.messages.read().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn persist(&self, recipients: &[String], body: &str) -> Result<()> {
        self.messages.write().push(StoredMessage::new(recipients, body));
        Ok(())
    }
}

/// Appends every sent message as one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonLinesMessageStore {
    path: PathBuf,
}

impl JsonLinesMessageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MessageStore for JsonLinesMessageStore {
    async fn persist(&self, recipients: &[String], body: &str) -> Result<()> {
        let record = StoredMessage::new(recipients, body);
        let mut line = serde_json::to_string(&record)
            .map_err(|e| WebSmsError::Internal(format!("failed to encode sent message: {e}")))?;
        line.push('\n');

        let io_error = |e: std::io::Error| {
            WebSmsError::Internal(format!("failed to append to {}: {e}", self.path.display()))
        };
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(io_error)?;
        file.write_all(line.as_bytes()).await.map_err(io_error)?;
        file.flush().await.map_err(io_error)?;

        debug!(id = %record.id, path = %self.path.display(), "sent message recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn recipients() -> Vec<String> {
        vec!["+4917011".to_string(), "x".to_string()]
    }

    #[tokio::test]
    async fn memory_store_keeps_recipients_as_given() {
        let store = InMemoryMessageStore::new();
        store.persist(&recipients(), "hello").await.expect("persist");

        let messages = store.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].recipients, recipients());
        assert_eq!(messages[0].body, "hello");
    }

    #[tokio::test]
    async fn json_lines_store_appends_one_record_per_line() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonLinesMessageStore::new(dir.path().join("sent.jsonl"));

        store.persist(&recipients(), "first").await.expect("persist");
        store.persist(&recipients(), "second").await.expect("persist");

        let contents = std::fs::read_to_string(store.path()).expect("read log");
        let bodies: Vec<String> = contents
            .lines()
            .map(|line| serde_json::from_str::<StoredMessage>(line).expect("record").body)
            .collect();
        assert_eq!(bodies, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn unwritable_path_is_an_internal_error() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonLinesMessageStore::new(dir.path().join("missing").join("sent.jsonl"));

        let err = store.persist(&recipients(), "hello").await.expect_err("no parent dir");
        assert!(matches!(err, WebSmsError::Internal(_)));
    }
}
