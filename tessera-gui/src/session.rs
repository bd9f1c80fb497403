use iced::{futures::stream, Subscription};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::dir::TesseraDirectory;

pub const SESSION_FILE_NAME: &str = "session.json";

/// A read-only snapshot of the authentication state. The GUI consumes it but
/// never writes it back: the session file is owned by whoever signed the user
/// in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Session {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn from_file(datadir: &TesseraDirectory) -> Result<Self, SessionError> {
        let path = datadir.path().join(SESSION_FILE_NAME);
        std::fs::read(&path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SessionError::NotFound,
                _ => SessionError::ReadingFile(format!("Reading session file: {}", e)),
            })
            .and_then(|file_content| {
                serde_json::from_slice::<Session>(&file_content).map_err(|e| {
                    SessionError::ReadingFile(format!("Parsing session file: {}", e))
                })
            })
    }
}

/// Reads the persisted session, treating a missing or unreadable file as an
/// anonymous session.
pub async fn load(datadir: TesseraDirectory) -> Session {
    match Session::from_file(&datadir) {
        Ok(session) => session,
        Err(SessionError::NotFound) => Session::default(),
        Err(e) => {
            tracing::warn!("{}", e);
            Session::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Session file not found"),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

/// Holds the current [`Session`] and notifies observers of every change.
pub struct Store {
    sender: watch::Sender<Session>,
}

impl Store {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Session::default());
        Self { sender }
    }

    pub fn snapshot(&self) -> Session {
        self.sender.borrow().clone()
    }

    pub fn update(&self, session: Session) {
        self.sender.send_replace(session);
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.sender.subscribe()
    }

    /// A [`Subscription`] emitting a fresh snapshot after every change to the
    /// store.
    pub fn subscription(&self) -> Subscription<Session> {
        let receiver = self.subscribe();
        Subscription::run_with_id(
            "session-store",
            stream::unfold(receiver, |mut receiver| async move {
                receiver.changed().await.ok()?;
                let session = receiver.borrow_and_update().clone();
                Some((session, receiver))
            }),
        )
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn session_file_is_read_from_the_datadir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE_NAME), r#"{"userId":"42"}"#).unwrap();

        let session = Session::from_file(&TesseraDirectory::new(dir.path().to_path_buf())).unwrap();
        assert_eq!(session.user_id.as_deref(), Some("42"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn session_file_without_user_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE_NAME), r#"{"userId":null}"#).unwrap();

        let session = Session::from_file(&TesseraDirectory::new(dir.path().to_path_buf())).unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn missing_session_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Session::from_file(&TesseraDirectory::new(dir.path().to_path_buf())),
            Err(SessionError::NotFound)
        );
    }

    #[test]
    fn corrupt_session_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE_NAME), "not json").unwrap();

        assert!(matches!(
            Session::from_file(&TesseraDirectory::new(dir.path().to_path_buf())),
            Err(SessionError::ReadingFile(_))
        ));
    }

    #[tokio::test]
    async fn load_falls_back_to_anonymous() {
        let missing = TesseraDirectory::new(PathBuf::from("/nonexistent"));
        assert!(!load(missing).await.is_authenticated());

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE_NAME), "{garbage").unwrap();
        let corrupt = TesseraDirectory::new(dir.path().to_path_buf());
        assert!(!load(corrupt).await.is_authenticated());
    }

    #[test]
    fn store_snapshots_and_notifies_observers() {
        let store = Store::new();
        assert!(!store.snapshot().is_authenticated());

        let receiver = store.subscribe();
        store.update(Session {
            user_id: Some("42".to_string()),
        });
        assert_eq!(store.snapshot().user_id.as_deref(), Some("42"));
        assert!(receiver.has_changed().unwrap());
    }
}
