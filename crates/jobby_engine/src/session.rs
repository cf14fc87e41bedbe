use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jobby_core::Credential;
use jobby_logging::{jobby_info, jobby_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

/// Source of "now" for expiry checks.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to serialize session: {0}")]
    Serialize(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Holds the bearer token between runs.
pub trait SessionStore: Send {
    fn set(&mut self, credential: &Credential, expires_at: DateTime<Utc>)
        -> Result<(), SessionError>;

    /// Absent, expired and unreadable sessions all read as `None`.
    fn get(&self) -> Option<Credential>;

    fn clear(&mut self) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSession {
    jwt_token: String,
    expires_at: DateTime<Utc>,
}

/// Session kept in a RON file next to the app.
pub struct FileSessionStore {
    writer: AtomicFileWriter,
    clock: Clock,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self::with_clock(path, system_clock())
    }

    pub fn with_clock(path: PathBuf, clock: Clock) -> Self {
        Self {
            writer: AtomicFileWriter::new(path),
            clock,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn set(
        &mut self,
        credential: &Credential,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let session = PersistedSession {
            jwt_token: credential.token().to_string(),
            expires_at,
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&session, pretty)
            .map_err(|err| SessionError::Serialize(err.to_string()))?;
        self.writer.write(&content)?;
        jobby_info!(
            "Stored session {:?} until {}",
            credential,
            expires_at.to_rfc3339()
        );
        Ok(())
    }

    fn get(&self) -> Option<Credential> {
        let path = self.writer.target();
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                jobby_warn!("Failed to read session from {:?}: {}", path, err);
                return None;
            }
        };

        let session: PersistedSession = match ron::from_str(&content) {
            Ok(session) => session,
            Err(err) => {
                jobby_warn!("Failed to parse session from {:?}: {}", path, err);
                return None;
            }
        };

        if session.expires_at <= (self.clock)() {
            jobby_info!("Stored session expired at {}", session.expires_at.to_rfc3339());
            return None;
        }
        Some(Credential::new(session.jwt_token))
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.writer.remove()?;
        jobby_info!("Cleared stored session");
        Ok(())
    }
}

/// In-process store, used when nothing should touch the disk.
pub struct MemorySessionStore {
    session: Option<(Credential, DateTime<Utc>)>,
    clock: Clock,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            session: None,
            clock,
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn set(
        &mut self,
        credential: &Credential,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.session = Some((credential.clone(), expires_at));
        Ok(())
    }

    fn get(&self) -> Option<Credential> {
        let now = (self.clock)();
        self.session
            .as_ref()
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(credential, _)| credential.clone())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.session = None;
        Ok(())
    }
}
