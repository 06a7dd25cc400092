use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smart_coach::StructuredCoachResult;
use uuid::Uuid;

const SESSIONS_FILE: &str = "sessions.json";

/// One successful coaching call, as kept in history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingSession {
    pub id: Uuid,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub background: String,
    pub original_question: String,
    pub response: StructuredCoachResult,
}

impl CoachingSession {
    pub fn new(background: &str, question: &str, response: StructuredCoachResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            // Stored with millisecond precision; trim now so a saved session equals itself.
            timestamp: DateTime::from_timestamp_millis(Utc::now().timestamp_millis())
                .unwrap_or_else(Utc::now),
            background: background.to_owned(),
            original_question: question.to_owned(),
            response,
        }
    }
}

/// Persistence for session history. Sessions are kept newest first.
pub trait SessionStore {
    fn load(&self) -> Result<Vec<CoachingSession>>;

    fn save(&self, sessions: &[CoachingSession]) -> Result<()>;

    fn record(&self, session: CoachingSession) -> Result<()> {
        let mut sessions = self.load()?;
        sessions.insert(0, session);
        self.save(&sessions)
    }

    fn find(&self, id: Uuid) -> Result<Option<CoachingSession>> {
        Ok(self.load()?.into_iter().find(|s| s.id == id))
    }

    /// Returns false when no session has `id`.
    fn delete(&self, id: Uuid) -> Result<bool> {
        let mut sessions = self.load()?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Ok(false);
        }
        self.save(&sessions)?;
        Ok(true)
    }

    fn clear(&self) -> Result<()> {
        self.save(&[])
    }
}

/// History stored as one pretty printed JSON array.
#[derive(Clone, Debug)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `sessions.json` in the platform data directory.
    pub fn default_location() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "smart_coach")
            .context("could not determine a home directory for session history")?;
        Ok(Self::new(dirs.data_dir().join(SESSIONS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> Result<Vec<CoachingSession>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&data)
            .with_context(|| format!("session history at {} is corrupt", self.path.display()))
    }

    fn save(&self, sessions: &[CoachingSession]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(sessions)?;
        std::fs::write(&self.path, data)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        tracing::debug!(count = sessions.len(), path = %self.path.display(), "saved sessions");
        Ok(())
    }
}
