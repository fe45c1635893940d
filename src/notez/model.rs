use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

pub type NoteId = u64;

/// A titled text record.
///
/// Identity is the `id` alone: two notes with the same id are equal and hash
/// the same regardless of title, content or timestamps. A note whose id is
/// `None` is transient and has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    id: Option<NoteId>,
    title: String,
    content: String,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
}

impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            created_on: now,
            updated_on: now,
        }
    }

    /// Rebuilds a note with every field given, e.g. when restoring a snapshot.
    pub fn from_parts(
        id: Option<NoteId>,
        title: impl Into<String>,
        content: impl Into<String>,
        created_on: DateTime<Utc>,
        updated_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            created_on,
            updated_on,
        }
    }

    pub fn id(&self) -> Option<NoteId> {
        self.id
    }

    pub fn is_transient(&self) -> bool {
        self.id.is_none()
    }

    /// Administrative override of the identifier. The store assigns ids itself;
    /// callers should not need this for stored notes.
    pub fn set_id(&mut self, id: Option<NoteId>) {
        self.id = id;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    pub fn set_created_on(&mut self, created_on: DateTime<Utc>) {
        self.created_on = created_on;
    }

    pub fn updated_on(&self) -> DateTime<Utc> {
        self.updated_on
    }

    pub fn set_updated_on(&mut self, updated_on: DateTime<Utc>) {
        self.updated_on = updated_on;
    }

    fn touch(&mut self) {
        // Never move backwards, even if the wall clock does.
        self.updated_on = Utc::now().max(self.updated_on);
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self.id {
            Some(id) => id.to_string(),
            None => "null".to_string(),
        };
        write!(
            f,
            "Note{{id={}, title='{}', content='{}', createdOn={}, updatedOn={}}}",
            id,
            self.title,
            self.content,
            self.created_on.format(TIMESTAMP_FORMAT),
            self.updated_on.format(TIMESTAMP_FORMAT)
        )
    }
}
