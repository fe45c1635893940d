use super::{DataStore, InMemoryStore};
use crate::error::{NotezError, Result};
use crate::model::{Note, NoteId};
use tracing::debug;

const FIRST_ID: NoteId = 1;

/// Registry of notes keyed by a generated id.
///
/// Ids start at 1, strictly increase, and are never reused after a delete.
/// Only [`NoteStore::clear`] resets the counter.
#[derive(Debug)]
pub struct NoteStore<S: DataStore = InMemoryStore> {
    backend: S,
    next_id: NoteId,
}

impl NoteStore<InMemoryStore> {
    pub fn new() -> Self {
        Self::with_backend(InMemoryStore::new())
    }
}

impl Default for NoteStore<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DataStore> NoteStore<S> {
    /// Wraps a backend. When it already holds notes, ids continue after the
    /// highest key present so that no stored note is overwritten.
    pub fn with_backend(backend: S) -> Self {
        let next_id = backend.ids().max().map_or(FIRST_ID, |max| max + 1);
        Self { backend, next_id }
    }

    /// Stores a new note and returns it.
    ///
    /// Fails with [`NotezError::InvalidArgument`] when the title is missing or
    /// blank, or the content is missing. Nothing is stored on failure.
    pub fn add(&mut self, title: Option<&str>, content: Option<&str>) -> Result<&Note> {
        let title = non_blank(title).ok_or_else(|| {
            NotezError::InvalidArgument("Title cannot be null or empty".to_string())
        })?;
        let content = content
            .ok_or_else(|| NotezError::InvalidArgument("Content cannot be null".to_string()))?;

        let id = self.next_id;
        self.next_id += 1;

        let mut note = Note::new(title, content);
        note.set_id(Some(id));
        self.backend.insert(id, note);
        debug!(id, title, "note added");

        self.backend.get(id).ok_or(NotezError::NotFound(id))
    }

    /// Replaces the title and/or content of a stored note.
    ///
    /// A `None` or blank title keeps the current title; a `None` content keeps
    /// the current content. Fails with [`NotezError::NotFound`] for an unknown id.
    pub fn update(
        &mut self,
        id: NoteId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<&Note> {
        let note = self.backend.get_mut(id).ok_or(NotezError::NotFound(id))?;

        if let Some(title) = non_blank(title) {
            note.set_title(title);
        }
        if let Some(content) = content {
            note.set_content(content);
        }
        debug!(id, "note updated");

        Ok(&*note)
    }

    /// Returns whether a note was actually removed.
    pub fn delete(&mut self, id: NoteId) -> bool {
        let removed = self.backend.remove(id).is_some();
        debug!(id, removed, "note delete");
        removed
    }

    pub fn find_by_id(&self, id: NoteId) -> Option<&Note> {
        self.backend.get(id)
    }

    /// Case-insensitive substring search over titles.
    ///
    /// A missing or blank query matches nothing.
    pub fn find_by_title(&self, query: Option<&str>) -> Vec<Note> {
        let Some(query) = non_blank(query) else {
            return Vec::new();
        };
        let query = query.to_lowercase();

        self.backend
            .iter()
            .filter(|note| note.title().to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Snapshot of every stored note.
    pub fn list_all(&self) -> Vec<Note> {
        self.backend.iter().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.backend.len()
    }

    /// Removes every note and restarts ids at 1.
    pub fn clear(&mut self) {
        self.backend.clear();
        self.next_id = FIRST_ID;
        debug!("store cleared");
    }

    /// The id the next successful `add` will assign.
    pub fn next_id(&self) -> NoteId {
        self.next_id
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
