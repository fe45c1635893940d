//! # Storage Layer
//!
//! Notes live in memory only. The layer is split in two:
//!
//! - [`DataStore`]: the raw `id -> Note` mapping. It knows nothing about ids
//!   being generated, titles being trimmed or errors; it just holds notes.
//!   [`memory::InMemoryStore`] is the only backend.
//!
//! - [`NoteStore`]: the registry callers use. It owns a backend and the id
//!   counter, validates input, and is the only place ids are minted.
//!
//! ## Concurrency
//!
//! `NoteStore` takes `&mut self` for every mutation, so the borrow checker is
//! the exclusion boundary for single-owner use. When several threads need the
//! same store, wrap it in [`SharedNoteStore`], which holds one mutex around the
//! whole registry so that id allocation and insertion happen under the same
//! lock.

use crate::model::{Note, NoteId};

pub mod memory;
pub mod note_store;
pub mod shared;

pub use memory::InMemoryStore;
pub use note_store::NoteStore;
pub use shared::SharedNoteStore;

/// Abstract interface for note storage.
pub trait DataStore {
    /// Insert a note under `id`, replacing any previous note with that id.
    fn insert(&mut self, id: NoteId, note: Note);

    fn get(&self, id: NoteId) -> Option<&Note>;

    fn get_mut(&mut self, id: NoteId) -> Option<&mut Note>;

    /// Remove and return the note stored under `id`.
    fn remove(&mut self, id: NoteId) -> Option<Note>;

    /// Borrow every stored note, in backend order. Callers that need a
    /// snapshot clone from this.
    fn iter(&self) -> Box<dyn Iterator<Item = &Note> + '_>;

    /// Every key currently in use.
    fn ids(&self) -> Box<dyn Iterator<Item = NoteId> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}
