//! # API Facade
//!
//! The single entry point for UI clients. `NotezApi` owns a [`NoteStore`] and
//! dispatches each call to the matching command in `commands/*.rs`.
//!
//! The facade does not print, format or hold business logic; it returns
//! [`CmdResult`]s and lets the caller decide how to present them. Errors from
//! the store (`InvalidArgument`, `NotFound`) propagate unchanged.
//!
//! Generic over [`DataStore`] like the store itself; the binary and the tests
//! both use the in-memory backend.

use crate::commands;
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{DataStore, InMemoryStore, NoteStore};

pub struct NotezApi<S: DataStore = InMemoryStore> {
    store: NoteStore<S>,
}

impl NotezApi<InMemoryStore> {
    pub fn in_memory() -> Self {
        Self::new(NoteStore::new())
    }
}

impl<S: DataStore> NotezApi<S> {
    pub fn new(store: NoteStore<S>) -> Self {
        Self { store }
    }

    pub fn create_note(&mut self, title: &str, content: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, Some(title), Some(content))
    }

    pub fn update_note(&mut self, id: NoteId, update: &NoteUpdate) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_notes(&mut self, ids: &[NoteId]) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn view_notes(&self, ids: &[NoteId]) -> Result<CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn search_notes(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, Some(term))
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn count_notes(&self) -> Result<CmdResult> {
        commands::count::run(&self.store)
    }

    pub fn clear_notes(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    pub fn store(&self) -> &NoteStore<S> {
        &self.store
    }
}

pub use commands::update::NoteUpdate;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
