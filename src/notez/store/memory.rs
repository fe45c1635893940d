use super::DataStore;
use crate::model::{Note, NoteId};
use std::collections::HashMap;

/// HashMap-backed storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: HashMap<NoteId, Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, id: NoteId, note: Note) {
        self.notes.insert(id, note);
    }

    fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.get_mut(&id)
    }

    fn remove(&mut self, id: NoteId) -> Option<Note> {
        self.notes.remove(&id)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Note> + '_> {
        Box::new(self.notes.values())
    }

    fn ids(&self) -> Box<dyn Iterator<Item = NoteId> + '_> {
        Box::new(self.notes.keys().copied())
    }

    fn len(&self) -> usize {
        self.notes.len()
    }

    fn clear(&mut self) {
        self.notes.clear();
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use crate::store::NoteStore;

    /// Builder for a `NoteStore` pre-populated with notes.
    pub struct StoreFixture {
        pub store: NoteStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let content = format!("Content for note {}", i + 1);
                self.store
                    .add(Some(title.as_str()), Some(content.as_str()))
                    .unwrap();
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            self.store.add(Some(title), Some(content)).unwrap();
            self
        }
    }
}
