use super::{DataStore, InMemoryStore, NoteStore};
use crate::error::Result;
use crate::model::{Note, NoteId};
use std::sync::{Arc, Mutex, MutexGuard};

/// A [`NoteStore`] behind a single lock, for use from several threads.
///
/// Every operation holds the lock for its whole duration, so id allocation
/// and insertion are never interleaved. Clones share the same store. Notes
/// are returned by value.
pub struct SharedNoteStore<S: DataStore = InMemoryStore> {
    inner: Arc<Mutex<NoteStore<S>>>,
}

impl SharedNoteStore<InMemoryStore> {
    pub fn new() -> Self {
        Self::from_store(NoteStore::new())
    }
}

impl Default for SharedNoteStore<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DataStore> Clone for SharedNoteStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DataStore> SharedNoteStore<S> {
    pub fn from_store(store: NoteStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // Validation runs before any mutation, so a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, NoteStore<S>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, title: Option<&str>, content: Option<&str>) -> Result<Note> {
        self.lock().add(title, content).cloned()
    }

    pub fn update(&self, id: NoteId, title: Option<&str>, content: Option<&str>) -> Result<Note> {
        self.lock().update(id, title, content).cloned()
    }

    pub fn delete(&self, id: NoteId) -> bool {
        self.lock().delete(id)
    }

    pub fn find_by_id(&self, id: NoteId) -> Option<Note> {
        self.lock().find_by_id(id).cloned()
    }

    pub fn find_by_title(&self, query: Option<&str>) -> Vec<Note> {
        self.lock().find_by_title(query)
    }

    pub fn list_all(&self) -> Vec<Note> {
        self.lock().list_all()
    }

    pub fn count(&self) -> usize {
        self.lock().count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotezError;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn clones_share_the_same_notes() {
        let store = SharedNoteStore::new();
        let other = store.clone();

        let note = store.add(Some("Shared"), Some("")).unwrap();
        assert_eq!(other.find_by_id(1), Some(note));
        assert_eq!(other.count(), 1);
    }

    #[test]
    fn concurrent_adds_get_distinct_ids() {
        let store = SharedNoteStore::new();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|i| {
                            let title = format!("t{}-{}", t, i);
                            store
                                .add(Some(title.as_str()), Some(""))
                                .unwrap()
                                .id()
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<NoteId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 200);
        assert_eq!(ids, (1..=200).collect::<HashSet<_>>());
        assert_eq!(store.count(), 200);
    }

    #[test]
    fn errors_pass_through() {
        let store = SharedNoteStore::new();
        assert!(matches!(
            store.add(Some(" "), Some("")),
            Err(NotezError::InvalidArgument(_))
        ));
        assert!(matches!(
            store.update(5, None, None),
            Err(NotezError::NotFound(5))
        ));
    }

    #[test]
    fn update_delete_and_clear() {
        let store = SharedNoteStore::new();
        store.add(Some("Title"), Some("Body")).unwrap();
        store.add(Some("Other"), Some("Body")).unwrap();

        let updated = store.update(1, Some("Renamed"), None).unwrap();
        assert_eq!(updated.title(), "Renamed");
        assert_eq!(store.find_by_title(Some("renamed")).len(), 1);

        assert!(store.delete(2));
        assert_eq!(store.list_all().len(), 1);

        store.clear();
        assert_eq!(store.count(), 0);
        assert_eq!(store.add(Some("Fresh"), Some("")).unwrap().id(), Some(1));
    }
}
