use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DataStore, NoteStore};

/// Every stored note, ordered by id for stable output.
pub fn run<S: DataStore>(store: &NoteStore<S>) -> Result<CmdResult> {
    let mut notes = store.list_all();
    notes.sort_by_key(|note| note.id());
    Ok(CmdResult::default().with_listed_notes(notes))
}
