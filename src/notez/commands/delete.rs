use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{DataStore, NoteStore};

/// Deletes the given ids. Missing ids are reported as warnings, not errors.
pub fn run<S: DataStore>(store: &mut NoteStore<S>, ids: &[NoteId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        match store.find_by_id(id).cloned() {
            Some(note) => {
                store.delete(id);
                result.add_message(CmdMessage::success(format!(
                    "Note deleted ({}): {}",
                    id,
                    note.title()
                )));
                result.affected_notes.push(note);
            }
            None => result.add_message(CmdMessage::warning(format!("Note {} not found", id))),
        }
    }

    Ok(result)
}
