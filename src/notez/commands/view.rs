use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{DataStore, NoteStore};

pub fn run<S: DataStore>(store: &NoteStore<S>, ids: &[NoteId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        match store.find_by_id(id) {
            Some(note) => result.listed_notes.push(note.clone()),
            None => result.add_message(CmdMessage::warning(format!("Note {} not found", id))),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_found_notes_in_requested_order() {
        let store = StoreFixture::new().with_notes(3).store;
        let result = run(&store, &[3, 1, 9]).unwrap();

        let ids: Vec<_> = result.listed_notes.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![Some(3), Some(1)]);
        assert_eq!(result.messages.len(), 1);
    }
}
