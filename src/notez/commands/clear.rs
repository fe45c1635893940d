use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, NoteStore};

pub fn run<S: DataStore>(store: &mut NoteStore<S>) -> Result<CmdResult> {
    let removed = store.count();
    store.clear();

    let mut result = CmdResult::default().with_count(0);
    result.add_message(CmdMessage::success(format!("Cleared {} notes", removed)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn clears_and_restarts_ids() {
        let mut store = StoreFixture::new().with_notes(2).store;
        let result = run(&mut store).unwrap();

        assert_eq!(result.messages[0].content, "Cleared 2 notes");
        assert_eq!(store.count(), 0);
        assert_eq!(store.add(Some("New"), Some("")).unwrap().id(), Some(1));
    }
}
