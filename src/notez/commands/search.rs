use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, NoteStore};

pub fn run<S: DataStore>(store: &NoteStore<S>, term: Option<&str>) -> Result<CmdResult> {
    let mut matches = store.find_by_title(term);
    matches.sort_by_key(|note| note.id());

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No matching notes."));
    }
    Ok(result.with_listed_notes(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_title_matches_by_id() {
        let store = StoreFixture::new()
            .with_note("Shopping List", "")
            .with_note("Meeting Notes", "")
            .with_note("Ideas", "")
            .with_note("Notes on Rust", "")
            .store;

        let result = run(&store, Some("note")).unwrap();
        let titles: Vec<_> = result.listed_notes.iter().map(|n| n.title()).collect();
        assert_eq!(titles, vec!["Meeting Notes", "Notes on Rust"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn blank_term_matches_nothing() {
        let store = StoreFixture::new().with_notes(2).store;
        let result = run(&store, Some(" ")).unwrap();
        assert!(result.listed_notes.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
