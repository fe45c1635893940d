use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, NoteStore};

pub fn run<S: DataStore>(
    store: &mut NoteStore<S>,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<CmdResult> {
    let note = store.add(title, content)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added note: {}", note)));
    Ok(result.with_affected_notes(vec![note]))
}
