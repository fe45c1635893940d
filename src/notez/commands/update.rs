use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::{DataStore, NoteStore};

/// Partial edit of a stored note. `None` fields are left as they are.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self { title, content }
    }
}

pub fn run<S: DataStore>(
    store: &mut NoteStore<S>,
    id: NoteId,
    update: &NoteUpdate,
) -> Result<CmdResult> {
    let note = store
        .update(id, update.title.as_deref(), update.content.as_deref())?
        .clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Updated note: {}", note)));
    Ok(result.with_affected_notes(vec![note]))
}
