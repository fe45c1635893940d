use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DataStore, NoteStore};

pub fn run<S: DataStore>(store: &NoteStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_count(store.count()))
}
