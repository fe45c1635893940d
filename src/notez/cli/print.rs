use colored::Colorize;
use notez::api::{CmdMessage, MessageLevel};
use notez::model::Note;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// `- <title>: <content>`, with the content flattened to one line and cut to
/// fit the line width.
pub(crate) fn print_notes_with_content(notes: &[Note]) {
    for note in notes {
        let prefix = format!("- {}: ", note.title());
        let available = LINE_WIDTH.saturating_sub(prefix.width());
        let flat: String = note
            .content()
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        println!("- {}: {}", note.title().bold(), truncate_to_width(&flat, available));
    }
}

pub(crate) fn print_titles(notes: &[Note]) {
    for note in notes {
        println!("- {}", note.title());
    }
}

pub(crate) fn print_titles_with_ids(notes: &[Note]) {
    for note in notes {
        let id = note.id().map(|id| id.to_string()).unwrap_or_default();
        println!("- {} (ID: {})", note.title(), id.yellow());
    }
}

pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
